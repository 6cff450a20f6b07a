use crate::skip::SkipCatalog;
use thiserror::Error;

/// Base endpoint of the production catalog API.
pub const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk/api";

/// Message shown when a failure carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to load skip data";

/// Location parameters for a catalog lookup.
///
/// The values travel to the endpoint verbatim: no validation, no
/// normalization, no escaping. Earlier steps of the flow own their shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub postcode: String,
    pub area: String,
}

impl Location {
    #[must_use]
    pub fn new(postcode: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

impl Default for Location {
    /// The location the flow ships with when deployed standalone.
    fn default() -> Self {
        Self::new("NR32", "Lowestoft")
    }
}

/// Failure classes of one catalog fetch.
///
/// All three normalize to a user-facing message; the page stores that
/// message and stays interactive, retry being the only recovery path.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The endpoint answered outside the success range.
    #[error("Error: {status} - {status_text}")]
    Status { status: u16, status_text: String },
    /// The request never completed.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The body was not a JSON array of skips.
    #[error("Invalid skip data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    /// Message for the error panel. Falls back to the generic message for
    /// the (unexpected) case of an empty one.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Build the by-location catalog URL. Parameter values pass through
/// untouched.
#[must_use]
pub fn by_location_url(base: &str, location: &Location) -> String {
    format!(
        "{base}/skips/by-location?postcode={postcode}&area={area}",
        postcode = location.postcode,
        area = location.area,
    )
}

/// Parse a catalog response body.
///
/// # Errors
///
/// Returns `CatalogError::Parse` unless the body is a JSON array of
/// well-formed skips.
pub fn parse_catalog(body: &str) -> Result<SkipCatalog, CatalogError> {
    Ok(SkipCatalog::from_json(body)?)
}

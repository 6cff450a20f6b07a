//! Remote catalog client: one browser `fetch` per invocation, no retries,
//! no timeout, no caching. The page decides when to try again.

use skiphire_checkout::skip::SkipCatalog;
use skiphire_checkout::{CatalogError, Location, by_location_url, parse_catalog};
use wasm_bindgen_futures::JsFuture;

use crate::dom;

/// Fetch the skip catalog for `location`.
///
/// # Errors
///
/// `Status` for an answer outside the success range, `Transport` when the
/// request never completes, `Parse` when the body is not a JSON array of
/// well-formed skips.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_skips(base: &str, location: &Location) -> Result<SkipCatalog, CatalogError> {
    let url = by_location_url(base, location);
    let response = dom::fetch_response(&url)
        .await
        .map_err(|err| CatalogError::Transport(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(CatalogError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text_js = JsFuture::from(
        response
            .text()
            .map_err(|err| CatalogError::Transport(dom::js_error_message(&err)))?,
    )
    .await
    .map_err(|err| CatalogError::Transport(dom::js_error_message(&err)))?;

    let text = text_js
        .as_string()
        .ok_or_else(|| CatalogError::Transport("response body was not text".to_string()))?;

    parse_catalog(&text)
}

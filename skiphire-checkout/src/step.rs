use crate::catalog::FALLBACK_ERROR_MESSAGE;
use crate::selection::Selection;
use crate::skip::Skip;

/// Fetch lifecycle of the catalog list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// State of the "choose skip size" step, owned by the page.
///
/// Fetches are identified by caller-allocated tokens: `begin_fetch` records
/// the token of the request being started, and a resolution presenting any
/// other token is discarded. Overlapping fetches therefore settle on the
/// most recently *started* request, not on whichever response lands last.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepState {
    skips: Vec<Skip>,
    phase: FetchPhase,
    error: Option<String>,
    selection: Selection,
    current_token: Option<u64>,
}

impl StepState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> FetchPhase {
        self.phase
    }

    #[must_use]
    pub fn skips(&self) -> &[Skip] {
        &self.skips
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    /// Enter `Loading` and clear any prior error. Serves the mount fetch,
    /// location changes, and retry alike; `token` must accompany the
    /// matching resolution.
    pub fn begin_fetch(&mut self, token: u64) {
        self.phase = FetchPhase::Loading;
        self.error = None;
        self.current_token = Some(token);
    }

    fn is_current(&self, token: u64) -> bool {
        self.current_token == Some(token)
    }

    /// Apply a successful response: the list is replaced wholesale and a
    /// selection the new list no longer supports is cleared. Returns `false`
    /// (and changes nothing) when `token` does not belong to the most
    /// recently started fetch.
    pub fn resolve_success(&mut self, token: u64, skips: Vec<Skip>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.skips = skips;
        self.selection.prune(&self.skips);
        self.phase = FetchPhase::Loaded;
        self.error = None;
        true
    }

    /// Apply a failed response. Empty messages fall back to the generic one.
    /// Stale tokens are discarded exactly as in [`Self::resolve_success`].
    pub fn resolve_failure(&mut self, token: u64, message: impl Into<String>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        let message = message.into();
        self.error = Some(if message.is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        });
        self.phase = FetchPhase::Failed;
        true
    }

    /// Toggle the selection. Restricted or unknown ids leave the state
    /// untouched; selection is independent of the fetch phase.
    pub fn select(&mut self, id: u32) {
        self.selection.toggle(&self.skips, id);
    }

    /// The record behind the selected id, freshly derived from the list.
    #[must_use]
    pub fn selected_skip(&self) -> Option<&Skip> {
        self.selection.resolve(&self.skips)
    }

    /// The continue hand-off is reachable only while this holds.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.selected_skip().is_some()
    }
}

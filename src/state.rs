use crate::data::model::Dataset;
use crate::data::summary::LabelSummary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Label distribution summary, computed once per load.
    pub summary: Option<LabelSummary>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl AppState {
    /// Ingest a newly loaded dataset and its summary.
    pub fn set_dataset(&mut self, dataset: Dataset, summary: LabelSummary) {
        self.dataset = Some(dataset);
        self.summary = Some(summary);
        self.status_message = None;
        self.loading = false;
    }
}

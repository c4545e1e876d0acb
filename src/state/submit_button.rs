// ============================================================================
// SUBMIT BUTTON STATE - Busy/idle label bookkeeping for the upload button
// ============================================================================

use crate::utils::{UPLOAD_BUSY_LABEL, UPLOAD_IDLE_LABEL};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SubmitButtonState {
    saved_label: Option<String>,
}

impl SubmitButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers the current label and returns the busy one. A second call
    /// while busy keeps the first saved label.
    pub fn begin(&mut self, current_label: String) -> &'static str {
        if self.saved_label.is_none() {
            self.saved_label = Some(current_label);
        }
        UPLOAD_BUSY_LABEL
    }

    /// Label to restore. Falls back to the idle label when nothing was saved.
    pub fn finish(&mut self) -> String {
        self.saved_label
            .take()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or_else(|| UPLOAD_IDLE_LABEL.to_string())
    }
}

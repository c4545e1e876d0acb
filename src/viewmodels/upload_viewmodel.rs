// ============================================================================
// UPLOAD VIEWMODEL
// ============================================================================

use crate::error::ClientError;
use crate::models::{SubmitOutcome, UploadSubmission};
use crate::services::AnalyzerApi;
use crate::utils::UPLOAD_NETWORK_ERROR;
use crate::viewmodels::{report_error, PageEffects};

pub struct UploadViewModel<A> {
    api: A,
}

impl<A: AnalyzerApi> UploadViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Validates the selection, then posts it. The submit control stays busy
    /// after a redirect and is released on every other outcome.
    pub async fn submit<P: PageEffects>(
        &self,
        selected: Option<A::File>,
        page: &P,
    ) -> Result<String, ClientError> {
        let upload = match UploadSubmission::from_selection(selected) {
            Ok(upload) => upload,
            Err(rejection) => {
                return Err(report_error(rejection.into(), page, UPLOAD_NETWORK_ERROR));
            }
        };

        page.set_upload_busy(true);

        let error = match self.api.submit_upload(&upload).await {
            Ok(SubmitOutcome::Redirect(target)) => {
                log::info!("✅ [UPLOAD] {} accepted, navigating to {}", upload.file_name, target);
                page.navigate(&target);
                return Ok(target);
            }
            Ok(SubmitOutcome::Rejected(reason)) => ClientError::Rejected(reason),
            Err(error) => error,
        };

        let error = report_error(error, page, UPLOAD_NETWORK_ERROR);
        page.set_upload_busy(false);
        Err(error)
    }
}

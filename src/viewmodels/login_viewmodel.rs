// ============================================================================
// LOGIN VIEWMODEL
// ============================================================================

use crate::error::ClientError;
use crate::models::{LoginSubmission, SubmitOutcome};
use crate::services::AnalyzerApi;
use crate::utils::LOGIN_NETWORK_ERROR;
use crate::viewmodels::{report_error, PageEffects};

pub struct LoginViewModel<A> {
    api: A,
}

impl<A: AnalyzerApi> LoginViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Single best-effort attempt. On success returns the redirect target
    /// the page was sent to.
    pub async fn submit<P: PageEffects>(
        &self,
        login: &LoginSubmission,
        page: &P,
    ) -> Result<String, ClientError> {
        match self.api.submit_login(login).await {
            Ok(SubmitOutcome::Redirect(target)) => {
                log::info!("✅ [LOGIN] Accepted, navigating to {}", target);
                page.navigate(&target);
                Ok(target)
            }
            Ok(SubmitOutcome::Rejected(reason)) => {
                Err(report_error(ClientError::Rejected(reason), page, LOGIN_NETWORK_ERROR))
            }
            Err(error) => Err(report_error(error, page, LOGIN_NETWORK_ERROR)),
        }
    }
}

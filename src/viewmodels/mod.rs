// ============================================================================
// VIEWMODELS - Page logic, generic over the API and the page effects
// ============================================================================

pub mod page_effects;
pub mod login_viewmodel;
pub mod upload_viewmodel;
pub mod status_viewmodel;

pub use page_effects::PageEffects;
pub use login_viewmodel::LoginViewModel;
pub use upload_viewmodel::UploadViewModel;
pub use status_viewmodel::StatusViewModel;

use crate::error::ClientError;

/// Logs `error` and shows its user-facing text, if it has one.
pub(crate) fn report_error<P: PageEffects>(
    error: ClientError,
    page: &P,
    network_message: &str,
) -> ClientError {
    match &error {
        ClientError::Validation(_) | ClientError::Rejected(_) => log::warn!("⚠️ {}", error),
        _ => log::error!("❌ {}", error),
    }
    if let Some(message) = error.user_message(network_message) {
        page.show_error(&message);
    }
    error
}

use crate::error::ClientError;
use crate::models::{LoginSubmission, StatusReport, SubmitOutcome, UploadFile, UploadSubmission};

/// The three analyzer endpoints, as seen by the view models.
#[allow(async_fn_in_trait)]
pub trait AnalyzerApi {
    type File: UploadFile;

    /// `POST /login`. `Err` only when the request could not complete.
    async fn submit_login(&self, login: &LoginSubmission) -> Result<SubmitOutcome, ClientError>;

    /// `POST /upload`. `Err` only when the request could not complete.
    async fn submit_upload(
        &self,
        upload: &UploadSubmission<Self::File>,
    ) -> Result<SubmitOutcome, ClientError>;

    /// `GET /status`.
    async fn fetch_status(&self) -> Result<StatusReport, ClientError>;
}

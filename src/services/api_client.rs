// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No page logic here: builds multipart bodies, sends them and reports how
// the server answered.
// ============================================================================

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::{File, FormData, RequestRedirect};

use crate::config::{AppConfig, CONFIG};
use crate::error::ClientError;
use crate::models::{LoginSubmission, StatusReport, SubmitOutcome, UploadSubmission};
use crate::services::error_fragment::extract_error_reason;
use crate::services::traits::AnalyzerApi;

#[derive(Clone, Debug)]
pub struct ApiClient {
    login_url: String,
    upload_url: String,
    status_url: String,
    status_timeout_ms: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::from_config(&CONFIG)
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            login_url: config.login_url(),
            upload_url: config.upload_url(),
            status_url: config.status_url(),
            status_timeout_ms: config.status_request_timeout_ms,
        }
    }

    /// Posts a multipart body, following redirects.
    async fn post_form(&self, url: &str, form: FormData) -> Result<SubmitOutcome, ClientError> {
        let response = Request::post(url)
            .redirect(RequestRedirect::Follow)
            .body(form)?
            .send()
            .await?;

        if response.redirected() {
            let target = response.url();
            log::info!("↪️ [HTTP] {} redirected to {}", url, target);
            return Ok(submit_outcome(true, target, ""));
        }

        let status = response.status();
        let body = response.text().await?;
        let outcome = submit_outcome(false, response.url(), &body);
        log::warn!("⚠️ [HTTP] {} answered {} without redirect: {:?}", url, status, outcome);
        Ok(outcome)
    }

    async fn get_status(&self) -> Result<StatusReport, ClientError> {
        let response = Request::get(&self.status_url).send().await?;
        if !response.ok() {
            return Err(ClientError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }
        let body = response.text().await?;
        StatusReport::parse(&body).map_err(|e| ClientError::InvalidStatus(e.to_string()))
    }
}

/// A followed redirect means the server accepted the form; anything else is a
/// rejection, with the reason read from the body.
pub fn submit_outcome(redirected: bool, final_url: String, body: &str) -> SubmitOutcome {
    if redirected {
        SubmitOutcome::Redirect(final_url)
    } else {
        SubmitOutcome::Rejected(extract_error_reason(body))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerApi for ApiClient {
    type File = File;

    async fn submit_login(&self, login: &LoginSubmission) -> Result<SubmitOutcome, ClientError> {
        log::debug!("🔐 [LOGIN] Submitting credentials");
        let form = FormData::new()?;
        for (name, value) in login.form_fields() {
            form.append_with_str(name, value)?;
        }
        self.post_form(&self.login_url, form).await
    }

    async fn submit_upload(&self, upload: &UploadSubmission<File>) -> Result<SubmitOutcome, ClientError> {
        log::info!(
            "📤 [UPLOAD] Uploading {} ({} bytes)",
            upload.file_name,
            upload.file.size()
        );
        let form = FormData::new()?;
        form.append_with_blob_and_filename("file", &upload.file, &upload.file_name)?;
        self.post_form(&self.upload_url, form).await
    }

    /// Bounded by the configured request timeout; a timeout is a network error.
    async fn fetch_status(&self) -> Result<StatusReport, ClientError> {
        let request = Box::pin(self.get_status());
        let timeout = Box::pin(TimeoutFuture::new(self.status_timeout_ms));

        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ClientError::Network(format!(
                "status request timed out after {} ms",
                self.status_timeout_ms
            ))),
        }
    }
}

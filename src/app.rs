// ============================================================================
// APP - Installs the page behaviors on load
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom::{current_path, BrowserPage};
use crate::services::ApiClient;
use crate::state::PollSession;
use crate::views::{install_login_form, install_upload_form, start_status_poller};

pub struct App {
    api: ApiClient,
    page: BrowserPage,
    poll_session: Option<PollSession>,
}

impl App {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
            page: BrowserPage::new(),
            poll_session: None,
        }
    }

    /// Wires whatever the current page offers. Calling it again does not
    /// start a second poller.
    pub fn mount(&mut self) -> Result<(), JsValue> {
        let login = install_login_form(&self.api, &self.page)?;
        let upload = install_upload_form(&self.api, &self.page)?;

        let path = current_path()?;
        if should_start_poller(&path, &CONFIG.analysis_path, self.poll_session.is_some()) {
            self.poll_session = Some(start_status_poller(&self.api, &self.page));
        }

        log::info!(
            "🚀 [APP] Mounted on {} (login: {}, upload: {}, polling: {})",
            path,
            login,
            upload,
            self.is_polling()
        );
        Ok(())
    }

    pub fn is_polling(&self) -> bool {
        self.poll_session
            .as_ref()
            .is_some_and(PollSession::is_active)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Polling runs only on the analysis page, once per page load.
pub fn should_start_poller(path: &str, analysis_path: &str, already_started: bool) -> bool {
    !already_started && path == analysis_path
}

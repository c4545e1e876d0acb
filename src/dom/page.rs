// ============================================================================
// BROWSER PAGE - PageEffects over the live DOM
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;

use crate::dom::{button_by_id, display_error, html_element_by_id, navigate_to, set_style};
use crate::state::SubmitButtonState;
use crate::utils::{PROGRESS_BAR_ID, SUBMIT_BUTTON_ID};
use crate::viewmodels::PageEffects;

#[derive(Clone, Default)]
pub struct BrowserPage {
    upload_button: Rc<RefCell<SubmitButtonState>>,
}

impl BrowserPage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageEffects for BrowserPage {
    fn navigate(&self, url: &str) {
        if let Err(e) = navigate_to(url) {
            log::error!("❌ [NAV] Could not navigate to {}: {:?}", url, e);
        }
    }

    fn show_error(&self, message: &str) {
        if let Err(e) = display_error(message) {
            log::error!("❌ [ERROR] Could not display '{}': {:?}", message, e);
        }
    }

    fn set_progress(&self, percent: u8) {
        let Some(bar) = html_element_by_id(PROGRESS_BAR_ID) else {
            return;
        };
        if let Err(e) = set_style(&bar, "width", &format!("{}%", percent)) {
            log::warn!("⚠️ [STATUS] Could not update progress bar: {:?}", e);
        }
    }

    fn set_upload_busy(&self, busy: bool) {
        let Some(button) = button_by_id(SUBMIT_BUTTON_ID) else {
            return;
        };
        let mut state = self.upload_button.borrow_mut();
        if busy {
            let label = state.begin(button.inner_html());
            button.set_disabled(true);
            button.set_inner_html(label);
        } else {
            button.set_disabled(false);
            button.set_inner_html(&state.finish());
        }
    }

    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

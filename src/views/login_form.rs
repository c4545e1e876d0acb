// ============================================================================
// LOGIN FORM - Wires #login-form to the LoginViewModel
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{checkbox_checked, get_element_by_id, input_value, on_submit, BrowserPage};
use crate::models::LoginSubmission;
use crate::services::ApiClient;
use crate::utils::{LOGIN_FORM_ID, PASSWORD_INPUT_ID, REMEMBER_INPUT_ID, USERNAME_INPUT_ID};
use crate::viewmodels::LoginViewModel;

/// Installs the submit handler. Returns `false` when the page has no login form.
pub fn install_login_form(api: &ApiClient, page: &BrowserPage) -> Result<bool, JsValue> {
    let Some(form) = get_element_by_id(LOGIN_FORM_ID) else {
        return Ok(false);
    };

    let view_model = Rc::new(LoginViewModel::new(api.clone()));
    let page = page.clone();

    on_submit(&form, move |_event| {
        let login = match read_login_form() {
            Ok(login) => login,
            Err(e) => {
                log::error!("❌ [LOGIN] Could not read login form: {:?}", e);
                return;
            }
        };

        let view_model = view_model.clone();
        let page = page.clone();
        spawn_local(async move {
            if let Err(e) = view_model.submit(&login, &page).await {
                log::info!("🔐 [LOGIN] Submission ended without redirect: {}", e);
            }
        });
    })?;

    log::info!("✅ [LOGIN] Handler installed on #{}", LOGIN_FORM_ID);
    Ok(true)
}

fn read_login_form() -> Result<LoginSubmission, JsValue> {
    Ok(LoginSubmission::new(
        input_value(USERNAME_INPUT_ID)?,
        input_value(PASSWORD_INPUT_ID)?,
        checkbox_checked(REMEMBER_INPUT_ID)?,
    ))
}

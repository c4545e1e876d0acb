// ============================================================================
// UPLOAD FORM - Wires #upload-form to the UploadViewModel
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, on_submit, selected_file, BrowserPage};
use crate::services::ApiClient;
use crate::utils::{FILE_INPUT_ID, UPLOAD_FORM_ID};
use crate::viewmodels::UploadViewModel;

/// Installs the submit handler. Returns `false` when the page has no upload form.
pub fn install_upload_form(api: &ApiClient, page: &BrowserPage) -> Result<bool, JsValue> {
    let Some(form) = get_element_by_id(UPLOAD_FORM_ID) else {
        return Ok(false);
    };

    let view_model = Rc::new(UploadViewModel::new(api.clone()));
    let page = page.clone();

    on_submit(&form, move |_event| {
        let selected = match selected_file(FILE_INPUT_ID) {
            Ok(selected) => selected,
            Err(e) => {
                log::error!("❌ [UPLOAD] Could not read #{}: {:?}", FILE_INPUT_ID, e);
                return;
            }
        };

        let view_model = view_model.clone();
        let page = page.clone();
        spawn_local(async move {
            if let Err(e) = view_model.submit(selected, &page).await {
                log::info!("📤 [UPLOAD] Submission ended without redirect: {}", e);
            }
        });
    })?;

    log::info!("✅ [UPLOAD] Handler installed on #{}", UPLOAD_FORM_ID);
    Ok(true)
}

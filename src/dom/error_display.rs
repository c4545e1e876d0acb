// ============================================================================
// ERROR DISPLAY - One inline danger alert per page
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use crate::dom::{get_element_by_id, query_selector, set_style, set_text_content, ElementBuilder};
use crate::utils::{ERROR_MESSAGE_CLASS, ERROR_MESSAGE_ID};

/// Shows `message` in `#error-message`, creating it before the first form
/// on first use. Later calls reuse the same element.
pub fn display_error(message: &str) -> Result<Element, JsValue> {
    let element = match get_element_by_id(ERROR_MESSAGE_ID) {
        Some(existing) => existing,
        None => create_error_element()?,
    };

    set_text_content(&element, message);
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        set_style(html, "display", "block")?;
    }
    Ok(element)
}

fn create_error_element() -> Result<Element, JsValue> {
    let element = ElementBuilder::new("div")?
        .id(ERROR_MESSAGE_ID)?
        .class(ERROR_MESSAGE_CLASS)
        .build();

    // Without a form the element stays detached.
    match query_selector("form")? {
        Some(form) => match form.parent_node() {
            Some(parent) => {
                let anchor: &Node = &form;
                parent.insert_before(&element, Some(anchor))?;
            }
            None => log::warn!("⚠️ [ERROR] First form has no parent, error box not attached"),
        },
        None => log::warn!("⚠️ [ERROR] No form on page, error box not attached"),
    }

    Ok(element)
}

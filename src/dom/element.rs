// ============================================================================
// ELEMENT HELPERS - Typed lookups over the current document
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, File, HtmlButtonElement, HtmlElement, HtmlInputElement, Window};

/// Browser window, absent outside a page.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Document of the current window.
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Element by id, `None` when the page lacks it.
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Detached element of the given tag.
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Replaces the element's class list.
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Sets text content, dropping any children.
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Sets a single attribute.
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// First element matching `selector`.
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Element by id as an `HtmlElement`.
pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Input by id. Errors when missing or not an `<input>`.
pub fn input_by_id(id: &str) -> Result<HtmlInputElement, JsValue> {
    get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", id)))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not an input", id)))
}

/// Button by id as an `HtmlButtonElement`.
pub fn button_by_id(id: &str) -> Option<HtmlButtonElement> {
    get_element_by_id(id)?.dyn_into::<HtmlButtonElement>().ok()
}

/// Current value of a text input.
pub fn input_value(id: &str) -> Result<String, JsValue> {
    Ok(input_by_id(id)?.value())
}

/// Checked state of a checkbox input.
pub fn checkbox_checked(id: &str) -> Result<bool, JsValue> {
    Ok(input_by_id(id)?.checked())
}

/// First file picked in a file input, if any.
pub fn selected_file(id: &str) -> Result<Option<File>, JsValue> {
    Ok(input_by_id(id)?.files().and_then(|files| files.get(0)))
}

/// Sets one inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    element.style().set_property(property, value)
}

/// Path component of the current location.
pub fn current_path() -> Result<String, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .pathname()
}

/// Sends the browser to `url`.
pub fn navigate_to(url: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(url)
}

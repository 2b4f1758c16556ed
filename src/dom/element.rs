// ============================================================================
// ELEMENT HELPERS - Lookup, classes, text, navigation
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, UrlSearchParams, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// `None` when the id is missing or is not an `<input>`
pub fn get_input(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Empty string for a missing input
pub fn input_value(id: &str) -> String {
    get_input(id).map(|input| input.value()).unwrap_or_default()
}

pub fn set_input_value(id: &str, value: &str) {
    if let Some(input) = get_input(id) {
        input.set_value(value);
    }
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Adds or removes `class` so that its presence equals `on`
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on).map(|_| ())
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Sets text on the element with `id`, if the page has one
pub fn set_text_by_id(id: &str, text: &str) {
    if let Some(element) = get_element_by_id(id) {
        set_text_content(&element, text);
    }
}

pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Inline `display` override; `None` falls back to the stylesheet
fn display_override(visible: bool) -> Option<&'static str> {
    if visible {
        None
    } else {
        Some("none")
    }
}

/// Shows or hides through the inline `display` property only, other inline
/// styles are kept
pub fn set_visible(element: &Element, visible: bool) -> Result<(), JsValue> {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = html.style();
    match display_override(visible) {
        Some(value) => style.set_property("display", value),
        None => style.remove_property("display").map(|_| ()),
    }
}

pub fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

pub fn navigate(url: &str) -> Result<(), JsValue> {
    log::info!("➡️ [NAV] {}", url);
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(url)
}

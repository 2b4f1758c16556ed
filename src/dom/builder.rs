// ============================================================================
// ELEMENT BUILDER - Chained construction of small DOM fragments
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, create_element, set_attribute, set_text_content};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Replaces all classes
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}

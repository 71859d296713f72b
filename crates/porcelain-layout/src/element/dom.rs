//! Browser element bridge
//!
//! Only compiled with the `wasm` feature.

use super::{Element, StyleProperty};
use crate::error::{LayoutError, LayoutResult};
use crate::math::{Rect, Size};
use wasm_bindgen::JsValue;

/// An `HtmlElement` positioned by the layout core
#[derive(Clone, Debug)]
pub struct DomElement {
    element: web_sys::HtmlElement,
}

impl DomElement {
    pub fn new(element: web_sys::HtmlElement) -> Self {
        Self { element }
    }

    /// The wrapped element
    pub fn html_element(&self) -> &web_sys::HtmlElement {
        &self.element
    }

    fn computed_property(&self, name: &str) -> LayoutResult<String> {
        let window = web_sys::window().ok_or_else(|| LayoutError::Dom("no window".into()))?;
        let declaration = window
            .get_computed_style(&self.element)
            .map_err(js_error)?
            .ok_or_else(|| LayoutError::Dom("no computed style".into()))?;
        declaration.get_property_value(name).map_err(js_error)
    }

    fn write_property(&self, name: &str, value: Option<&str>) -> LayoutResult<()> {
        let style = self.element.style();
        match value {
            Some(v) => style.set_property(name, v).map_err(js_error),
            None => style.remove_property(name).map(|_| ()).map_err(js_error),
        }
    }
}

fn js_error(value: JsValue) -> LayoutError {
    LayoutError::Dom(format!("{:?}", value))
}

impl Element for DomElement {
    fn computed_style(&self, property: StyleProperty) -> Option<String> {
        match self.computed_property(property.css_name()) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(property = property.css_name(), %err, "computed style unavailable");
                None
            }
        }
    }

    fn offset_rect(&self) -> Rect {
        Rect::from_xywh(
            f64::from(self.element.offset_left()),
            f64::from(self.element.offset_top()),
            f64::from(self.element.offset_width()),
            f64::from(self.element.offset_height()),
        )
    }

    fn intrinsic_size(&self) -> Size {
        Size::new(
            f64::from(self.element.scroll_width()),
            f64::from(self.element.scroll_height()),
        )
    }

    fn set_style(&self, property: StyleProperty, value: Option<String>) {
        if let Err(err) = self.write_property(property.css_name(), value.as_deref()) {
            tracing::warn!(property = property.css_name(), %err, "style write failed");
        }
    }
}

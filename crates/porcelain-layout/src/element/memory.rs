//! In-memory element
//!
//! Behaves like an absolutely positioned DOM node with no stylesheet: the
//! computed style is the inline style plus CSS initial values, and the
//! offset box is resolved from the inline box properties.

use super::{parse_css_length, px, Element, StyleProperty};
use crate::math::{Rect, Size};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Element backed by a style map
#[derive(Debug, Default)]
pub struct MemoryElement {
    style: RefCell<BTreeMap<StyleProperty, String>>,
    intrinsic: Cell<Size>,
}

impl MemoryElement {
    /// Create an element with zero intrinsic size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element whose content prefers `size`
    pub fn with_intrinsic_size(size: Size) -> Self {
        let element = Self::new();
        element.intrinsic.set(size);
        element
    }

    /// Change the content's preferred size
    pub fn set_intrinsic_size(&self, size: Size) {
        self.intrinsic.set(size);
    }

    /// Inline value of a property
    pub fn style(&self, property: StyleProperty) -> Option<String> {
        self.style.borrow().get(&property).cloned()
    }

    fn inline_length(&self, property: StyleProperty) -> Option<f64> {
        self.style
            .borrow()
            .get(&property)
            .and_then(|v| parse_css_length(v).ok())
    }

    /// Used width or height: inline value or content size, then min/max
    fn used_length(&self, value: StyleProperty, min: StyleProperty, max: StyleProperty) -> f64 {
        let intrinsic = self.intrinsic.get();
        let content = if value == StyleProperty::Width {
            intrinsic.width
        } else {
            intrinsic.height
        };
        let mut length = self.inline_length(value).unwrap_or(content);
        if let Some(max) = self.inline_length(max) {
            length = length.min(max);
        }
        if let Some(min) = self.inline_length(min) {
            length = length.max(min);
        }
        length
    }
}

impl Element for MemoryElement {
    fn computed_style(&self, property: StyleProperty) -> Option<String> {
        if let Some(value) = self.style(property) {
            return Some(value);
        }
        let initial = match property {
            StyleProperty::MinWidth | StyleProperty::MinHeight => "0px".to_string(),
            StyleProperty::MaxWidth | StyleProperty::MaxHeight => "none".to_string(),
            StyleProperty::Left | StyleProperty::Top | StyleProperty::ZIndex => {
                "auto".to_string()
            }
            StyleProperty::Width => px(self.offset_rect().width()),
            StyleProperty::Height => px(self.offset_rect().height()),
        };
        Some(initial)
    }

    fn offset_rect(&self) -> Rect {
        let left = self.inline_length(StyleProperty::Left).unwrap_or(0.0);
        let top = self.inline_length(StyleProperty::Top).unwrap_or(0.0);
        let width = self.used_length(
            StyleProperty::Width,
            StyleProperty::MinWidth,
            StyleProperty::MaxWidth,
        );
        let height = self.used_length(
            StyleProperty::Height,
            StyleProperty::MinHeight,
            StyleProperty::MaxHeight,
        );
        Rect::from_xywh(left, top, width, height)
    }

    fn intrinsic_size(&self) -> Size {
        self.intrinsic.get()
    }

    fn set_style(&self, property: StyleProperty, value: Option<String>) {
        let mut style = self.style.borrow_mut();
        match value {
            Some(v) => {
                style.insert(property, v);
            }
            None => {
                style.remove(&property);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_computed_style() {
        let el = MemoryElement::new();
        assert_eq!(el.computed_style(StyleProperty::MinWidth).as_deref(), Some("0px"));
        assert_eq!(el.computed_style(StyleProperty::MaxHeight).as_deref(), Some("none"));
        assert_eq!(el.computed_style(StyleProperty::ZIndex).as_deref(), Some("auto"));
    }

    #[test]
    fn test_offset_rect_follows_inline_style() {
        let el = MemoryElement::with_intrinsic_size(Size::new(80.0, 20.0));
        assert_eq!(el.offset_rect(), Rect::from_xywh(0.0, 0.0, 80.0, 20.0));

        el.set_style(StyleProperty::Left, Some("15px".to_string()));
        el.set_style(StyleProperty::Width, Some("200px".to_string()));
        assert_eq!(el.offset_rect(), Rect::from_xywh(15.0, 0.0, 200.0, 20.0));

        el.set_style(StyleProperty::Width, None);
        assert_eq!(el.offset_rect().width(), 80.0);
    }

    #[test]
    fn test_offset_rect_applies_min_max() {
        let el = MemoryElement::new();
        el.set_style(StyleProperty::Width, Some("500px".to_string()));
        el.set_style(StyleProperty::MaxWidth, Some("300px".to_string()));
        assert_eq!(el.offset_rect().width(), 300.0);

        el.set_style(StyleProperty::MinWidth, Some("400px".to_string()));
        assert_eq!(el.offset_rect().width(), 400.0);
    }
}

//! Bridge to the visual layer
//!
//! The layout core never touches the DOM directly. It reads computed
//! lengths and offset boxes and writes inline box properties through the
//! [`Element`] trait.
//!
//! - [`MemoryElement`]: in-memory element for non-browser hosts and tests
//! - `DomElement` (feature `wasm`): `web_sys::HtmlElement` bridge

mod memory;
#[cfg(feature = "wasm")]
mod dom;

pub use memory::MemoryElement;
#[cfg(feature = "wasm")]
pub use dom::DomElement;

use crate::error::{LayoutError, LayoutResult};
use crate::math::{Rect, Size};

/// Style properties the layout core reads or writes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Left,
    Top,
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
    ZIndex,
}

impl StyleProperty {
    /// CSS property name
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::Left => "left",
            StyleProperty::Top => "top",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::MinWidth => "min-width",
            StyleProperty::MaxWidth => "max-width",
            StyleProperty::MinHeight => "min-height",
            StyleProperty::MaxHeight => "max-height",
            StyleProperty::ZIndex => "z-index",
        }
    }
}

/// A visual element the layout core can measure and position
///
/// Methods take `&self`: like a DOM node, an element is a handle whose
/// style can be changed by anyone holding it.
pub trait Element {
    /// Computed value of a style property, as the browser reports it
    fn computed_style(&self, property: StyleProperty) -> Option<String>;

    /// Current on-screen box (offset position and offset size)
    fn offset_rect(&self) -> Rect;

    /// Preferred size of the content
    fn intrinsic_size(&self) -> Size;

    /// Write an inline style property. `None` clears it.
    fn set_style(&self, property: StyleProperty, value: Option<String>);
}

/// Parse a CSS length the way `parseInt` does: leading integer, rest ignored
pub fn parse_css_length(value: &str) -> LayoutResult<f64> {
    let trimmed = value.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return Err(LayoutError::InvalidLength(value.to_string()));
    }
    trimmed[..digits_start + digits_len]
        .parse::<f64>()
        .map_err(|_| LayoutError::InvalidLength(value.to_string()))
}

/// Format a pixel value as `"<n>px"`
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Push a rectangle to the element's box model.
///
/// Position is always written. A size with a negative dimension clears
/// width and height so that the element falls back to auto layout.
pub fn write_rect<E: Element + ?Sized>(element: &E, rect: Rect) {
    element.set_style(StyleProperty::Left, Some(px(rect.left())));
    element.set_style(StyleProperty::Top, Some(px(rect.top())));
    write_size(element, rect.size());
}

/// Push a size to the element's box model, clearing it when invalid
pub fn write_size<E: Element + ?Sized>(element: &E, size: Size) {
    write_size_pair(element, StyleProperty::Width, StyleProperty::Height, size);
}

/// Write a min or max size pair, clearing both when invalid
pub(crate) fn write_size_pair<E: Element + ?Sized>(
    element: &E,
    width: StyleProperty,
    height: StyleProperty,
    size: Size,
) {
    if size.is_valid() {
        element.set_style(width, Some(px(size.width)));
        element.set_style(height, Some(px(size.height)));
    } else {
        element.set_style(width, None);
        element.set_style(height, None);
    }
}

/// Write a z-index, clearing it for unstacked elements
pub fn write_z_index<E: Element + ?Sized>(element: &E, index: Option<u32>) {
    element.set_style(StyleProperty::ZIndex, index.map(|i| i.to_string()));
}

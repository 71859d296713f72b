//! Layout item view of a component

use super::component::Component;
use super::item::LayoutItem;
use crate::element::{write_rect, Element};
use crate::math::{Rect, Size};

/// Adapts a [`Component`] to [`LayoutItem`]
///
/// Sizes come from the component's cached computed style, the rect from the
/// element's offset box. The adapter borrows its component, so it cannot
/// outlive it.
pub struct ComponentItem<'a, E: Element> {
    component: &'a Component<E>,
}

impl<'a, E: Element> ComponentItem<'a, E> {
    pub fn new(component: &'a Component<E>) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'a Component<E> {
        self.component
    }
}

impl<E: Element> LayoutItem for ComponentItem<'_, E> {
    fn minimum_size(&self) -> Size {
        self.component.size_bounds().minimum
    }

    fn maximum_size(&self) -> Size {
        self.component.size_bounds().maximum
    }

    fn size_hint(&self) -> Size {
        let bounds = self.component.size_bounds();
        self.component
            .element()
            .intrinsic_size()
            .clamped(bounds.minimum, bounds.maximum)
    }

    fn rect(&self) -> Rect {
        self.component.element().offset_rect()
    }

    fn set_rect(&mut self, rect: Rect) {
        let bounds = self.component.size_bounds();
        let size = rect.size().clamped(bounds.minimum, bounds.maximum);
        let placed = Rect::from_pos_size(rect.top_left(), size);
        tracing::trace!(?placed, "component rect");
        write_rect(self.component.element(), placed);
        self.component.notify_resized(size);
    }
}

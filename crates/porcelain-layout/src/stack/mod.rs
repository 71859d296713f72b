//! Window stacking
//!
//! A [`ZStack`] maps its members to a contiguous range of z-indices. The
//! [`StackRegistry`] holds one stack per [`StackTier`], each numbered from
//! its own base so that tiers never interleave.

mod registry;
mod zstack;

pub use registry::{StackRegistry, StackTier};
pub use zstack::ZStack;

use std::rc::Rc;

/// Something that can be a member of a [`ZStack`]
pub trait Stackable {
    /// Identity comparison. Two handles to the same item are the same.
    fn is_same(&self, other: &Self) -> bool;

    /// Receive a new z-index, or `None` when leaving the stack
    fn apply_z_index(&self, index: Option<u32>);
}

impl<T: Stackable + ?Sized> Stackable for Rc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }

    fn apply_z_index(&self, index: Option<u32>) {
        T::apply_z_index(self, index)
    }
}

impl<T: Stackable + ?Sized> Stackable for &T {
    fn is_same(&self, other: &Self) -> bool {
        T::is_same(*self, *other)
    }

    fn apply_z_index(&self, index: Option<u32>) {
        T::apply_z_index(*self, index)
    }
}

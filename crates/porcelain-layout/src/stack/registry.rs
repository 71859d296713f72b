//! Tiered window stacks
//!
//! Windows live in one of three stacks, each numbered from its own base.
//! With the default bases every normal window paints below every topmost
//! window, which paints below every popup, whatever the stack sizes.
//!
//! The registry is owned by the application context and passed to whatever
//! creates or destroys windows.

use super::{Stackable, ZStack};
use crate::config::LayoutConfig;
use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Which stack a window belongs to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackTier {
    /// Ordinary application windows
    #[default]
    Normal,
    /// Always-on-top windows
    Topmost,
    /// Menus, tooltips and other transient popups
    Popup,
}

impl StackTier {
    /// All tiers, bottom to top
    pub fn all() -> &'static [StackTier] {
        &[StackTier::Normal, StackTier::Topmost, StackTier::Popup]
    }

    /// Parse from string ID (e.g., "normal", "topmost", "popup")
    pub fn from_id(id: &str) -> LayoutResult<Self> {
        match id.to_lowercase().as_str() {
            "normal" => Ok(StackTier::Normal),
            "topmost" => Ok(StackTier::Topmost),
            "popup" => Ok(StackTier::Popup),
            _ => Err(LayoutError::UnknownStackTier(id.to_string())),
        }
    }

    /// Get the string ID for this tier
    pub fn id(&self) -> &'static str {
        match self {
            StackTier::Normal => "normal",
            StackTier::Topmost => "topmost",
            StackTier::Popup => "popup",
        }
    }
}

/// The three window stacks
#[derive(Debug)]
pub struct StackRegistry<T: Stackable> {
    normal: ZStack<T>,
    topmost: ZStack<T>,
    popup: ZStack<T>,
}

impl<T: Stackable> Default for StackRegistry<T> {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl<T: Stackable> StackRegistry<T> {
    /// Registry with the default tier bases
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        let bases = &config.stacks;
        Self {
            normal: ZStack::new(bases.normal),
            topmost: ZStack::new(bases.topmost),
            popup: ZStack::new(bases.popup),
        }
    }

    pub fn stack(&self, tier: StackTier) -> &ZStack<T> {
        match tier {
            StackTier::Normal => &self.normal,
            StackTier::Topmost => &self.topmost,
            StackTier::Popup => &self.popup,
        }
    }

    fn stack_mut(&mut self, tier: StackTier) -> &mut ZStack<T> {
        match tier {
            StackTier::Normal => &mut self.normal,
            StackTier::Topmost => &mut self.topmost,
            StackTier::Popup => &mut self.popup,
        }
    }

    /// Tier an item is stacked in
    pub fn tier_of(&self, item: &T) -> Option<StackTier> {
        StackTier::all()
            .iter()
            .copied()
            .find(|&tier| self.stack(tier).contains(item))
    }

    /// Add an item to a tier. Returns false if it is already stacked anywhere.
    pub fn add(&mut self, item: T, tier: StackTier) -> bool {
        if self.tier_of(&item).is_some() {
            return false;
        }
        self.stack_mut(tier).add(item)
    }

    /// Remove an item from whichever tier holds it
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let tier = self.tier_of(item)?;
        self.stack_mut(tier).remove(item)
    }

    /// Raise members of one tier to its top, keeping their relative order
    pub fn raise<'a, I>(&mut self, tier: StackTier, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.stack_mut(tier).raise(items);
    }

    /// Lower members of one tier to its bottom, keeping their relative order
    pub fn lower<'a, I>(&mut self, tier: StackTier, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.stack_mut(tier).lower(items);
    }

    /// Move an item to the top of another tier. Unstacked items are added.
    pub fn move_to_tier(&mut self, item: T, tier: StackTier) {
        let item = match self.tier_of(&item) {
            Some(current) if current == tier => return,
            Some(current) => self.stack_mut(current).remove(&item).unwrap_or(item),
            None => item,
        };
        tracing::debug!(tier = tier.id(), "moving item to tier");
        self.stack_mut(tier).add(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StackBases;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Win {
        z: Cell<Option<u32>>,
    }

    impl Stackable for Win {
        fn is_same(&self, other: &Self) -> bool {
            std::ptr::eq(self, other)
        }

        fn apply_z_index(&self, index: Option<u32>) {
            self.z.set(index);
        }
    }

    #[test]
    fn test_tier_ids() {
        for tier in StackTier::all() {
            assert_eq!(StackTier::from_id(tier.id()), Ok(*tier));
        }
        assert_eq!(StackTier::from_id("POPUP"), Ok(StackTier::Popup));
        assert_eq!(
            StackTier::from_id("modal"),
            Err(LayoutError::UnknownStackTier("modal".to_string()))
        );
    }

    #[test]
    fn test_default_bases() {
        let registry: StackRegistry<Rc<Win>> = StackRegistry::new();
        assert_eq!(registry.stack(StackTier::Normal).min_index(), 10000);
        assert_eq!(registry.stack(StackTier::Topmost).min_index(), 20000);
        assert_eq!(registry.stack(StackTier::Popup).min_index(), 30000);
    }

    #[test]
    fn test_tiers_numbered_independently() {
        let mut registry = StackRegistry::new();
        let (a, b, menu) = (Rc::new(Win::default()), Rc::new(Win::default()), Rc::new(Win::default()));
        registry.add(Rc::clone(&a), StackTier::Normal);
        registry.add(Rc::clone(&menu), StackTier::Popup);
        registry.add(Rc::clone(&b), StackTier::Normal);

        assert_eq!(a.z.get(), Some(10000));
        assert_eq!(b.z.get(), Some(10001));
        assert_eq!(menu.z.get(), Some(30000));
        assert_eq!(registry.tier_of(&menu), Some(StackTier::Popup));
    }

    #[test]
    fn test_add_rejects_item_in_other_tier() {
        let mut registry = StackRegistry::new();
        let a = Rc::new(Win::default());
        assert!(registry.add(Rc::clone(&a), StackTier::Normal));
        assert!(!registry.add(Rc::clone(&a), StackTier::Topmost));
        assert_eq!(registry.tier_of(&a), Some(StackTier::Normal));
    }

    #[test]
    fn test_move_to_tier() {
        let mut registry = StackRegistry::new();
        let (a, b) = (Rc::new(Win::default()), Rc::new(Win::default()));
        registry.add(Rc::clone(&a), StackTier::Normal);
        registry.add(Rc::clone(&b), StackTier::Normal);

        registry.move_to_tier(Rc::clone(&a), StackTier::Topmost);
        assert_eq!(registry.tier_of(&a), Some(StackTier::Topmost));
        assert_eq!(a.z.get(), Some(20000));
        assert_eq!(b.z.get(), Some(10000));
        assert_eq!(registry.stack(StackTier::Normal).len(), 1);
    }

    #[test]
    fn test_raise_and_lower_within_tier() {
        let mut registry = StackRegistry::new();
        let (a, b, menu) = (Rc::new(Win::default()), Rc::new(Win::default()), Rc::new(Win::default()));
        registry.add(Rc::clone(&a), StackTier::Normal);
        registry.add(Rc::clone(&b), StackTier::Normal);
        registry.add(Rc::clone(&menu), StackTier::Popup);

        registry.raise(StackTier::Normal, [&a]);
        assert_eq!((b.z.get(), a.z.get()), (Some(10000), Some(10001)));

        // Members of other tiers are ignored
        registry.lower(StackTier::Normal, [&a, &menu]);
        assert_eq!((a.z.get(), b.z.get()), (Some(10000), Some(10001)));
        assert_eq!(menu.z.get(), Some(30000));
        assert_eq!(registry.tier_of(&menu), Some(StackTier::Popup));
    }

    #[test]
    fn test_removed_item_is_in_no_tier() {
        let mut registry = StackRegistry::new();
        let a = Rc::new(Win::default());
        registry.add(Rc::clone(&a), StackTier::Normal);
        assert!(!registry.add(Rc::clone(&a), StackTier::Topmost));
        registry.move_to_tier(Rc::clone(&a), StackTier::Topmost);

        assert!(registry.remove(&a).is_some());
        assert_eq!(registry.tier_of(&a), None);
        assert_eq!(a.z.get(), None);
        for tier in StackTier::all() {
            assert!(registry.stack(*tier).is_empty());
        }
    }

    #[test]
    fn test_remove() {
        let mut registry = StackRegistry::new();
        let a = Rc::new(Win::default());
        registry.add(Rc::clone(&a), StackTier::Popup);
        assert!(registry.remove(&a).is_some());
        assert_eq!(a.z.get(), None);
        assert_eq!(registry.tier_of(&a), None);
    }

    #[test]
    fn test_custom_bases() {
        let config = LayoutConfig {
            stacks: StackBases {
                normal: 1,
                topmost: 100,
                popup: 200,
            },
            ..LayoutConfig::default()
        };
        let registry: StackRegistry<Rc<Win>> = StackRegistry::from_config(&config);
        assert_eq!(registry.stack(StackTier::Topmost).min_index(), 100);
    }
}

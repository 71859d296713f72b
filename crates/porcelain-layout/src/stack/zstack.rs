//! Ordered z-index stack

use super::Stackable;

/// Members ordered bottom to top, numbered `min_index..min_index + len`
///
/// The i-th member always carries z-index `min_index + i`. Indices are
/// only ever assigned by the stack: after every mutating call returns they
/// are contiguous, without gaps or duplicates.
#[derive(Debug)]
pub struct ZStack<T: Stackable> {
    items: Vec<T>,
    min_index: u32,
}

impl<T: Stackable> ZStack<T> {
    /// Create an empty stack numbered from `min_index`
    pub fn new(min_index: u32) -> Self {
        Self {
            items: Vec::new(),
            min_index,
        }
    }

    pub fn min_index(&self) -> u32 {
        self.min_index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Z-index of a member
    pub fn index_of(&self, item: &T) -> Option<u32> {
        self.position(item).and_then(|pos| self.index_at(pos))
    }

    /// Topmost member
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Members from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Z-index for a slot, or `None` past `u32::MAX`
    fn index_at(&self, pos: usize) -> Option<u32> {
        u32::try_from(pos)
            .ok()
            .and_then(|pos| self.min_index.checked_add(pos))
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|member| T::is_same(member, item))
    }

    /// Push an item on top. Returns false if it is already a member or
    /// the stack has run out of z-indices.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        let Some(index) = self.index_at(self.items.len()) else {
            tracing::warn!(min_index = self.min_index, len = self.items.len(), "stack full");
            return false;
        };
        item.apply_z_index(Some(index));
        self.items.push(item);
        tracing::debug!(index, len = self.items.len(), "stack add");
        true
    }

    /// Take an item out of the stack, clearing its z-index
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let pos = self.position(item)?;
        let removed = self.items.remove(pos);
        removed.apply_z_index(None);
        self.renumber();
        tracing::debug!(pos, len = self.items.len(), "stack remove");
        Some(removed)
    }

    /// Move the given members to the top, keeping their current relative
    /// order. Items that are not members are ignored.
    pub fn raise<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let requested: Vec<&T> = items.into_iter().collect();
        if requested.is_empty() || self.ends_with(&requested, true) {
            return;
        }
        let (moved, kept) = self.partition(&requested);
        tracing::debug!(moved = moved.len(), "stack raise");
        self.items = kept;
        self.items.extend(moved);
        self.renumber();
    }

    /// Move the given members to the bottom, keeping their current
    /// relative order. Items that are not members are ignored.
    pub fn lower<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let requested: Vec<&T> = items.into_iter().collect();
        if requested.is_empty() || self.ends_with(&requested, false) {
            return;
        }
        let (mut moved, kept) = self.partition(&requested);
        tracing::debug!(moved = moved.len(), "stack lower");
        moved.extend(kept);
        self.items = moved;
        self.renumber();
    }

    /// Whether the top (or bottom) `requested.len()` members are exactly
    /// the requested set
    fn ends_with(&self, requested: &[&T], top: bool) -> bool {
        let n = requested.len();
        if n > self.items.len() {
            return false;
        }
        let end = if top {
            &self.items[self.items.len() - n..]
        } else {
            &self.items[..n]
        };
        end.iter()
            .all(|item| requested.iter().any(|r| T::is_same(r, item)))
            && requested
                .iter()
                .all(|r| end.iter().any(|item| T::is_same(item, r)))
    }

    /// Split into (requested, rest). Both halves keep stack order, so the
    /// moved members stay sorted by their current index.
    fn partition(&mut self, requested: &[&T]) -> (Vec<T>, Vec<T>) {
        std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| requested.iter().any(|r| T::is_same(r, item)))
    }

    fn renumber(&self) {
        for (pos, item) in self.items.iter().enumerate() {
            item.apply_z_index(self.index_at(pos));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct Win {
        name: &'static str,
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

    fn win(name: &'static str) -> Rc<Win> {
        Rc::new(Win {
            name,
            z: Cell::new(None),
        })
    }

    fn names(stack: &ZStack<Rc<Win>>) -> Vec<&'static str> {
        stack.iter().map(|w| w.name).collect()
    }

    #[test]
    fn test_add_assigns_next_index() {
        let mut stack = ZStack::new(1000);
        let (a, b, c) = (win("a"), win("b"), win("c"));
        assert!(stack.add(Rc::clone(&a)));
        assert!(stack.add(Rc::clone(&b)));
        assert!(stack.add(Rc::clone(&c)));

        assert_eq!(a.z.get(), Some(1000));
        assert_eq!(b.z.get(), Some(1001));
        assert_eq!(c.z.get(), Some(1002));
    }

    #[test]
    fn test_add_twice_is_noop() {
        let mut stack = ZStack::new(0);
        let a = win("a");
        stack.add(Rc::clone(&a));
        assert!(!stack.add(Rc::clone(&a)));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_add_past_max_index_is_rejected() {
        let mut stack = ZStack::new(u32::MAX);
        let (a, b) = (win("a"), win("b"));
        assert!(stack.add(Rc::clone(&a)));
        assert!(!stack.add(Rc::clone(&b)));
        assert_eq!(a.z.get(), Some(u32::MAX));
        assert_eq!(b.z.get(), None);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_raise_single() {
        let mut stack = ZStack::new(1000);
        let (a, b, c) = (win("a"), win("b"), win("c"));
        for w in [&a, &b, &c] {
            stack.add(Rc::clone(w));
        }

        stack.raise([&a]);
        assert_eq!(b.z.get(), Some(1000));
        assert_eq!(c.z.get(), Some(1001));
        assert_eq!(a.z.get(), Some(1002));
        assert_eq!(stack.top().map(|w| w.name), Some("a"));
    }

    #[test]
    fn test_raise_keeps_stack_order_of_moved() {
        let mut stack = ZStack::new(0);
        let ws: Vec<_> = ["a", "b", "c", "d", "e"].into_iter().map(win).collect();
        for w in &ws {
            stack.add(Rc::clone(w));
        }

        // Requested order differs from stack order
        stack.raise([&ws[3], &ws[0], &ws[1]]);
        assert_eq!(names(&stack), vec!["c", "e", "a", "b", "d"]);
    }

    #[test]
    fn test_lower() {
        let mut stack = ZStack::new(0);
        let ws: Vec<_> = ["a", "b", "c", "d"].into_iter().map(win).collect();
        for w in &ws {
            stack.add(Rc::clone(w));
        }

        stack.lower([&ws[3], &ws[2]]);
        assert_eq!(names(&stack), vec!["c", "d", "a", "b"]);
        assert_eq!(ws[2].z.get(), Some(0));
        assert_eq!(ws[1].z.get(), Some(3));
    }

    #[test]
    fn test_raise_top_is_noop() {
        let mut stack = ZStack::new(0);
        let ws: Vec<_> = ["a", "b", "c"].into_iter().map(win).collect();
        for w in &ws {
            stack.add(Rc::clone(w));
        }
        stack.raise([&ws[2], &ws[1]]);
        assert_eq!(names(&stack), vec!["a", "b", "c"]);
        stack.lower([&ws[0]]);
        assert_eq!(names(&stack), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_raise_ignores_non_members() {
        let mut stack = ZStack::new(0);
        let (a, b, outsider) = (win("a"), win("b"), win("x"));
        stack.add(Rc::clone(&a));
        stack.add(Rc::clone(&b));

        stack.raise([&outsider, &a]);
        assert_eq!(names(&stack), vec!["b", "a"]);
        assert_eq!(outsider.z.get(), None);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut stack = ZStack::new(10);
        let (a, b, c) = (win("a"), win("b"), win("c"));
        for w in [&a, &b, &c] {
            stack.add(Rc::clone(w));
        }

        let removed = stack.remove(&a);
        assert!(removed.is_some());
        assert_eq!(a.z.get(), None);
        assert_eq!(b.z.get(), Some(10));
        assert_eq!(c.z.get(), Some(11));
        assert_eq!(stack.index_of(&c), Some(11));
        assert!(stack.remove(&a).is_none());
    }

    #[test]
    fn test_stack_of_references() {
        let (a, b) = (win("a"), win("b"));
        let mut stack: ZStack<&Win> = ZStack::new(5);
        stack.add(&a);
        stack.add(&b);
        stack.raise([&&*a]);
        assert_eq!(a.z.get(), Some(6));
        assert_eq!(b.z.get(), Some(5));
    }
}

#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod hooks;
mod iter;
mod node;

pub use hooks::{DupHook, FreeHook, MatchHook};
pub use iter::{Cursor, Direction, Iter};
pub use node::NodeRef;

use alloc::rc::Rc;
use hooks::Hooks;
use node::Arena;

/// A doubly-linked list of `T` stored in a slot arena.
///
/// The list owns its nodes and their values. Nodes are addressed by stable
/// [`NodeRef`] handles; see [`NodeRef`] for the staleness contract. Three
/// optional per-list hooks govern value duplication, release and lookup;
/// a list created by [`duplicate`](List::duplicate) shares the hooks of its
/// source.
///
/// Initialize with [`new`](List::new), or collect from an iterator.
pub struct List<T> {
    arena: Arena<T>,
    head: Option<NodeRef>,
    tail: Option<NodeRef>,
    len: usize,
    hooks: Hooks<T>,
}

impl<T> List<T> {
    pub const fn new() -> Self {
        Self { arena: Arena::new(), head: None, tail: None, len: 0, hooks: Hooks::new() }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the head node, or `None` on an empty list.
    pub fn front(&self) -> Option<NodeRef> {
        self.head
    }

    /// Handle of the tail node, or `None` on an empty list.
    pub fn back(&self) -> Option<NodeRef> {
        self.tail
    }

    /// Value stored at `node`. `None` for stale handles.
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.arena.get(node)
    }

    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.arena.get_mut(node)
    }

    /// Successor of `node` in chain order. `None` at the tail or for stale
    /// handles.
    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        self.arena.next_of(node)
    }

    /// Predecessor of `node` in chain order. `None` at the head or for stale
    /// handles.
    pub fn prev(&self, node: NodeRef) -> Option<NodeRef> {
        self.arena.prev_of(node)
    }

    /// Prepend `value`, returning the handle of the new head node. O(1).
    pub fn push_front(&mut self, value: T) -> NodeRef {
        let node = self.arena.allocate(value);

        match self.head {
            Some(head) => {
                self.arena.slot_mut(node).next = Some(head);
                self.arena.slot_mut(head).prev = Some(node);
            }
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;

        self.debug_check();
        node
    }

    /// Append `value`, returning the handle of the new tail node. O(1).
    pub fn push_back(&mut self, value: T) -> NodeRef {
        let node = self.arena.allocate(value);

        match self.tail {
            Some(tail) => {
                self.arena.slot_mut(node).prev = Some(tail);
                self.arena.slot_mut(tail).next = Some(node);
            }
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;

        self.debug_check();
        node
    }

    /// Insert `value` immediately before the live node `at`. O(1).
    ///
    /// Inserting before the head makes the new node the head.
    ///
    /// # Panics
    /// Panics if `at` is stale.
    pub fn insert_before(&mut self, at: NodeRef, value: T) -> NodeRef {
        assert!(self.arena.get(at).is_some(), "insert_before on a stale handle");
        let node = self.arena.allocate(value);

        let before = self.arena.slot(at).prev;
        self.arena.slot_mut(node).prev = before;
        self.arena.slot_mut(node).next = Some(at);
        self.arena.slot_mut(at).prev = Some(node);
        match before {
            Some(prev) => self.arena.slot_mut(prev).next = Some(node),
            None => self.head = Some(node),
        }
        self.len += 1;

        self.debug_check();
        node
    }

    /// Insert `value` immediately after the live node `at`. O(1).
    ///
    /// Inserting after the tail makes the new node the tail.
    ///
    /// # Panics
    /// Panics if `at` is stale.
    pub fn insert_after(&mut self, at: NodeRef, value: T) -> NodeRef {
        assert!(self.arena.get(at).is_some(), "insert_after on a stale handle");
        let node = self.arena.allocate(value);

        let after = self.arena.slot(at).next;
        self.arena.slot_mut(node).next = after;
        self.arena.slot_mut(node).prev = Some(at);
        self.arena.slot_mut(at).next = Some(node);
        match after {
            Some(next) => self.arena.slot_mut(next).prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;

        self.debug_check();
        node
    }

    /// Splice the live node `node` out of the list and destroy it,
    /// handing its value to the free hook when one is set. O(1).
    ///
    /// Invalidates `node` and any other handle naming it. Removing the node
    /// a [`Cursor`] just yielded is explicitly supported.
    ///
    /// # Panics
    /// Panics if `node` is stale.
    pub fn remove(&mut self, node: NodeRef) {
        assert!(self.arena.get(node).is_some(), "remove on a stale handle");

        let (prev, next) = {
            let slot = self.arena.slot(node);
            (slot.prev, slot.next)
        };
        match prev {
            Some(prev) => self.arena.slot_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.arena.slot_mut(next).prev = prev,
            None => self.tail = prev,
        }

        if let Some(value) = self.arena.release(node) {
            self.hooks.dispose(value);
        }
        self.len -= 1;

        self.debug_check();
    }

    /// Move the tail node to the head. O(1). No-op when `len <= 1`.
    pub fn rotate(&mut self) {
        if self.len <= 1 {
            return;
        }
        // len >= 2, so head, tail and the tail's predecessor all exist
        let Some(tail) = self.tail else { return };

        let new_tail = self.arena.slot(tail).prev;
        if let Some(new_tail) = new_tail {
            self.arena.slot_mut(new_tail).next = None;
        }
        self.tail = new_tail;

        let head = self.head;
        self.arena.slot_mut(tail).prev = None;
        self.arena.slot_mut(tail).next = head;
        if let Some(head) = head {
            self.arena.slot_mut(head).prev = Some(tail);
        }
        self.head = Some(tail);

        self.debug_check();
    }

    /// Destroy every node, handing each value to the free hook when one is
    /// set. O(len). Hooks and slot capacity are retained.
    pub fn clear(&mut self) {
        let mut node = self.head;
        while let Some(current) = node {
            node = self.arena.slot(current).next;
            if let Some(value) = self.arena.release(current) {
                self.hooks.dispose(value);
            }
        }
        self.head = None;
        self.tail = None;
        self.len = 0;

        self.debug_check();
    }

    /// Handle of the node at `index`. O(n).
    ///
    /// Non-negative indices count from the head (`0` is the head); negative
    /// indices count from the tail (`-1` is the tail, `-2` second from the
    /// tail). `None` when `index` runs past either end.
    pub fn seek(&self, index: isize) -> Option<NodeRef> {
        if index >= 0 {
            let mut node = self.head;
            for _ in 0..index {
                node = self.next(node?);
            }
            node
        } else {
            let mut node = self.tail;
            for _ in 0..-(index + 1) {
                node = self.prev(node?);
            }
            node
        }
    }

    /// First node from the head whose value matches `key`, compared by the
    /// match hook when one is set and by `==` otherwise. O(n).
    pub fn find(&self, key: &T) -> Option<NodeRef>
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor(Direction::Forward);
        while let Some(node) = cursor.next(self) {
            let value = self.get(node)?;
            let hit = match &self.hooks.matches {
                Some(matches) => matches(value, key),
                None => value == key,
            };
            if hit {
                return Some(node);
            }
        }
        None
    }

    /// Copy the list in source order, sharing all three hooks with the copy.
    /// O(n).
    ///
    /// Each value goes through the dup hook when one is set; without one it
    /// is cloned via `Clone` (store `Rc<V>` payloads for
    /// duplicate-with-sharing). A `None` from the dup hook aborts the whole
    /// operation: the partial copy is torn down, releasing the values it
    /// already owns through the shared free hook, and `None` is returned.
    /// The source is never modified.
    pub fn duplicate(&self) -> Option<List<T>>
    where
        T: Clone,
    {
        let mut copy = List::new();
        copy.hooks = self.hooks.clone();

        let mut cursor = self.cursor(Direction::Forward);
        while let Some(node) = cursor.next(self) {
            let value = self.get(node)?;
            let value = match &self.hooks.dup {
                Some(dup) => dup(value)?,
                None => value.clone(),
            };
            copy.push_back(value);
        }
        Some(copy)
    }

    /// Detached cursor starting at the head (forward) or tail (backward).
    pub fn cursor(&self, direction: Direction) -> Cursor {
        let start = match direction {
            Direction::Forward => self.head,
            Direction::Backward => self.tail,
        };
        Cursor::new(start, direction)
    }

    /// Borrowing double-ended iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Replace the duplication hook. Affects later `duplicate` calls only.
    pub fn set_dup_hook(&mut self, hook: impl Fn(&T) -> Option<T> + 'static) {
        self.hooks.dup = Some(Rc::new(hook));
    }

    /// Replace the release hook. The hook receives every value the list
    /// destroys from then on, exactly once per value.
    pub fn set_free_hook(&mut self, hook: impl Fn(T) + 'static) {
        self.hooks.free = Some(Rc::new(hook));
    }

    /// Replace the lookup hook used by [`find`](List::find).
    pub fn set_match_hook(&mut self, hook: impl Fn(&T, &T) -> bool + 'static) {
        self.hooks.matches = Some(Rc::new(hook));
    }

    pub fn dup_hook(&self) -> Option<DupHook<T>> {
        self.hooks.dup.clone()
    }

    pub fn free_hook(&self) -> Option<FreeHook<T>> {
        self.hooks.free.clone()
    }

    pub fn match_hook(&self) -> Option<MatchHook<T>> {
        self.hooks.matches.clone()
    }

    #[cfg(not(debug_assertions))]
    fn debug_check(&self) {}

    /// Walk the whole chain and assert link symmetry, boundary conditions
    /// and the length count. Debug builds only.
    #[cfg(debug_assertions)]
    fn debug_check(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);

        let mut count = 0;
        let mut prev = None;
        let mut node = self.head;
        while let Some(current) = node {
            let slot = self.arena.slot(current);
            assert!(slot.value.is_some(), "vacant slot {:?} reached from the chain", current);
            assert_eq!(slot.prev, prev, "asymmetric links at {:?}", current);
            count += 1;
            prev = Some(current);
            node = slot.next;
        }
        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for List<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use alloc::vec::Vec;

/// A stable handle to a node owned by a [`List`](crate::List).
///
/// A handle names a slot in the list's arena. It is `Copy`, survives
/// insertions and removals of *other* nodes, and is invalidated by the
/// removal of the node it names. Using a stale handle is memory-safe but
/// unspecified: the slot may be vacant (queries return `None`, structural
/// operations panic) or may have been reused by a later insertion.
///
/// Handles must not be passed to a list other than the one that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(pub(crate) usize);

/// One arena slot.
///
/// An occupied slot carries a value and its chain links. A vacant slot keeps
/// its position in the buffer and is threaded onto the free list through
/// `next`; its `prev` is meaningless while vacant.
pub(crate) struct Slot<T> {
    pub(crate) value: Option<T>,
    pub(crate) prev: Option<NodeRef>,
    pub(crate) next: Option<NodeRef>,
}

/// Slot storage for a list: a growable buffer plus a free list of vacated
/// slots. Slots are never shifted or shrunk out from under live handles,
/// which is what keeps `NodeRef`s stable.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeRef>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new(), free: None }
    }

    /// Occupy a slot with `value`, reusing a vacant slot when one is
    /// available. Links are reset to `None`; the caller wires the node
    /// into the chain.
    pub(crate) fn allocate(&mut self, value: T) -> NodeRef {
        match self.free {
            Some(node) => {
                let slot = &mut self.slots[node.0];
                debug_assert!(slot.value.is_none());

                self.free = slot.next;
                slot.value = Some(value);
                slot.prev = None;
                slot.next = None;
                node
            }
            None => {
                self.slots.push(Slot { value: Some(value), prev: None, next: None });
                NodeRef(self.slots.len() - 1)
            }
        }
    }

    /// Vacate `node`, push its slot onto the free list and hand back the
    /// value. Returns `None` if the slot is out of bounds or already vacant.
    pub(crate) fn release(&mut self, node: NodeRef) -> Option<T> {
        let slot = self.slots.get_mut(node.0)?;
        let value = slot.value.take()?;

        slot.prev = None;
        slot.next = self.free;
        self.free = Some(node);
        Some(value)
    }

    pub(crate) fn get(&self, node: NodeRef) -> Option<&T> {
        self.slots.get(node.0)?.value.as_ref()
    }

    pub(crate) fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.slots.get_mut(node.0)?.value.as_mut()
    }

    /// Successor link of a live node. `None` for the tail, for vacant slots
    /// (whose `next` threads the free list, not the chain) and for
    /// out-of-bounds handles.
    pub(crate) fn next_of(&self, node: NodeRef) -> Option<NodeRef> {
        let slot = self.slots.get(node.0)?;
        slot.value.as_ref()?;
        slot.next
    }

    /// Predecessor link of a live node. `None` for the head, vacant slots
    /// and out-of-bounds handles.
    pub(crate) fn prev_of(&self, node: NodeRef) -> Option<NodeRef> {
        let slot = self.slots.get(node.0)?;
        slot.value.as_ref()?;
        slot.prev
    }

    /// Direct slot access. Panics on out-of-bounds handles.
    pub(crate) fn slot(&self, node: NodeRef) -> &Slot<T> {
        &self.slots[node.0]
    }

    pub(crate) fn slot_mut(&mut self, node: NodeRef) -> &mut Slot<T> {
        &mut self.slots[node.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_then_release() {
        let mut arena = Arena::new();

        let a = arena.allocate(1);
        let b = arena.allocate(2);
        let c = arena.allocate(3);
        assert_eq!((a, b, c), (NodeRef(0), NodeRef(1), NodeRef(2)));

        assert_eq!(arena.release(b), Some(2));
        assert_eq!(arena.get(b), None);
        assert_eq!(arena.release(b), None);

        assert_eq!(arena.get(a), Some(&1));
        assert_eq!(arena.get(c), Some(&3));
    }

    #[test]
    fn vacant_slots_are_reused() {
        let mut arena = Arena::new();

        let a = arena.allocate("a");
        let b = arena.allocate("b");
        arena.release(a).unwrap();
        arena.release(b).unwrap();

        // most recently vacated slot comes back first
        assert_eq!(arena.allocate("c"), b);
        assert_eq!(arena.allocate("d"), a);
        assert_eq!(arena.allocate("e"), NodeRef(2));
    }

    #[test]
    fn vacant_slots_hide_links() {
        let mut arena = Arena::new();

        let a = arena.allocate(1);
        let b = arena.allocate(2);
        arena.slot_mut(a).next = Some(b);
        arena.slot_mut(b).prev = Some(a);

        assert_eq!(arena.next_of(a), Some(b));
        assert_eq!(arena.prev_of(b), Some(a));

        arena.release(a).unwrap();
        // `next` now threads the free list; it must not leak as a chain link
        assert_eq!(arena.next_of(a), None);
        assert_eq!(arena.prev_of(a), None);
        assert_eq!(arena.next_of(NodeRef(99)), None);
    }
}

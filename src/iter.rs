use crate::{List, NodeRef};

/// Direction of travel for a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Head towards tail, advancing along `next` links.
    Forward,
    /// Tail towards head, advancing along `prev` links.
    Backward,
}

/// A detached cursor over a [`List`].
///
/// The cursor holds no borrow of the list; each [`next`](Cursor::next) call
/// is handed the list it was created from. The successor is captured *before*
/// a node is yielded, so removing the node a cursor just returned and then
/// continuing the walk is well-defined. Any other structural mutation voids
/// the cursor's position; rewind it or discard it.
///
/// Several cursors over one list may coexist; insertions elsewhere in the
/// list invalidate none of them.
///
/// Canonical usage:
///
/// ```
/// # use slotlist::{Direction, List};
/// # let mut list: List<u32> = [1, 2, 3].into_iter().collect();
/// let mut cursor = list.cursor(Direction::Forward);
/// while let Some(node) = cursor.next(&list) {
///     if list.get(node) == Some(&2) {
///         list.remove(node);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    next: Option<NodeRef>,
    direction: Direction,
}

impl Cursor {
    pub(crate) fn new(next: Option<NodeRef>, direction: Direction) -> Self {
        Self { next, direction }
    }

    /// Yield the node at the cursor, stepping the cursor to that node's
    /// successor in the iteration direction first. `None` once exhausted.
    pub fn next<T>(&mut self, list: &List<T>) -> Option<NodeRef> {
        let current = self.next?;
        self.next = match self.direction {
            Direction::Forward => list.next(current),
            Direction::Backward => list.prev(current),
        };
        Some(current)
    }

    /// Reset to a forward walk from the head of `list`.
    pub fn rewind<T>(&mut self, list: &List<T>) {
        self.next = list.front();
        self.direction = Direction::Forward;
    }

    /// Reset to a backward walk from the tail of `list`.
    pub fn rewind_back<T>(&mut self, list: &List<T>) {
        self.next = list.back();
        self.direction = Direction::Backward;
    }
}

/// Borrowing iterator over a list's values, created by
/// [`iter`](crate::List::iter).
///
/// Walks the chain from both ends at once: `next` consumes from the front,
/// `next_back` from the back, until the two meet.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    list: &'a List<T>,
    forward: Option<NodeRef>,
    backward: Option<NodeRef>,
    ongoing: bool,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            forward: list.front(),
            backward: list.back(),
            ongoing: list.front().is_some(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.ongoing {
            return None;
        }
        let current = self.forward?;
        if self.forward == self.backward {
            self.ongoing = false;
        }
        self.forward = self.list.next(current);
        self.list.get(current)
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if !self.ongoing {
            return None;
        }
        let current = self.backward?;
        if self.forward == self.backward {
            self.ongoing = false;
        }
        self.backward = self.list.prev(current);
        self.list.get(current)
    }
}

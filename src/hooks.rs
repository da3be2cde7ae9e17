use alloc::rc::Rc;

/// Duplication hook: produce a new value from an existing one, or signal
/// failure with `None`.
pub type DupHook<T> = Rc<dyn Fn(&T) -> Option<T>>;

/// Release hook: consumes a value exactly once, at node removal or list
/// teardown.
pub type FreeHook<T> = Rc<dyn Fn(T)>;

/// Lookup hook: equality relation between a stored value and a search key.
pub type MatchHook<T> = Rc<dyn Fn(&T, &T) -> bool>;

/// The per-list value-lifecycle strategy.
///
/// All three hooks are optional and independently replaceable at any time.
/// They are reference-counted so that [`duplicate`](crate::List::duplicate)
/// can share them between the source list and its copy.
pub(crate) struct Hooks<T> {
    pub(crate) dup: Option<DupHook<T>>,
    pub(crate) free: Option<FreeHook<T>>,
    pub(crate) matches: Option<MatchHook<T>>,
}

impl<T> Hooks<T> {
    pub(crate) const fn new() -> Self {
        Self { dup: None, free: None, matches: None }
    }

    /// Dispose of a value the list owns: hand it to the free hook when one
    /// is set, drop it otherwise.
    pub(crate) fn dispose(&self, value: T) {
        match &self.free {
            Some(free) => free(value),
            None => drop(value),
        }
    }
}

// manual impl: sharing the hooks must not demand `T: Clone`
impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        Self {
            dup: self.dup.clone(),
            free: self.free.clone(),
            matches: self.matches.clone(),
        }
    }
}

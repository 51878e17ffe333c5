//! Per-collection identifier sequence.
//!
//! IDs are assigned as `collection size + 1`. The sequence makes that rule
//! explicit: it remembers the last value it issued, and since records are
//! never deleted the last issued value always equals the collection size.
//!
//! # Known limitation
//!
//! If deletion is ever added, `size + 1` would reissue IDs. Callers that add
//! deletion must keep advancing this sequence instead of deriving IDs from
//! the collection length.

/// Monotonic source of positive integer IDs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdSequence {
    last: i32,
}

impl IdSequence {
    /// Create a sequence whose first issued ID is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Create a sequence that has already issued `last`.
    #[cfg(test)]
    pub(crate) const fn starting_after(last: i32) -> Self {
        Self { last }
    }

    /// Issue the next ID.
    ///
    /// Returns `None` once `i32::MAX` has been issued; the GraphQL `Int`
    /// type cannot carry anything larger.
    pub const fn next_id(&mut self) -> Option<i32> {
        match self.last.checked_add(1) {
            Some(next) => {
                self.last = next;
                Some(next)
            }
            None => None,
        }
    }

    /// The last ID issued, or 0 if none has been issued yet.
    #[must_use]
    pub const fn last(&self) -> i32 {
        self.last
    }
}

//! Record of already-counted identities.

use std::collections::HashSet;

use crate::counting::trace::ObjectId;

/// Set of identities that have already produced a counted crossing.
///
/// Grows monotonically for the lifetime of a session; there is deliberately
/// no removal operation, so an identity counted once can never become
/// eligible again, even if its trace later re-crosses a zone.
#[derive(Debug, Default)]
pub struct CountLedger {
    counted: HashSet<ObjectId>,
}

impl CountLedger {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.counted.contains(&id)
    }

    #[inline]
    pub fn insert(&mut self, id: ObjectId) {
        self.counted.insert(id);
    }

    pub fn len(&self) -> usize {
        self.counted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counted.is_empty()
    }
}

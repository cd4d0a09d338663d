use std::collections::HashSet;

use crate::value::Value;

/// Identities of the composites visited during one comparison.
///
/// Only allocation addresses are recorded, so the guard never keeps a
/// value alive. Entries are never removed.
#[derive(Debug, Default)]
pub(super) struct CycleGuard {
    seen: HashSet<usize>,
}

impl CycleGuard {
    pub(super) fn contains(&self, value: &Value) -> bool {
        value.address().is_some_and(|addr| self.seen.contains(&addr))
    }

    pub(super) fn insert(&mut self, value: &Value) {
        if let Some(addr) = value.address() {
            self.seen.insert(addr);
        }
    }
}

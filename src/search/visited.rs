//! Memo of states already explored in one search.

use crate::core::StateKey;
use rustc_hash::FxHashSet;

/// States seen so far. Grows during a search and is never shrunk.
///
/// Each top-level search must own a fresh set.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    seen: FxHashSet<StateKey>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key`, returning `true` if it had not been seen before.
    pub fn insert(&mut self, key: StateKey) -> bool {
        self.seen.insert(key)
    }

    pub fn contains(&self, key: &StateKey) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateKey> {
        self.seen.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_new_keys() {
        let mut visited = VisitedSet::new();
        assert!(visited.is_empty());

        assert!(visited.insert(StateKey::new(3, 0)));
        assert!(!visited.insert(StateKey::new(3, 0)));
        assert!(visited.insert(StateKey::new(0, 3)));

        assert_eq!(visited.len(), 2);
        assert!(visited.contains(&StateKey::new(0, 3)));
        assert!(!visited.contains(&StateKey::new(1, 1)));
    }
}

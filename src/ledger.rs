use std::collections::VecDeque;

/// Append-only, newest-first history of ledger entries.
///
/// Entries are never reordered or deleted; `prepend` is the only mutation.
#[derive(Clone, Debug, Default)]
pub struct Ledger<T> {
    entries: VecDeque<T>,
}

impl<T> Ledger<T> {
    pub fn new() -> Self {
        Ledger {
            entries: VecDeque::new(),
        }
    }

    /// Build a ledger from entries already in newest-first order
    pub fn seeded(entries: Vec<T>) -> Self {
        Ledger {
            entries: entries.into(),
        }
    }

    /// Add a new entry at the head
    pub fn prepend(&mut self, entry: T) {
        self.entries.push_front(entry);
    }

    /// Entry by index (0 = most recent)
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest-first iteration
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T: Clone> Ledger<T> {
    /// Snapshot for render state, newest first
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_is_newest_first() {
        let mut ledger = Ledger::new();
        ledger.prepend("older");
        ledger.prepend("newer");
        assert_eq!(ledger.get(0), Some(&"newer"));
        assert_eq!(ledger.get(1), Some(&"older"));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_seeded_order_preserved() {
        let ledger = Ledger::seeded(vec!["newest", "oldest"]);
        assert_eq!(ledger.get(0), Some(&"newest"));
        assert_eq!(ledger.to_vec(), vec!["newest", "oldest"]);
    }
}

//! Running per-suspect evidence counts

use rustc_hash::FxHashMap;

/// Counts how many distinct discovered clues implicate each suspect
#[derive(Debug, Clone, Default)]
pub struct AccusationTally {
    counts: FxHashMap<String, u32>,
}

impl AccusationTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `by` to `suspect`'s count, creating the entry if needed. Returns the new count.
    pub fn increment(&mut self, suspect: &str, by: u32) -> u32 {
        // Avoid allocating the key when the suspect already has an entry
        if let Some(count) = self.counts.get_mut(suspect) {
            *count += by;
            return *count;
        }
        self.counts.insert(suspect.to_string(), by);
        by
    }

    /// Current count for `suspect`; a suspect never implicated has zero
    pub fn count_for(&self, suspect: &str) -> u32 {
        self.counts.get(suspect).copied().unwrap_or(0)
    }

    /// Number of suspects with an entry
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries sorted by name
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> =
            self.counts.iter().map(|(name, &count)| (name.as_str(), count)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_suspect_counts_zero() {
        let tally = AccusationTally::new();
        assert_eq!(tally.count_for("Nobody"), 0);
        assert!(tally.is_empty());
    }

    #[test]
    fn test_increment_creates_then_accumulates() {
        let mut tally = AccusationTally::new();
        assert_eq!(tally.increment("Pedro", 1), 1);
        assert_eq!(tally.increment("Pedro", 1), 2);
        assert_eq!(tally.increment("Ana", 1), 1);
        assert_eq!(tally.count_for("Pedro"), 2);
        assert_eq!(tally.count_for("pedro"), 0);
        assert_eq!(tally.entries(), vec![("Ana", 1), ("Pedro", 2)]);
    }
}

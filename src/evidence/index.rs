//! Static clue → suspect lookup
//!
//! Populated once before play. Matching is exact: no case folding, no trimming.

use rustc_hash::FxHashMap;

/// Maps a clue's exact text to the suspect it implicates
#[derive(Debug, Clone, Default)]
pub struct SuspectIndex {
    by_clue: FxHashMap<String, String>,
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `(clue, suspect)` pairs; later pairs win on repeated clues
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a (&'a str, &'a str)>) -> Self {
        let mut index = Self::new();
        for (clue, suspect) in pairs {
            index.associate(clue, suspect);
        }
        index
    }

    /// Upsert `clue → suspect`. Returns the suspect this replaced, if any.
    pub fn associate(&mut self, clue: &str, suspect: &str) -> Option<String> {
        self.by_clue.insert(clue.to_string(), suspect.to_string())
    }

    /// The suspect implicated by `clue`, or `None` for a clue nobody is linked to
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.by_clue.get(clue).map(String::as_str)
    }

    /// Distinct suspect names, sorted
    pub fn suspects(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_clue.values().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn len(&self) -> usize {
        self.by_clue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_clue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact() {
        let index = SuspectIndex::from_pairs(&[("Broken wine glass", "Ana")]);
        assert_eq!(index.lookup("Broken wine glass"), Some("Ana"));
        assert_eq!(index.lookup("broken wine glass"), None);
        assert_eq!(index.lookup("Broken wine glass "), None);
    }

    #[test]
    fn test_associate_overwrites() {
        let mut index = SuspectIndex::new();
        assert_eq!(index.associate("Knife", "Carlos"), None);
        assert_eq!(index.associate("Knife", "Sofia"), Some("Carlos".to_string()));
        assert_eq!(index.lookup("Knife"), Some("Sofia"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_suspects_are_sorted_and_distinct() {
        let index = SuspectIndex::from_pairs(&[("a", "Pedro"), ("b", "Ana"), ("c", "Pedro")]);
        assert_eq!(index.suspects(), vec!["Ana", "Pedro"]);
    }
}

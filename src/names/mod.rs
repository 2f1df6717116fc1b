//! Loading the local list of names that should stay active.

pub mod loader;
pub mod normalize;

use std::collections::HashSet;

pub use loader::{load_names, parse_names};
pub use normalize::normalize_name;

/// Normalized names read from the input file. Duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    names: HashSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `raw` after normalization. Blank input is ignored.
    pub fn insert(&mut self, raw: &str) -> bool {
        let name = normalize_name(raw);
        if name.is_empty() {
            return false;
        }
        self.names.insert(name)
    }

    /// Membership test; `raw` is normalized the same way as inserted names.
    pub fn contains(&self, raw: &str) -> bool {
        self.names.contains(&normalize_name(raw))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Up to `limit` names in sorted order, for reporting.
    pub fn sample(&self, limit: usize) -> Vec<&str> {
        let mut names = self.names.iter().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names.truncate(limit);
        names
    }
}

impl<'a> FromIterator<&'a str> for NameSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = NameSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse_after_normalization() {
        let set: NameSet = ["John Doe", " john doe ", "JOHN DOE"].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains("John DOE"));
    }

    #[test]
    fn blank_names_are_not_inserted() {
        let mut set = NameSet::new();
        assert!(!set.insert("   "));
        assert!(set.is_empty());
    }

    #[test]
    fn sample_is_sorted_and_bounded() {
        let set: NameSet = ["Zed", "amy", "Bob", "carl"].into_iter().collect();
        assert_eq!(set.sample(3), vec!["amy", "bob", "carl"]);
    }
}

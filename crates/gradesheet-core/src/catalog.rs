//! Subject catalog accumulated from index pages.

use std::collections::HashMap;

/// Mapping from 7-digit subject codes to subject names.
///
/// Entries are first-wins: once a code is present, later sightings of the
/// same code never overwrite its name. Iteration follows insertion order,
/// so codes come back in the order the document introduced them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubjectCatalog {
    names: HashMap<String, String>,
    order: Vec<String>,
}

impl SubjectCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code/name pair. Returns true if the code was new; a code
    /// already present keeps its original name and false is returned.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) -> bool {
        let code = code.into();
        if self.names.contains_key(&code) {
            return false;
        }
        self.order.push(code.clone());
        self.names.insert(code, name.into());
        true
    }

    /// Look up the name recorded for a code.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Returns true if the code is present.
    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    /// Subject codes in insertion order.
    pub fn codes(&self) -> &[String] {
        &self.order
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over `(code, name)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|code| (code.as_str(), self.names[code].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = SubjectCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.codes().is_empty());
        assert_eq!(catalog.name("1234561"), None);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = SubjectCatalog::new();
        assert!(catalog.insert("1234561", "ENGINEERING MATHEMATICS I"));
        assert!(catalog.insert("1234562", "ENGINEERING PHYSICS"));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name("1234561"), Some("ENGINEERING MATHEMATICS I"));
        assert_eq!(catalog.name("1234562"), Some("ENGINEERING PHYSICS"));
        assert!(catalog.contains("1234561"));
        assert!(!catalog.contains("9999999"));
    }

    #[test]
    fn test_first_insert_wins() {
        let mut catalog = SubjectCatalog::new();
        assert!(catalog.insert("1234561", "ORIGINAL NAME"));
        assert!(!catalog.insert("1234561", "LATER NAME"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.name("1234561"), Some("ORIGINAL NAME"));
    }

    #[test]
    fn test_codes_preserve_insertion_order() {
        let mut catalog = SubjectCatalog::new();
        catalog.insert("3000003", "THIRD");
        catalog.insert("1000001", "FIRST");
        catalog.insert("2000002", "SECOND");
        assert_eq!(catalog.codes(), &["3000003", "1000001", "2000002"]);
    }

    #[test]
    fn test_iter_pairs_in_order() {
        let mut catalog = SubjectCatalog::new();
        catalog.insert("1234561", "MATHS");
        catalog.insert("1234562", "PHYSICS");
        let pairs: Vec<(&str, &str)> = catalog.iter().collect();
        assert_eq!(pairs, vec![("1234561", "MATHS"), ("1234562", "PHYSICS")]);
    }

    #[test]
    fn test_duplicate_insert_keeps_order_stable() {
        let mut catalog = SubjectCatalog::new();
        catalog.insert("1234561", "A");
        catalog.insert("1234562", "B");
        catalog.insert("1234561", "C");
        assert_eq!(catalog.codes(), &["1234561", "1234562"]);
    }
}

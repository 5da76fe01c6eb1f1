//! The class name → CSS declaration table.
//!
//! The table is read from a JSON object whose keys are utility class names
//! and whose values are human-readable declarations (`"padding: 1rem"`).
//! Entry order is kept so search results come out in dataset order.
//!
//! This module is split into:
//! - `dataset` — loading state, cached table, pending waiters

pub mod dataset;

use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::classifier::strip_variants;
use crate::error::{Error, Result};

pub use dataset::{
    Bundled, Dataset, DatasetSource, Fetch, FileSource, BUNDLED_DATASET, DATASET_PATH,
};

/// Maximum number of hits returned by [`ClassDb::search`] for the popup.
pub const MAX_SEARCH_RESULTS: usize = 30;

/// One row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityEntry {
    pub name: String,
    pub declaration: String,
}

/// Immutable lookup table, keyed by exact class name.
#[derive(Debug, Clone, Default)]
pub struct ClassDb {
    entries: Vec<UtilityEntry>,
    index: HashMap<String, usize>,
}

impl ClassDb {
    /// Parse the dataset JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::Dataset)
    }

    /// Build a table from (name, declaration) pairs. A repeated name keeps
    /// its first position and takes the last declaration.
    pub fn from_entries<I, N, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, D)>,
        N: Into<String>,
        D: Into<String>,
    {
        let mut db = Self::default();
        for (name, declaration) in entries {
            db.insert(name.into(), declaration.into());
        }
        db
    }

    fn insert(&mut self, name: String, declaration: String) {
        match self.index.get(&name) {
            Some(&i) => self.entries[i].declaration = declaration,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(UtilityEntry { name, declaration });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UtilityEntry> {
        self.entries.iter()
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].declaration.as_str())
    }

    /// Lookup of a class as written on an element: variant markers are
    /// stripped first, so `hover:bg-blue-600` finds `bg-blue-600`.
    pub fn lookup(&self, class: &str) -> Option<&str> {
        self.get(strip_variants(class))
    }

    /// Variant-stripped lookup, split into property and value.
    pub fn declaration(&self, class: &str) -> Option<Declaration<'_>> {
        self.lookup(class).map(Declaration::split)
    }

    /// Popup search.
    ///
    /// The query is trimmed and lower-cased. An exact hit comes first, then
    /// names containing the query in dataset order; collection stops once
    /// `limit` hits are gathered. Hits are ordered exact-first, then by
    /// shorter name.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits = Vec::new();
        if let Some(&i) = self.index.get(&query) {
            hits.push(SearchHit::new(&self.entries[i], true));
        }

        for entry in &self.entries {
            if hits.len() >= limit {
                break;
            }
            if entry.name != query && entry.name.contains(&query) {
                hits.push(SearchHit::new(entry, false));
            }
        }

        hits.sort_by_key(|h| (!h.exact, h.name.len()));
        hits
    }
}

impl<'de> Deserialize<'de> for ClassDb {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClassDbVisitor;

        impl<'de> Visitor<'de> for ClassDbVisitor {
            type Value = ClassDb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of class names to CSS declarations")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<ClassDb, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut db = ClassDb::default();
                while let Some((name, declaration)) = map.next_entry::<String, String>()? {
                    db.insert(name, declaration);
                }
                Ok(db)
            }
        }

        deserializer.deserialize_map(ClassDbVisitor)
    }
}

/// A declaration split at its first colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// `None` when the declaration had no colon.
    pub property: Option<&'a str>,
    pub value: &'a str,
}

impl<'a> Declaration<'a> {
    /// `"padding: 1rem"` → property `padding`, value `1rem`. Everything after
    /// the first colon is the value, so `"background-image: url(a:b)"` keeps
    /// its inner colon.
    pub fn split(css: &'a str) -> Self {
        match css.split_once(':') {
            Some((property, value)) => Self {
                property: Some(property.trim()),
                value: value.trim(),
            },
            None => Self {
                property: None,
                value: css,
            },
        }
    }
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.property {
            Some(property) => write!(f, "{property}: {}", self.value),
            None => f.write_str(self.value),
        }
    }
}

/// One popup search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub name: &'a str,
    pub css: &'a str,
    pub exact: bool,
}

impl<'a> SearchHit<'a> {
    fn new(entry: &'a UtilityEntry, exact: bool) -> Self {
        Self {
            name: &entry.name,
            css: &entry.declaration,
            exact,
        }
    }

    pub fn declaration(&self) -> Declaration<'a> {
        Declaration::split(self.css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClassDb {
        ClassDb::from_json(
            r#"{
                "p-4": "padding: 1rem",
                "px-4": "padding-left: 1rem; padding-right: 1rem",
                "flex": "display: flex",
                "flex-1": "flex: 1 1 0%",
                "flex-col": "flex-direction: column",
                "inline-flex": "display: inline-flex",
                "bg-blue-500": "background-color: #3b82f6",
                "sr-only": "position: absolute"
            }"#,
        )
        .expect("sample dataset should parse")
    }

    #[test]
    fn exact_get() {
        let db = sample();
        assert_eq!(db.len(), 8);
        assert_eq!(db.get("p-4"), Some("padding: 1rem"));
        assert_eq!(db.get("p-5"), None);
        assert_eq!(db.get("hover:p-4"), None);
    }

    #[test]
    fn lookup_strips_variants() {
        let db = sample();
        assert_eq!(db.lookup("hover:dark:bg-blue-500"), Some("background-color: #3b82f6"));
        assert_eq!(db.lookup("!p-4"), Some("padding: 1rem"));
    }

    #[test]
    fn repeated_lookups_are_stable() {
        let db = sample();
        let first = db.get("flex");
        for _ in 0..3 {
            assert_eq!(db.get("flex"), first);
        }
    }

    #[test]
    fn split_at_first_colon() {
        let d = Declaration::split("padding: 1rem");
        assert_eq!(d.property, Some("padding"));
        assert_eq!(d.value, "1rem");
        assert_eq!(d.to_string(), "padding: 1rem");

        let d = Declaration::split("background-image: url(data:x)");
        assert_eq!(d.property, Some("background-image"));
        assert_eq!(d.value, "url(data:x)");

        let d = Declaration::split("none");
        assert_eq!(d.property, None);
        assert_eq!(d.value, "none");
    }

    #[test]
    fn rejects_non_object_dataset() {
        assert!(matches!(ClassDb::from_json("[1, 2]"), Err(Error::Dataset(_))));
        assert!(matches!(ClassDb::from_json(r#"{"p-4": 4}"#), Err(Error::Dataset(_))));
        assert!(ClassDb::from_json("{}").expect("empty object").is_empty());
    }

    #[test]
    fn duplicate_names_take_last_declaration() {
        let db = ClassDb::from_json(r#"{"a": "x: 1", "b": "y: 2", "a": "x: 3"}"#).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.get("a"), Some("x: 3"));
        assert_eq!(db.iter().next().map(|e| e.name.as_str()), Some("a"));
    }

    #[test]
    fn search_puts_exact_hit_first() {
        let db = sample();
        let hits = db.search("  FLEX ", MAX_SEARCH_RESULTS);
        let names: Vec<_> = hits.iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["flex", "flex-1", "flex-col", "inline-flex"]);
        assert!(hits[0].exact);
        assert!(hits[1..].iter().all(|h| !h.exact));
    }

    #[test]
    fn search_without_exact_hit_orders_by_length() {
        let db = sample();
        let names: Vec<_> = db.search("-4", 30).iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["p-4", "px-4"]);
    }

    #[test]
    fn search_limit_and_empty_query() {
        let db = sample();
        assert!(db.search("   ", 30).is_empty());
        assert_eq!(db.search("flex", 2).len(), 2);
        assert!(db.search("grid", 30).is_empty());
    }
}

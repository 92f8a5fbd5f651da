//! Pattern database.
//!
//! Holds the connection patterns in load order and indexes them by name.

use rustc_hash::FxHashMap;

use crate::core::{AnalysisError, Result};

use super::pattern::{Pattern, PatternClass};

/// Collection of connection patterns.
///
/// Matchers visit patterns in registration order.
///
/// ## Example
///
/// ```
/// use go_connections::patterns::{Pattern, PatternClass, PatternDatabase};
///
/// let mut db = PatternDatabase::new();
/// db.register(Pattern::from_diagram("CB1", "XO\nO*", PatternClass::CUT).unwrap());
/// db.register(Pattern::from_diagram("CC3", "O.\n.O", PatternClass::CONNECT).unwrap());
///
/// assert_eq!(db.len(), 2);
/// assert_eq!(db.find_by_class(PatternClass::CUT).count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternDatabase {
    patterns: Vec<Pattern>,
    by_name: FxHashMap<String, usize>,
}

impl PatternDatabase {
    /// Create an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern.
    ///
    /// Panics if a pattern with the same name already exists.
    pub fn register(&mut self, pattern: Pattern) {
        if let Err(err) = self.try_register(pattern) {
            panic!("{}", err);
        }
    }

    /// Register a pattern, failing on a duplicate name.
    pub fn try_register(&mut self, pattern: Pattern) -> Result<()> {
        if self.by_name.contains_key(&pattern.name) {
            return Err(AnalysisError::DuplicatePattern(pattern.name));
        }
        self.by_name.insert(pattern.name.clone(), self.patterns.len());
        self.patterns.push(pattern);
        Ok(())
    }

    /// Get a pattern by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.by_name.get(name).map(|&i| &self.patterns[i])
    }

    /// Check if a pattern name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the database is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over patterns in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Patterns carrying every flag in `class`.
    pub fn find_by_class(&self, class: PatternClass) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().filter(move |p| p.class.contains(class))
    }
}

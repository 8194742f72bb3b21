use std::collections::BTreeMap;

use serde_json::Value;

/// Named values captured during a single match attempt.
///
/// Built incrementally as the engine walks the pattern: every `Capture`
/// that succeeds contributes exactly one entry. Keys are declared statically
/// by the pattern author, so a duplicate key is a defect in the pattern
/// declarations, not in the input — `insert` panics rather than silently
/// overwriting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    map: BTreeMap<&'static str, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a captured value.
    ///
    /// # Panics
    ///
    /// Panics if `name` was already bound in this match attempt.
    pub fn insert(&mut self, name: &'static str, value: Value) {
        let prev = self.map.insert(name, value);
        assert!(
            prev.is_none(),
            "capture name `{name}` bound twice in one pattern; \
             capture names must be unique within a pattern"
        );
    }

    /// Merge another set of bindings into this one.
    ///
    /// # Panics
    ///
    /// Panics on any key present in both sets (same contract as `insert`).
    pub fn merge(&mut self, other: Bindings) {
        for (name, value) in other.map {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// The captured value for `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` was not captured. Use this only for names the
    /// pattern is known to capture on every successful match; a miss is a
    /// defect in the pattern declaration.
    pub fn node(&self, name: &str) -> &Value {
        self.map
            .get(name)
            .unwrap_or_else(|| panic!("pattern did not capture `{name}`"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.map.iter().map(|(k, v)| (*k, v))
    }
}

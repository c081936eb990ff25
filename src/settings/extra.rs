//! Caller-supplied directives outside the built-in fields.

use rustc_hash::FxHashMap;

use crate::codegen::{Literal, ToTypst};

/// Insertion-ordered map with string keys.
///
/// Overwriting an existing key keeps its original position.
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: FxHashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<V> OrderedMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get the value for `key`, inserting `V::default()` at the end if absent.
    pub fn entry_or_default(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.to_owned(), i);
                self.entries.push((key.to_owned(), V::default()));
                i
            }
        };
        &mut self.entries[i].1
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consume into entries in insertion order.
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

/// Value of an extra directive.
///
/// Text is passed through untouched: quoting is the caller's job. Booleans
/// are not accepted; use [`Literal::True`] or [`Literal::False`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExtraValue {
    /// Sentinel token, written as its canonical text.
    Literal(Literal),
    /// Pre-formatted Typst code.
    Text(String),
}

impl ToTypst for ExtraValue {
    fn to_typst(&self) -> String {
        match self {
            Self::Literal(lit) => lit.to_typst(),
            Self::Text(code) => code.clone(),
        }
    }
}

impl From<Literal> for ExtraValue {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<&str> for ExtraValue {
    fn from(code: &str) -> Self {
        Self::Text(code.to_owned())
    }
}

impl From<String> for ExtraValue {
    fn from(code: String) -> Self {
        Self::Text(code)
    }
}

/// Extra directives: group → (key → value), both levels insertion-ordered.
#[derive(Debug, Clone, Default)]
pub struct ExtraDirectives {
    groups: OrderedMap<OrderedMap<ExtraValue>>,
}

impl ExtraDirectives {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `group.key`.
    pub fn insert(&mut self, group: &str, key: &str, value: ExtraValue) -> Option<ExtraValue> {
        self.groups.entry_or_default(group).insert(key, value)
    }

    /// Look up `group.key`.
    pub fn get(&self, group: &str, key: &str) -> Option<&ExtraValue> {
        self.groups.get(group)?.get(key)
    }

    /// Whether no directives were added.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in insertion order, each with its ordered entries.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &OrderedMap<ExtraValue>)> {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_overwrite_keeps_position() {
        let mut map = OrderedMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.insert("a", 3), Some(1));
        let entries: Vec<_> = map.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(entries, [("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_entry_or_default_appends() {
        let mut map: OrderedMap<Vec<u8>> = OrderedMap::new();
        map.entry_or_default("x").push(1);
        map.entry_or_default("y").push(2);
        map.entry_or_default("x").push(3);
        assert_eq!(map.get("x"), Some(&vec![1, 3]));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_extra_value_rendering() {
        assert_eq!(ExtraValue::from(Literal::Auto).to_typst(), "auto");
        assert_eq!(ExtraValue::from("(paint: blue)").to_typst(), "(paint: blue)");
        // Text is never quoted.
        assert_eq!(ExtraValue::from("blue").to_typst(), "blue");
    }

    #[test]
    fn test_extra_table() {
        let mut extra = ExtraDirectives::new();
        assert!(extra.is_empty());
        extra.insert("text", "fill", "red".into());
        extra.insert("block", "spacing", "1em".into());
        let old = extra.insert("text", "fill", "blue".into());
        assert_eq!(old, Some(ExtraValue::Text("red".into())));
        assert_eq!(extra.get("text", "fill"), Some(&ExtraValue::Text("blue".into())));
        let groups: Vec<_> = extra.groups().map(|(g, _)| g).collect();
        assert_eq!(groups, ["text", "block"]);
    }
}

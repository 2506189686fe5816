//! Reference tables: per convention mappings from a size token to the
//! category's internal reference value, and the catalog that owns them.
//!
//! Entries are kept sorted by reference value. Where several tokens share a
//! reference value they are ordered numeric tokens first, then lexically,
//! which is also the tie-break used by [`ReferenceTable::find`]. That keeps
//! reverse lookups deterministic when a chart lists both `40` and `M` for
//! the same physical size.

use core::hash::BuildHasherDefault;
use std::cmp::Ordering;
use std::collections::HashMap;

// we will use a fast hashing algo for the token indexes
use seahash::SeaHasher;

use crate::builtin;
use crate::normalize::{normalize, numeric};
use crate::taxonomy::{Category, Convention, Sheet};

pub type TokenHasher = BuildHasherDefault<SeaHasher>;

// ------------- Entry -------------
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    token: String,
    reference: f64,
}
impl Entry {
    pub fn token(&self) -> &str {
        &self.token
    }
    pub fn reference(&self) -> f64 {
        self.reference
    }
    pub fn is_numeric(&self) -> bool {
        numeric(&self.token).is_some()
    }
}

// numeric before letter, then lexical
fn rank(token: &str) -> (bool, &str) {
    (numeric(token).is_none(), token)
}

fn canonical_order(a: &Entry, b: &Entry) -> Ordering {
    a.reference
        .total_cmp(&b.reference)
        .then_with(|| rank(&a.token).cmp(&rank(&b.token)))
}

// ------------- ReferenceTable -------------
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<Entry>,
    index: HashMap<String, usize, TokenHasher>,
}

impl ReferenceTable {
    /// Builds a table, normalizing every token. A token listed twice keeps
    /// its last reference value.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut kept: HashMap<String, f64, TokenHasher> = HashMap::default();
        for (token, reference) in pairs {
            kept.insert(normalize(token.as_ref()), reference);
        }
        let mut entries: Vec<Entry> = kept
            .into_iter()
            .map(|(token, reference)| Entry { token, reference })
            .collect();
        entries.sort_by(canonical_order);
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.token.clone(), i))
            .collect();
        Self { entries, index }
    }
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self::new(pairs.iter().copied())
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    pub fn get(&self, token: &str) -> Option<f64> {
        self.index.get(token).map(|i| self.entries[*i].reference)
    }
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }
    /// The entry closest to `reference` within `tolerance`. Equally close
    /// entries are ranked numeric first, then lexically.
    pub fn find(&self, reference: f64, tolerance: f64) -> Option<&Entry> {
        self.entries
            .iter()
            .map(|e| ((e.reference - reference).abs(), e))
            .filter(|(distance, _)| *distance <= tolerance)
            .min_by(|(da, a), (db, b)| da.total_cmp(db).then_with(|| rank(&a.token).cmp(&rank(&b.token))))
            .map(|(_, e)| e)
    }
    pub fn lowest(&self) -> Option<&Entry> {
        self.entries.first()
    }
    /// The preferred entry among those sharing the largest reference value.
    pub fn highest(&self) -> Option<&Entry> {
        let top = self.entries.last()?.reference;
        self.entries.iter().find(|e| e.reference == top)
    }
    /// The two largest numeric entries with distinct reference values, as
    /// `(second, largest)`.
    pub fn top_two_numeric(&self) -> Option<(&Entry, &Entry)> {
        let mut numeric_entries = self.entries.iter().rev().filter(|e| e.is_numeric());
        let largest = numeric_entries.next()?;
        let second = numeric_entries.find(|e| e.reference < largest.reference)?;
        Some((second, largest))
    }
    /// `"<lowest> - <highest>"` in this table's own tokens.
    pub fn range(&self) -> Option<String> {
        Some(format!("{} - {}", self.lowest()?.token, self.highest()?.token))
    }
    /// Up to `n` numeric tokens closest in value to `value`.
    pub fn nearest(&self, value: f64, n: usize) -> Vec<String> {
        let mut candidates: Vec<(f64, &Entry)> = self
            .entries
            .iter()
            .filter_map(|e| numeric(&e.token).map(|v| ((v - value).abs(), e)))
            .collect();
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| canonical_order(a.1, b.1)));
        candidates.into_iter().take(n).map(|(_, e)| e.token.clone()).collect()
    }
    /// The first `n` tokens in canonical order.
    pub fn leading(&self, n: usize) -> Vec<String> {
        self.entries.iter().take(n).map(|e| e.token.clone()).collect()
    }
}

// ------------- TableSet -------------
/// All conventions' tables for one category and sheet.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    tables: HashMap<Convention, ReferenceTable, TokenHasher>,
}
impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn insert(&mut self, convention: Convention, table: ReferenceTable) {
        self.tables.insert(convention, table);
    }
    pub fn get(&self, convention: Convention) -> Option<&ReferenceTable> {
        self.tables.get(&convention)
    }
    /// Conventions with a table, in declaration order.
    pub fn conventions(&self) -> Vec<Convention> {
        let mut conventions: Vec<Convention> = self.tables.keys().copied().collect();
        conventions.sort();
        conventions
    }
}

// ------------- Catalog -------------
/// Every reference table the resolvers are built from, keyed by category
/// and sheet. Read-only once a converter has been constructed from it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sets: HashMap<(Category, Sheet), TableSet, TokenHasher>,
}
impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }
    /// The charts shipped with the crate.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (category, sheet, convention, pairs) in builtin::LAYOUT {
            catalog.insert(*category, *sheet, *convention, ReferenceTable::from_pairs(pairs));
        }
        catalog
    }
    /// Adds or replaces one table.
    pub fn insert(&mut self, category: Category, sheet: Sheet, convention: Convention, table: ReferenceTable) {
        self.sets
            .entry((category, sheet))
            .or_default()
            .insert(convention, table);
    }
    pub fn set(&self, category: Category, sheet: Sheet) -> TableSet {
        self.sets.get(&(category, sheet)).cloned().unwrap_or_default()
    }
    pub fn table(&self, category: Category, sheet: Sheet, convention: Convention) -> Option<&ReferenceTable> {
        self.sets.get(&(category, sheet))?.get(convention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apparel() -> ReferenceTable {
        ReferenceTable::from_pairs(&[("M", 40.0), ("40", 40.0), ("38", 38.0), ("L", 42.0), ("42", 42.0)])
    }

    #[test]
    fn sorted_by_reference_then_numeric_first() {
        let table = apparel();
        let tokens: Vec<&str> = table.entries().iter().map(|e| e.token()).collect();
        assert_eq!(tokens, vec!["38", "40", "M", "42", "L"]);
    }

    #[test]
    fn reverse_lookup_prefers_numeric_tokens() {
        let table = apparel();
        assert_eq!(table.find(40.0, 0.01).map(|e| e.token()), Some("40"));
        assert_eq!(table.find(40.005, 0.01).map(|e| e.token()), Some("40"));
        assert!(table.find(41.0, 0.01).is_none());
    }

    #[test]
    fn wide_tolerance_still_picks_the_closest() {
        let table = ReferenceTable::from_pairs(&[("42", 8.5), ("42.5", 9.0), ("43", 9.5)]);
        assert_eq!(table.find(9.0, 0.6).map(|e| e.token()), Some("42.5"));
        assert_eq!(table.find(9.1, 0.6).map(|e| e.token()), Some("42.5"));
    }

    #[test]
    fn letter_tie_break_is_lexical() {
        let table = ReferenceTable::from_pairs(&[("E", 5.0), ("DD", 5.0)]);
        assert_eq!(table.find(5.0, 0.01).map(|e| e.token()), Some("DD"));
    }

    #[test]
    fn extremes_and_range() {
        let table = apparel();
        assert_eq!(table.lowest().map(|e| e.token()), Some("38"));
        assert_eq!(table.highest().map(|e| e.token()), Some("42"));
        assert_eq!(table.range().as_deref(), Some("38 - 42"));
        let (second, largest) = table.top_two_numeric().unwrap();
        assert_eq!((second.token(), largest.token()), ("40", "42"));
    }

    #[test]
    fn tokens_are_normalized_on_construction() {
        let table = ReferenceTable::from_pairs(&[(" 9 1/2 ", 9.5), ("xl", 46.0)]);
        assert!(table.contains("9.5"));
        assert!(table.contains("XL"));
    }

    #[test]
    fn nearest_by_token_value() {
        let table = apparel();
        assert_eq!(table.nearest(41.0, 2), vec!["40", "42"]);
    }

    #[test]
    fn builtin_catalog_has_shoe_charts() {
        let catalog = Catalog::builtin();
        let us = catalog.table(Category::Shoes, Sheet::Women, Convention::Us).unwrap();
        assert_eq!(us.get("9"), Some(9.0));
        assert!(catalog.table(Category::Socks, Sheet::Women, Convention::Us).is_none());
    }
}

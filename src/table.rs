//! The classification table: every trigram key mapped to its category, in
//! generation order.

use std::time::Instant;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::constants::*;
use crate::types::{Category, Trigram};

/// Insertion-ordered map from trigram key (`"LPLRLM"`) to category.
///
/// Iteration order is generation order, which keeps the serialized artifact
/// byte-stable across runs.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrigramTable {
    entries: IndexMap<String, Category>,
}

impl TrigramTable {
    /// Classify all trigrams in ascending (f0, f1, f2) order.
    pub fn build() -> Self {
        let start = Instant::now();
        let mut entries = IndexMap::with_capacity(NUM_TRIGRAMS);
        for t in Trigram::all() {
            entries.insert(t.key(), classify(&t));
        }
        tracing::debug!(
            entries = entries.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "built trigram table"
        );
        TrigramTable { entries }
    }

    pub(crate) fn from_entries(entries: IndexMap<String, Category>) -> Self {
        TrigramTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, t: &Trigram) -> Option<Category> {
        self.entries.get(&t.key()).copied()
    }

    pub fn get_key(&self, key: &str) -> Option<Category> {
        self.entries.get(key).copied()
    }

    /// Entries in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
        self.entries.iter().map(|(k, &c)| (k.as_str(), c))
    }

    /// Number of trigrams per category, in [`Category::ALL`] order.
    pub fn category_counts(&self) -> [(Category, usize); Category::COUNT] {
        let mut counts = Category::ALL.map(|c| (c, 0usize));
        for &c in self.entries.values() {
            if let Some(slot) = counts.iter_mut().find(|(k, _)| *k == c) {
                slot.1 += 1;
            }
        }
        counts
    }

    /// First entry where `self` and `other` disagree, comparing position by
    /// position. Returns `(key, ours, theirs)`; a missing side is `None`.
    pub fn first_difference(
        &self,
        other: &TrigramTable,
    ) -> Option<(String, Option<Category>, Option<Category>)> {
        let n = self.len().max(other.len());
        for i in 0..n {
            let ours = self.entries.get_index(i);
            let theirs = other.entries.get_index(i);
            match (ours, theirs) {
                (Some((ka, ca)), Some((kb, cb))) if ka == kb && ca == cb => continue,
                (Some((ka, ca)), Some((kb, _))) if ka != kb => {
                    return Some((ka.clone(), Some(*ca), other.get_key(ka)));
                }
                (Some((ka, ca)), Some((_, cb))) => {
                    return Some((ka.clone(), Some(*ca), Some(*cb)));
                }
                (Some((ka, ca)), None) => return Some((ka.clone(), Some(*ca), None)),
                (None, Some((kb, cb))) => return Some((kb.clone(), None, Some(*cb))),
                (None, None) => break,
            }
        }
        None
    }
}

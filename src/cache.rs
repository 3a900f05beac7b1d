// src/cache.rs
//
// Explicit memoization for the two expensive views: the dataset build and the
// ingredient-frequency ranking.
//
// Both are keyed by a `ContentKey`, a SHA-256 over the raw rows plus the
// category rules they were built with. A changed input gives a new key, which
// is the only invalidation rule; `invalidate()` exists for callers that want
// to force a rebuild. Values are handed out as `Arc` so readers share them
// without copying and without locking.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::config::CategoryRules;
use crate::dataset::{Dataset, DatasetLoader, LoadReport};
use crate::error::Result;
use crate::query;
use crate::recipe::RawRecipeRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentKey([u8; 32]);

impl ContentKey {
    pub fn of(rows: &[RawRecipeRow], rules: &CategoryRules) -> Self {
        let mut h = Sha256::new();

        h.update((rows.len() as u64).to_le_bytes());
        for row in rows {
            feed_opt(&mut h, row.recipe_id.as_deref());
            feed(&mut h, &row.recipe_name);
            feed_opt(&mut h, row.recipe_ingredients.as_deref());
            feed_opt(&mut h, row.recipe_description.as_deref());
            feed_opt(&mut h, row.recipe_nutriscore.as_deref());
            feed_opt(&mut h, row.recipe_reproduction_steps.as_deref());
        }

        h.update((rules.len() as u64).to_le_bytes());
        for rule in rules.iter() {
            feed(&mut h, &rule.name);
            h.update((rule.keywords().len() as u64).to_le_bytes());
            for kw in rule.keywords() {
                feed(&mut h, kw);
            }
        }

        Self(h.finalize().into())
    }

    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(64);
        for byte in self.0 {
            let _ = write!(&mut out, "{byte:02x}");
        }
        out
    }
}

// Length-prefixed so ("ab","c") and ("a","bc") differ.
fn feed(h: &mut Sha256, s: &str) {
    h.update((s.len() as u64).to_le_bytes());
    h.update(s.as_bytes());
}

fn feed_opt(h: &mut Sha256, s: Option<&str>) {
    match s {
        None => h.update([0u8]),
        Some(s) => {
            h.update([1u8]);
            feed(h, s);
        }
    }
}

/// A dataset together with the key of the input it was built from.
#[derive(Clone, Debug)]
pub struct LoadedDataset {
    pub key: ContentKey,
    pub dataset: Arc<Dataset>,
    pub report: Arc<LoadReport>,
}

/// Holds the most recent dataset build.
#[derive(Debug, Default)]
pub struct DatasetCache {
    current: Option<LoadedDataset>,
    hits: u64,
    misses: u64,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset if `rows` and `rules` hash to the cached key,
    /// otherwise build, cache and return a new one.
    pub fn get_or_load(&mut self, rows: &[RawRecipeRow], rules: &CategoryRules) -> LoadedDataset {
        let key = ContentKey::of(rows, rules);

        if let Some(cur) = &self.current {
            if cur.key == key {
                self.hits += 1;
                logd!("Cache: dataset hit {}", &key.to_hex()[..12]);
                return cur.clone();
            }
        }

        self.misses += 1;
        logd!("Cache: dataset miss {}, building", &key.to_hex()[..12]);
        let (dataset, report) = DatasetLoader::new(rules.clone()).load_with_report(rows);
        let loaded = LoadedDataset { key, dataset: Arc::new(dataset), report: Arc::new(report) };
        self.current = Some(loaded.clone());
        loaded
    }

    pub fn current(&self) -> Option<&LoadedDataset> {
        self.current.as_ref()
    }

    pub fn invalidate(&mut self) {
        self.current = None;
    }

    pub fn hits(&self) -> u64 { self.hits }
    pub fn misses(&self) -> u64 { self.misses }
}

pub type Frequencies = Arc<Vec<(String, usize)>>;

/// Memo for `query::ingredient_frequency`, keyed by (dataset key, top_n).
/// Entries for an older dataset key are dropped as soon as a new key shows up.
#[derive(Debug, Default)]
pub struct FrequencyMemo {
    key: Option<ContentKey>,
    entries: HashMap<usize, Frequencies>,
    hits: u64,
    misses: u64,
}

impl FrequencyMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, loaded: &LoadedDataset, top_n: usize) -> Result<Frequencies> {
        if self.key != Some(loaded.key) {
            self.entries.clear();
            self.key = Some(loaded.key);
        }

        if let Some(hit) = self.entries.get(&top_n) {
            self.hits += 1;
            return Ok(Arc::clone(hit));
        }

        self.misses += 1;
        let ranked = Arc::new(query::ingredient_frequency(&loaded.dataset, top_n)?);
        self.entries.insert(top_n, Arc::clone(&ranked));
        Ok(ranked)
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.entries.clear();
    }

    pub fn hits(&self) -> u64 { self.hits }
    pub fn misses(&self) -> u64 { self.misses }
}

// src/dataset.rs
//
// Canonical in-memory dataset and the loader that builds it.
//
// - Dataset: insertion-ordered recipes keyed by recipe id. Read-only once
//            built; query code only borrows from it.
// - DatasetLoader: raw rows → Dataset. Pure: same rows, same rules,
//                  same Dataset in the same order.
//
// Loader policy per row, in input order:
//   id not numeric          → dropped (debug log)
//   id already seen         → dropped, first occurrence wins (debug log)
//   ingredients unusable    → rejected, listed in LoadReport (warn log)
// The id slot is claimed before the row is built, so a rejected first
// occurrence still shadows later duplicates.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::CategoryRules;
use crate::recipe::{CanonicalRecipe, FeatureBuilder, RawRecipeRow, parse_recipe_id};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    recipes: IndexMap<i64, CanonicalRecipe>,
    /// Rules the category flags were computed with.
    rules: CategoryRules,
}

impl Dataset {
    pub fn rules(&self) -> &CategoryRules { &self.rules }

    pub fn len(&self) -> usize { self.recipes.len() }
    pub fn is_empty(&self) -> bool { self.recipes.is_empty() }

    pub fn get(&self, recipe_id: i64) -> Option<&CanonicalRecipe> {
        self.recipes.get(&recipe_id)
    }

    pub fn contains(&self, recipe_id: i64) -> bool {
        self.recipes.contains_key(&recipe_id)
    }

    /// Recipes in load order.
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalRecipe> {
        self.recipes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.recipes.keys().copied()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CanonicalRecipe;
    type IntoIter = indexmap::map::Values<'a, i64, CanonicalRecipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.values()
    }
}

/// What happened to the input rows during one load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded: usize,
    pub dropped_bad_id: usize,
    pub dropped_duplicate: usize,
    /// (input row index, reason)
    pub rejected: Vec<(usize, String)>,
}

#[derive(Clone, Debug, Default)]
pub struct DatasetLoader {
    builder: FeatureBuilder,
}

impl DatasetLoader {
    pub fn new(rules: CategoryRules) -> Self {
        Self { builder: FeatureBuilder::new(rules) }
    }

    pub fn rules(&self) -> &CategoryRules {
        self.builder.rules()
    }

    pub fn load(&self, rows: &[RawRecipeRow]) -> Dataset {
        self.load_with_report(rows).0
    }

    pub fn load_with_report(&self, rows: &[RawRecipeRow]) -> (Dataset, LoadReport) {
        let mut recipes: IndexMap<i64, CanonicalRecipe> = IndexMap::with_capacity(rows.len());
        let mut seen: HashSet<i64> = HashSet::with_capacity(rows.len());
        let mut report = LoadReport { total_rows: rows.len(), ..LoadReport::default() };

        for (row_ix, raw) in rows.iter().enumerate() {
            let Some(id) = raw.recipe_id.as_deref().and_then(parse_recipe_id) else {
                logd!("Load: row {row_ix}: non-numeric recipe_id {:?}, dropped", raw.recipe_id);
                report.dropped_bad_id += 1;
                continue;
            };

            if !seen.insert(id) {
                logd!("Load: row {row_ix}: duplicate recipe_id {id}, dropped");
                report.dropped_duplicate += 1;
                continue;
            }

            match self.builder.build_with_id(id, raw) {
                Ok(recipe) => {
                    recipes.insert(id, recipe);
                }
                Err(e) => {
                    logw!("Load: row {row_ix}: {e}; skipped");
                    report.rejected.push((row_ix, e.to_string()));
                }
            }
        }

        report.loaded = recipes.len();
        logf!(
            "Load: {} rows → {} recipes (bad id={}, duplicate={}, rejected={})",
            report.total_rows,
            report.loaded,
            report.dropped_bad_id,
            report.dropped_duplicate,
            report.rejected.len()
        );

        (Dataset { recipes, rules: self.rules().clone() }, report)
    }
}

/// Load with the built-in category rules.
pub fn load(rows: &[RawRecipeRow]) -> Dataset {
    DatasetLoader::default().load(rows)
}

// src/query.rs
//! Read-only queries over a [`Dataset`].
//!
//! Every function here is a pure function of its arguments: nothing mutates
//! the dataset, and per-query annotations (such as the shared-ingredient count
//! of a similarity query) are returned as fresh values borrowed from it.
//!
//! Orderings are stable: whenever two results tie, dataset order decides (or
//! first-seen order for ingredient counts), so equal inputs give equal outputs.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::consts::{FISH, MEAT};
use crate::dataset::Dataset;
use crate::error::{ExplorerError, Result};
use crate::recipe::CanonicalRecipe;

/// Recipes with at least one ingredient containing `term` (case-insensitive).
///
/// An empty term matches every recipe that has any ingredient entry.
pub fn search_by_ingredient_substring<'a>(dataset: &'a Dataset, term: &str) -> Vec<&'a CanonicalRecipe> {
    let needle = term.to_lowercase();
    dataset
        .iter()
        .filter(|r| r.ingredients().iter().any(|ing| ing.contains(needle.as_str())))
        .collect()
}

/// Recipes containing every selected ingredient (exact canonical names).
///
/// No selection means no criteria, which yields no recipes.
pub fn filter_by_all_ingredients<'a, S>(dataset: &'a Dataset, selected: &[S]) -> Vec<&'a CanonicalRecipe>
where
    S: AsRef<str>,
{
    if selected.is_empty() {
        return Vec::new();
    }
    dataset
        .iter()
        .filter(|r| selected.iter().all(|s| r.has_ingredient(s.as_ref())))
        .collect()
}

/// The `top_n` most used ingredient names with their recipe counts.
///
/// Each recipe contributes each of its distinct names once, the empty name
/// included. Ties keep the order in which names were first met.
pub fn ingredient_frequency(dataset: &Dataset, top_n: usize) -> Result<Vec<(String, usize)>> {
    if top_n == 0 {
        return Err(ExplorerError::InvalidArgument(s!("top_n must be a positive integer")));
    }

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for recipe in dataset {
        for name in recipe.ingredients() {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // stable: equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    Ok(ranked.into_iter().map(|(name, n)| (s!(name), n)).collect())
}

/// The `n` recipes with the fewest ingredients, fewest first.
pub fn least_ingredients(dataset: &Dataset, n: usize) -> Vec<&CanonicalRecipe> {
    let mut recipes: Vec<&CanonicalRecipe> = dataset.iter().collect();
    recipes.sort_by_key(|r| r.num_ingredients());
    recipes.truncate(n);
    recipes
}

/// Per-category recipe counts, in category-rule order.
/// A recipe in several categories counts in each of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: IndexMap<String, usize>,
}

impl CategoryCounts {
    pub fn get(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn fish(&self) -> usize { self.get(FISH) }
    pub fn meat(&self) -> usize { self.get(MEAT) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

pub fn category_counts(dataset: &Dataset) -> CategoryCounts {
    let mut counts: IndexMap<String, usize> = dataset.rules().names().map(|n| (s!(n), 0)).collect();
    for recipe in dataset {
        for cat in recipe.categories() {
            *counts.entry(cat.clone()).or_insert(0) += 1;
        }
    }
    CategoryCounts { counts }
}

/// Uniform pick among recipes in `category`. `None` if there are none,
/// including when the category is not configured at all.
pub fn random_in_category<'a, R>(dataset: &'a Dataset, category: &str, rng: &mut R) -> Option<&'a CanonicalRecipe>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<&CanonicalRecipe> = dataset.iter().filter(|r| r.in_category(category)).collect();
    candidates.choose(rng).copied()
}

/// A recipe annotated with how many ingredients it shares with the central one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimilarRecipe<'a> {
    pub recipe: &'a CanonicalRecipe,
    pub shared_count: usize,
}

/// Other recipes sharing at least `min_shared` ingredients with `central_id`,
/// most shared first. The central recipe itself is never returned.
pub fn find_similar(dataset: &Dataset, central_id: i64, min_shared: usize) -> Result<Vec<SimilarRecipe<'_>>> {
    let central = dataset
        .get(central_id)
        .ok_or(ExplorerError::NotFound { recipe_id: central_id })?;

    let mut similar: Vec<SimilarRecipe<'_>> = dataset
        .iter()
        .filter(|r| r.recipe_id() != central_id)
        .map(|r| SimilarRecipe { recipe: r, shared_count: r.shared_with(central.ingredients()) })
        .filter(|s| s.shared_count >= min_shared)
        .collect();

    similar.sort_by(|a, b| b.shared_count.cmp(&a.shared_count));
    Ok(similar)
}

/// Distinct non-empty ingredient names across the dataset, sorted.
pub fn all_ingredients(dataset: &Dataset) -> Vec<String> {
    let names: BTreeSet<&str> = dataset.iter().flat_map(|r| r.named_ingredients()).collect();
    names.into_iter().map(String::from).collect()
}

// src/recipe.rs
//! Recipe records: the raw row as scraped, and the canonical recipe derived
//! from it.
//!
//! `RawRecipeRow` is whatever the persistence side hands over; every field may
//! be missing. `CanonicalRecipe` is built once per load and never mutated
//! afterwards: its ingredient set, count and category flags are all derived
//! from the raw ingredient text by [`FeatureBuilder`].

use indexmap::IndexSet;

use crate::config::CategoryRules;
use crate::config::consts::{FISH, MEAT};
use crate::core::normalize_ingredient;
use crate::error::{ExplorerError, Result};

/// One scraped recipe, untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawRecipeRow {
    pub recipe_id: Option<String>,
    pub recipe_name: String,
    /// Newline-separated ingredient lines.
    pub recipe_ingredients: Option<String>,
    pub recipe_description: Option<String>,
    pub recipe_nutriscore: Option<String>,
    pub recipe_reproduction_steps: Option<String>,
}

impl RawRecipeRow {
    /// Row with the three fields the core actually reads.
    pub fn new(id: impl Into<String>, name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            recipe_id: Some(id.into()),
            recipe_name: name.into(),
            recipe_ingredients: Some(ingredients.into()),
            ..Self::default()
        }
    }

    fn id_for_display(&self) -> String {
        self.recipe_id.clone().unwrap_or_else(|| s!("<missing>"))
    }
}

/// Numeric coercion of a scraped id.
///
/// Accepts integers and integral floats (`"12"`, `" 12 "`, `"12.0"`).
/// Anything else, including empty text, is not an id.
pub fn parse_recipe_id(raw: &str) -> Option<i64> {
    let t = raw.trim();
    if t.is_empty() { return None; }
    if let Ok(id) = t.parse::<i64>() { return Some(id); }

    let f = t.parse::<f64>().ok()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    if f.is_finite() && f.fract() == 0.0 && in_range {
        Some(f as i64)
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalRecipe {
    recipe_id: i64,
    recipe_name: String,
    /// Canonical names in first-seen line order. May contain "".
    ingredients: IndexSet<String>,
    num_ingredients: usize,
    /// Names of the matching category rules, in rule order.
    categories: Vec<String>,
    description: Option<String>,
    nutriscore: Option<String>,
    reproduction_steps: Option<String>,
}

impl CanonicalRecipe {
    pub fn recipe_id(&self) -> i64 { self.recipe_id }
    pub fn recipe_name(&self) -> &str { &self.recipe_name }
    pub fn ingredients(&self) -> &IndexSet<String> { &self.ingredients }
    pub fn num_ingredients(&self) -> usize { self.num_ingredients }
    pub fn categories(&self) -> &[String] { &self.categories }

    pub fn has_ingredient(&self, name: &str) -> bool {
        self.ingredients.contains(name)
    }

    /// Non-empty canonical names, in line order.
    pub fn named_ingredients(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(String::as_str).filter(|s| !s.is_empty())
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn contains_fish(&self) -> bool { self.in_category(FISH) }
    pub fn contains_meat(&self) -> bool { self.in_category(MEAT) }

    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn nutriscore(&self) -> Option<&str> { self.nutriscore.as_deref() }
    pub fn reproduction_steps(&self) -> Option<&str> { self.reproduction_steps.as_deref() }

    /// Size of the intersection with another ingredient set.
    pub fn shared_with(&self, other: &IndexSet<String>) -> usize {
        let (small, large) = if self.ingredients.len() <= other.len() {
            (&self.ingredients, other)
        } else {
            (other, &self.ingredients)
        };
        small.iter().filter(|ing| large.contains(*ing)).count()
    }

    /// Comma-joined ingredient names, for tables and CSV output.
    pub fn ingredients_label(&self) -> String {
        self.named_ingredients().collect::<Vec<_>>().join(", ")
    }
}

/// Turns raw rows into canonical recipes using a set of category rules.
#[derive(Clone, Debug, Default)]
pub struct FeatureBuilder {
    rules: CategoryRules,
}

impl FeatureBuilder {
    pub fn new(rules: CategoryRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CategoryRules {
        &self.rules
    }

    /// Build a recipe; both the id and the ingredient text must be usable.
    pub fn build(&self, raw: &RawRecipeRow) -> Result<CanonicalRecipe> {
        let id = raw
            .recipe_id
            .as_deref()
            .and_then(parse_recipe_id)
            .ok_or_else(|| ExplorerError::MalformedInput {
                id: raw.id_for_display(),
                reason: s!("recipe_id is not numeric"),
            })?;
        self.build_with_id(id, raw)
    }

    /// Build with an id the caller already coerced.
    pub fn build_with_id(&self, recipe_id: i64, raw: &RawRecipeRow) -> Result<CanonicalRecipe> {
        let Some(text) = raw.recipe_ingredients.as_deref() else {
            return Err(ExplorerError::MalformedInput {
                id: raw.id_for_display(),
                reason: s!("recipe_ingredients is missing"),
            });
        };

        let ingredients: IndexSet<String> = text.split('\n').map(normalize_ingredient).collect();
        let num_ingredients = ingredients.iter().filter(|s| !s.trim().is_empty()).count();
        let categories = self
            .rules
            .iter()
            .filter(|rule| rule.matches(&ingredients))
            .map(|rule| rule.name.clone())
            .collect();

        Ok(CanonicalRecipe {
            recipe_id,
            recipe_name: raw.recipe_name.clone(),
            ingredients,
            num_ingredients,
            categories,
            description: raw.recipe_description.clone(),
            nutriscore: raw.recipe_nutriscore.clone(),
            reproduction_steps: raw.recipe_reproduction_steps.clone(),
        })
    }
}

// src/config/categories.rs
//! Category rules: a category name mapped to a list of keywords.
//!
//! A recipe belongs to a category when any keyword is a substring of any of
//! its canonical ingredient names. Matching is case-insensitive: keywords are
//! lower-cased here, and canonical names are already lower-case.
//!
//! Rules are plain data so new categories come from config, not from code.

use super::consts::{FISH, FISH_KEYWORDS, MEAT, MEAT_KEYWORDS};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryRule {
    pub name: String,
    keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { name: name.into(), keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if any keyword occurs inside any of `ingredients`.
    pub fn matches<'a, I>(&self, ingredients: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        ingredients
            .into_iter()
            .any(|ing| self.keywords.iter().any(|kw| ing.contains(kw.as_str())))
    }
}

/// Ordered set of category rules. Order is preserved for display and counts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryRules {
    /// Built-in fish and meat rules.
    fn default() -> Self {
        Self {
            rules: vec![
                CategoryRule::new(FISH, FISH_KEYWORDS),
                CategoryRule::new(MEAT, MEAT_KEYWORDS),
            ],
        }
    }
}

impl CategoryRules {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule, replacing any existing rule with the same name in place.
    pub fn insert(&mut self, rule: CategoryRule) {
        match self.rules.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_lowercased_and_trimmed() {
        let rule = CategoryRule::new("veg", ["  Courgette ", "", "POIVRON"]);
        assert_eq!(rule.keywords(), &[s!("courgette"), s!("poivron")]);
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut rules = CategoryRules::default();
        rules.insert(CategoryRule::new(FISH, ["anchois"]));
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get(FISH).map(|r| r.keywords().len()), Some(1));
        assert_eq!(rules.names().collect::<Vec<_>>(), vec![FISH, MEAT]);
    }

    #[test]
    fn match_is_substring_of_any_ingredient() {
        let rule = CategoryRule::new(MEAT, ["poulet"]);
        let ings = vec![s!("riz"), s!("filet de poulet")];
        assert!(rule.matches(&ings));
        assert!(!rule.matches(&vec![s!("riz")]));
    }
}

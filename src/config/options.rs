// src/config/options.rs
//
// Runtime settings, stored as a small `key=value` text file:
//
//   # where the scraper left its export
//   recipes=data/recipes.csv
//   top_n=25
//   least_n=5
//   min_shared=2
//   category.fish=poisson,saumon,cabillaud
//   category.veggie=courgette,poivron
//
// Any `category.*` line replaces the built-in fish/meat rules as a whole.

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use super::categories::{CategoryRule, CategoryRules};
use super::consts::*;
use crate::error::{ExplorerError, Result};

const CATEGORY_PREFIX: &str = "category.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerOptions {
    pub recipes_path: PathBuf,
    pub top_n: usize,
    pub least_n: usize,
    pub min_shared: usize,
    pub categories: CategoryRules,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            recipes_path: PathBuf::from(DEFAULT_RECIPES_FILE),
            top_n: DEFAULT_TOP_N,
            least_n: DEFAULT_LEAST_N,
            min_shared: DEFAULT_MIN_SHARED,
            categories: CategoryRules::default(),
        }
    }
}

impl ExplorerOptions {
    /// Default settings path: `.store/explorer.cfg`.
    pub fn default_path() -> PathBuf {
        PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
    }

    /// Load settings; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            logd!("Config: {} missing, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut opts = Self::default();
        let mut custom_categories: Option<CategoryRules> = None;

        for (ix, raw) in text.lines().enumerate() {
            let line_no = ix + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') { continue; }

            let Some(eq) = line.find('=') else {
                return Err(config_err(line_no, format!("expected key=value, got '{line}'")));
            };
            let key = line[..eq].trim();
            let val = line[eq + 1..].trim();

            match key {
                "recipes" => opts.recipes_path = PathBuf::from(val),
                "top_n" => opts.top_n = parse_count(line_no, key, val, 1..=usize::MAX)?,
                "least_n" => opts.least_n = parse_count(line_no, key, val, 1..=LEAST_N_MAX)?,
                "min_shared" => opts.min_shared = parse_count(line_no, key, val, 0..=usize::MAX)?,
                k if k.starts_with(CATEGORY_PREFIX) => {
                    let name = k[CATEGORY_PREFIX.len()..].trim();
                    if name.is_empty() {
                        return Err(config_err(line_no, s!("category name is empty")));
                    }
                    let rule = CategoryRule::new(name, val.split(','));
                    if rule.keywords().is_empty() {
                        return Err(config_err(line_no, format!("category '{name}' has no keywords")));
                    }
                    custom_categories
                        .get_or_insert_with(CategoryRules::empty)
                        .insert(rule);
                }
                other => logw!("Config: line {line_no}: unknown key '{other}' ignored"),
            }
        }

        if let Some(rules) = custom_categories {
            opts.categories = rules;
        }
        Ok(opts)
    }

    pub fn to_config_string(&self) -> String {
        let mut s = s!();
        s.push_str(&format!("recipes={}\n", self.recipes_path.display()));
        s.push_str(&format!("top_n={}\n", self.top_n));
        s.push_str(&format!("least_n={}\n", self.least_n));
        s.push_str(&format!("min_shared={}\n", self.min_shared));
        for rule in self.categories.iter() {
            s.push_str(&format!("{CATEGORY_PREFIX}{}={}\n", rule.name, rule.keywords().join(",")));
        }
        s
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_config_string())?;
        Ok(())
    }
}

fn config_err(line: usize, reason: String) -> ExplorerError {
    ExplorerError::Config { line, reason }
}

fn parse_count(line: usize, key: &str, val: &str, range: RangeInclusive<usize>) -> Result<usize> {
    let n: usize = val
        .parse()
        .map_err(|_| config_err(line, format!("{key} must be a non-negative integer, got '{val}'")))?;
    if n < *range.start() {
        return Err(config_err(line, format!("{key} must be at least {}", range.start())));
    }
    if n > *range.end() {
        return Err(config_err(line, format!("{key} must be at most {}", range.end())));
    }
    Ok(n)
}

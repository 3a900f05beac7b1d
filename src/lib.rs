// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod dataset;
pub mod error;
pub mod gui;
pub mod query;
pub mod recipe;
pub mod store;

pub use cache::{ContentKey, DatasetCache, FrequencyMemo, LoadedDataset};
pub use config::{CategoryRule, CategoryRules, ExplorerOptions};
pub use core::normalize_ingredient;
pub use dataset::{Dataset, DatasetLoader, LoadReport};
pub use error::{ExplorerError, Result};
pub use query::{CategoryCounts, SimilarRecipe};
pub use recipe::{CanonicalRecipe, FeatureBuilder, RawRecipeRow};

// src/config/mod.rs
pub mod categories;
pub mod consts;
pub mod options;

pub use categories::{CategoryRule, CategoryRules};
pub use options::ExplorerOptions;

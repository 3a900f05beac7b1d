// src/core/mod.rs

pub mod normalize;

pub use normalize::normalize_ingredient;

// src/gui/components/mod.rs
pub mod categories;
pub mod frequency;
pub mod ingredient_panel;
pub mod recipe_table;
pub mod search;
pub mod sections;
pub mod similar;
pub mod source_bar;

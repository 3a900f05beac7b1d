// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "explorer.cfg";

// Input
pub const DEFAULT_RECIPES_FILE: &str = "recipes.csv";
pub const CSV_SEP: char = ',';
pub const TSV_SEP: char = '\t';

// Query defaults
pub const DEFAULT_TOP_N: usize = 20;
pub const DEFAULT_LEAST_N: usize = 5;
pub const DEFAULT_MIN_SHARED: usize = 1;

// Widget bounds
pub const LEAST_N_MAX: usize = 20;
pub const TOP_N_MAX: usize = 200;

// Built-in categories
pub const FISH: &str = "fish";
pub const MEAT: &str = "meat";

pub const FISH_KEYWORDS: &[&str] = &[
    "poisson", "saumon", "merlu", "cabillaud", "truite", "thon", "bar", "maquereau",
    "dorade", "sole", "églefin", "sardine", "morue", "turbot", "lieu",
];

pub const MEAT_KEYWORDS: &[&str] = &[
    "viande", "poulet", "boeuf", "volaille", "steak", "entrecôte", "porc", "cochon",
    "dinde", "saucisse", "lapin",
];

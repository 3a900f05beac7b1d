// src/store.rs
//
// Reads the scraper's recipe export into raw rows. Columns are matched by
// header name, so column order and extra columns do not matter.

use std::{fs, path::Path};

use crate::config::consts::CSV_SEP;
use crate::csv::{parse_rows, split_headers};
use crate::error::Result;
use crate::recipe::RawRecipeRow;

pub const COL_ID: &str = "recipe_id";
pub const COL_NAME: &str = "recipe_name";
pub const COL_INGREDIENTS: &str = "recipe_ingredients";
pub const COL_DESCRIPTION: &str = "recipe_description";
pub const COL_NUTRISCORE: &str = "recipe_nutriscore";
pub const COL_STEPS: &str = "recipe_reproduction_steps";

struct ColumnMap {
    id: Option<usize>,
    name: Option<usize>,
    ingredients: Option<usize>,
    description: Option<usize>,
    nutriscore: Option<usize>,
    steps: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &[String]) -> Self {
        let col = |name: &str| headers.iter().position(|h| h == name);
        Self {
            id: col(COL_ID),
            name: col(COL_NAME),
            ingredients: col(COL_INGREDIENTS),
            description: col(COL_DESCRIPTION),
            nutriscore: col(COL_NUTRISCORE),
            steps: col(COL_STEPS),
        }
    }
}

// Blank cells count as absent, like a short row.
fn cell(row: &[String], ix: Option<usize>) -> Option<String> {
    ix.and_then(|i| row.get(i))
        .filter(|v| !v.trim().is_empty())
        .cloned()
}

/// Map a header row + data rows onto raw recipe rows.
/// Missing columns, short rows and blank cells give `None`.
pub fn raw_rows_from_table(headers: &[String], rows: &[Vec<String>]) -> Vec<RawRecipeRow> {
    let cols = ColumnMap::from_headers(headers);

    if cols.ingredients.is_none() {
        logw!("Store: no '{COL_INGREDIENTS}' column; every row will be rejected");
    }
    if cols.id.is_none() {
        logw!("Store: no '{COL_ID}' column; every row will be dropped");
    }

    rows.iter()
        .map(|r| RawRecipeRow {
            recipe_id: cell(r, cols.id),
            recipe_name: cell(r, cols.name).unwrap_or_default(),
            recipe_ingredients: cell(r, cols.ingredients),
            recipe_description: cell(r, cols.description),
            recipe_nutriscore: cell(r, cols.nutriscore),
            recipe_reproduction_steps: cell(r, cols.steps),
        })
        .collect()
}

pub fn raw_rows_from_str(text: &str) -> Result<Vec<RawRecipeRow>> {
    let (headers, rows) = split_headers(parse_rows(text, CSV_SEP))?;
    Ok(raw_rows_from_table(&headers, &rows))
}

/// Read a recipe CSV export from disk.
pub fn load_raw_rows(path: &Path) -> Result<Vec<RawRecipeRow>> {
    let text = fs::read_to_string(path)?;
    let rows = raw_rows_from_str(&text)?;
    logf!("Store: read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

// tests/csv_store_config.rs
use std::fs;
use std::path::PathBuf;

use recipe_explorer::config::{CategoryRules, ExplorerOptions};
use recipe_explorer::dataset::DatasetLoader;
use recipe_explorer::error::ExplorerError;
use recipe_explorer::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("recipe_explorer_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const EXPORT: &str = "\u{feff}recipe_name,recipe_id,recipe_ingredients,recipe_nutriscore,extra\r\n\
Poulet basquaise,10,\"Poulet (bio) - 4 cuisses\r\nPoivron\r\nTomate, concassée\",B,x\r\n\
\"Saumon \"\"gravlax\"\"\",20,\"Saumon\nAneth\",A,y\r\n";

#[test]
fn export_maps_columns_by_header() {
    let rows = store::raw_rows_from_str(EXPORT).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].recipe_id.as_deref(), Some("10"));
    assert_eq!(rows[0].recipe_name, "Poulet basquaise");
    assert_eq!(rows[0].recipe_nutriscore.as_deref(), Some("B"));
    assert_eq!(rows[0].recipe_description, None);
    assert_eq!(rows[1].recipe_name, "Saumon \"gravlax\"");
    assert_eq!(rows[1].recipe_ingredients.as_deref(), Some("Saumon\nAneth"));
}

#[test]
fn crlf_inside_quotes_still_splits_cleanly() {
    let rows = store::raw_rows_from_str(EXPORT).unwrap();
    let ds = recipe_explorer::dataset::load(&rows);
    let r = ds.get(10).unwrap();
    let names: Vec<&str> = r.named_ingredients().collect();
    assert_eq!(names, ["poulet", "poivron", "tomate"]);
}

#[test]
fn missing_ingredient_column_rejects_rows() {
    let rows = store::raw_rows_from_str("recipe_id,recipe_name\n1,a\n").unwrap();
    assert_eq!(rows[0].recipe_ingredients, None);
    assert!(recipe_explorer::dataset::load(&rows).is_empty());
}

#[test]
fn blank_ingredient_cell_rejects_the_row() {
    let rows = store::raw_rows_from_str("recipe_id,recipe_name,recipe_ingredients\n1,a,\n2,b,  \n3,c,Riz\n").unwrap();
    assert_eq!(rows[0].recipe_ingredients, None);
    assert_eq!(rows[1].recipe_ingredients, None);

    let (ds, report) = DatasetLoader::new(CategoryRules::default()).load_with_report(&rows);
    assert!(!ds.contains(1));
    assert!(!ds.contains(2));
    assert!(ds.contains(3));
    let rejected: Vec<usize> = report.rejected.iter().map(|(ix, _)| *ix).collect();
    assert_eq!(rejected, [0, 1]);
}

#[test]
fn empty_input_is_a_csv_error() {
    assert!(matches!(store::raw_rows_from_str(""), Err(ExplorerError::Csv(_))));
}

#[test]
fn load_from_disk() {
    let dir = tmp_dir("store");
    let path = dir.join("recipes.csv");
    fs::write(&path, EXPORT).unwrap();
    assert_eq!(store::load_raw_rows(&path).unwrap().len(), 2);

    let missing = store::load_raw_rows(&dir.join("nope.csv"));
    assert!(matches!(missing, Err(ExplorerError::Io(_))));
}

#[test]
fn config_defaults_and_overrides() {
    let opts = ExplorerOptions::parse("").unwrap();
    assert_eq!(opts, ExplorerOptions::default());
    assert_eq!((opts.top_n, opts.least_n, opts.min_shared), (20, 5, 1));

    let text = "# comment\nrecipes = data/r.csv\ntop_n=7\nmin_shared = 2\ncategory.veggie = Courgette, poivron\nunknown=1\n";
    let opts = ExplorerOptions::parse(text).unwrap();
    assert_eq!(opts.recipes_path, PathBuf::from("data/r.csv"));
    assert_eq!(opts.top_n, 7);
    assert_eq!(opts.least_n, 5);
    assert_eq!(opts.min_shared, 2);
    // custom categories replace the built-in pair
    assert_eq!(opts.categories.names().collect::<Vec<_>>(), ["veggie"]);
    assert_eq!(opts.categories.get("veggie").unwrap().keywords(), ["courgette", "poivron"]);
}

#[test]
fn config_errors_carry_line_numbers() {
    let err = ExplorerOptions::parse("top_n=5\ntop_n=0\n").unwrap_err();
    assert!(matches!(err, ExplorerError::Config { line: 2, .. }));

    let err = ExplorerOptions::parse("least_n=-1").unwrap_err();
    assert!(matches!(err, ExplorerError::Config { line: 1, .. }));

    let err = ExplorerOptions::parse("\n\njust text").unwrap_err();
    assert!(matches!(err, ExplorerError::Config { line: 3, .. }));

    let err = ExplorerOptions::parse("category.fish=").unwrap_err();
    assert!(matches!(err, ExplorerError::Config { line: 1, .. }));
}

#[test]
fn config_save_then_load() {
    let dir = tmp_dir("config");
    let path = dir.join("nested").join("explorer.cfg");

    assert_eq!(ExplorerOptions::load(&path).unwrap(), ExplorerOptions::default());

    let mut opts = ExplorerOptions::default();
    opts.top_n = 12;
    opts.recipes_path = PathBuf::from("elsewhere.csv");
    opts.save(&path).unwrap();

    assert_eq!(ExplorerOptions::load(&path).unwrap(), opts);
}

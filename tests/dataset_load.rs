// tests/dataset_load.rs
use recipe_explorer::config::CategoryRules;
use recipe_explorer::dataset::{self, DatasetLoader};
use recipe_explorer::recipe::RawRecipeRow;

fn row(id: &str, name: &str, ingredients: &str) -> RawRecipeRow {
    RawRecipeRow::new(id, name, ingredients)
}

#[test]
fn first_duplicate_wins_and_bad_ids_drop() {
    let rows = vec![
        row("1", "first", "Riz"),
        row("1", "second", "Pâtes"),
        row("abc", "bad", "Sel"),
    ];
    let ds = dataset::load(&rows);

    assert_eq!(ds.len(), 1);
    let r = ds.get(1).unwrap();
    assert_eq!(r.recipe_name(), "first");
    assert!(r.has_ingredient("riz"));
}

#[test]
fn iteration_follows_input_order() {
    let rows = vec![row("30", "c", "Riz"), row("10", "a", "Sel"), row("20", "b", "Thym")];
    let ids: Vec<i64> = dataset::load(&rows).ids().collect();
    assert_eq!(ids, [30, 10, 20]);
}

#[test]
fn load_is_deterministic() {
    let rows = vec![
        row("3", "x", "Riz\nSel"),
        row("1", "y", "Poulet (bio)\nRiz"),
        row("3", "dup", "Thym"),
        row("n/a", "z", "Sel"),
        row("2.0", "w", "Saumon"),
    ];
    let a = dataset::load(&rows);
    let b = dataset::load(&rows);
    assert_eq!(a, b);
    assert_eq!(a.ids().collect::<Vec<_>>(), b.ids().collect::<Vec<_>>());
    assert_eq!(a.ids().collect::<Vec<_>>(), [3, 1, 2]);
}

#[test]
fn rows_without_ingredients_are_reported_not_defaulted() {
    let rows = vec![
        row("1", "ok", "Riz"),
        RawRecipeRow { recipe_id: Some("2".into()), recipe_name: "broken".into(), ..RawRecipeRow::default() },
        RawRecipeRow { recipe_id: None, recipe_name: "no id".into(), ..RawRecipeRow::default() },
        row("1", "dup", "Sel"),
    ];
    let (ds, report) = DatasetLoader::new(CategoryRules::default()).load_with_report(&rows);

    assert_eq!(ds.len(), 1);
    assert!(!ds.contains(2));
    assert_eq!(report.total_rows, 4);
    assert_eq!(report.loaded, 1);
    assert_eq!(report.dropped_bad_id, 1);
    assert_eq!(report.dropped_duplicate, 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].0, 1);
}

#[test]
fn rejected_first_occurrence_still_claims_the_id() {
    let rows = vec![
        RawRecipeRow { recipe_id: Some("7".into()), ..RawRecipeRow::default() },
        row("7", "later", "Riz"),
    ];
    assert!(dataset::load(&rows).is_empty());
}

#[test]
fn dataset_keeps_its_rules() {
    let ds = DatasetLoader::new(CategoryRules::empty()).load(&[row("1", "x", "Saumon")]);
    assert!(ds.rules().is_empty());
    assert!(ds.get(1).unwrap().categories().is_empty());
}

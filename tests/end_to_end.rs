// tests/end_to_end.rs
use recipe_explorer::dataset;
use recipe_explorer::query;
use recipe_explorer::recipe::RawRecipeRow;
use recipe_explorer::store;

#[test]
fn two_recipes_share_riz() {
    let rows = vec![
        RawRecipeRow::new("10", "A", "Poulet (bio)\nRiz\nSel"),
        RawRecipeRow::new("20", "B", "Saumon\nRiz\nCitron"),
    ];
    let ds = dataset::load(&rows);
    assert_eq!(ds.len(), 2);

    let similar = query::find_similar(&ds, 10, 1).unwrap();
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0].recipe.recipe_id(), 20);
    assert_eq!(similar[0].shared_count, 1);

    let central = ds.get(10).unwrap();
    let shared: Vec<&String> = similar[0].recipe.ingredients().intersection(central.ingredients()).collect();
    assert_eq!(shared, ["riz"]);
}

#[test]
fn same_scenario_from_a_csv_export() {
    let text = "recipe_id,recipe_name,recipe_ingredients\n\
10,A,\"Poulet (bio)\nRiz\nSel\"\n\
20,B,\"Saumon\nRiz\nCitron\"\n";
    let ds = dataset::load(&store::raw_rows_from_str(text).unwrap());

    let got: Vec<(i64, usize)> = query::find_similar(&ds, 10, 1)
        .unwrap()
        .iter()
        .map(|s| (s.recipe.recipe_id(), s.shared_count))
        .collect();
    assert_eq!(got, [(20, 1)]);

    let counts = query::category_counts(&ds);
    assert_eq!((counts.fish(), counts.meat()), (1, 1));
    assert_eq!(query::ingredient_frequency(&ds, 1).unwrap(), [("riz".to_string(), 2)]);
}

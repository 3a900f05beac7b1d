// tests/feature_builder.rs
use recipe_explorer::config::{CategoryRule, CategoryRules};
use recipe_explorer::error::ExplorerError;
use recipe_explorer::recipe::{FeatureBuilder, RawRecipeRow};

#[test]
fn ingredient_set_dedups_and_counts_non_empty() {
    let b = FeatureBuilder::default();
    let raw = RawRecipeRow::new("1", "Riz au sel", "Riz (basmati)\nriz - 200g\n\n(facultatif)\nSel");
    let r = b.build(&raw).unwrap();

    let names: Vec<&str> = r.ingredients().iter().map(String::as_str).collect();
    assert_eq!(names, ["riz", "", "sel"]);
    assert_eq!(r.num_ingredients(), 2);
    assert_eq!(r.recipe_id(), 1);
    assert_eq!(r.recipe_name(), "Riz au sel");
}

#[test]
fn missing_ingredients_are_rejected() {
    let b = FeatureBuilder::default();
    let raw = RawRecipeRow {
        recipe_id: Some("5".into()),
        recipe_name: "Vide".into(),
        ..RawRecipeRow::default()
    };
    let err = b.build(&raw).unwrap_err();
    assert!(matches!(err, ExplorerError::MalformedInput { ref id, .. } if id == "5"));
}

#[test]
fn empty_text_is_not_missing() {
    let r = FeatureBuilder::default().build(&RawRecipeRow::new("2", "Rien", "")).unwrap();
    assert_eq!(r.num_ingredients(), 0);
    assert!(r.categories().is_empty());
}

#[test]
fn non_numeric_id_is_malformed_for_standalone_build() {
    let err = FeatureBuilder::default().build(&RawRecipeRow::new("abc", "x", "Riz")).unwrap_err();
    assert!(matches!(err, ExplorerError::MalformedInput { .. }));
}

#[test]
fn fish_and_meat_flags() {
    let b = FeatureBuilder::default();

    let both = b.build(&RawRecipeRow::new("1", "Surf", "SAUMON fumé\nPoulet")).unwrap();
    assert!(both.contains_fish());
    assert!(both.contains_meat());
    assert_eq!(both.categories(), ["fish", "meat"]);

    let veg = b.build(&RawRecipeRow::new("2", "Veg", "Courgette\nPoivron")).unwrap();
    assert!(!veg.contains_fish());
    assert!(!veg.contains_meat());

    // substring match inside a longer name
    let sub = b.build(&RawRecipeRow::new("3", "Dos", "Dos de cabillaud")).unwrap();
    assert!(sub.contains_fish());
}

#[test]
fn custom_rules_drive_categories() {
    let mut rules = CategoryRules::empty();
    rules.insert(CategoryRule::new("veggie", ["Courgette", "poivron"]));
    let b = FeatureBuilder::new(rules);

    let r = b.build(&RawRecipeRow::new("1", "Ratatouille", "Courgettes\nAubergine")).unwrap();
    assert!(r.in_category("veggie"));
    assert!(!r.contains_fish());
}

#[test]
fn passthrough_fields_survive() {
    let raw = RawRecipeRow {
        recipe_description: Some("Un classique.".into()),
        recipe_nutriscore: Some("B".into()),
        recipe_reproduction_steps: Some("Cuire.".into()),
        ..RawRecipeRow::new("9", "Classique", "Riz")
    };
    let r = FeatureBuilder::default().build(&raw).unwrap();
    assert_eq!(r.description(), Some("Un classique."));
    assert_eq!(r.nutriscore(), Some("B"));
    assert_eq!(r.reproduction_steps(), Some("Cuire."));
}

// src/gui/components/categories.rs
//
// Per-category counts, each with a "random recipe" button.

use eframe::egui;

use crate::cache::LoadedDataset;
use crate::gui::app::App;
use crate::query;

use super::recipe_table;

pub fn draw(ui: &mut egui::Ui, app: &mut App, loaded: &LoadedDataset) {
    let dataset = &loaded.dataset;
    let counts = query::category_counts(dataset);

    egui::Grid::new("category_counts").num_columns(3).show(ui, |ui| {
        for (name, n) in counts.iter() {
            ui.strong(name);
            ui.label(format!("{n} recipe(s)"));
            if ui.button(format!("Random {name} recipe")).clicked() {
                let pick = query::random_in_category(dataset, name, &mut rand::rng()).map(|r| r.recipe_id());
                logd!("UI: random {} → {:?}", name, pick);
                app.random_picks.insert(s!(name), pick);
            }
            ui.end_row();
        }
    });

    for (name, _) in counts.iter() {
        match app.random_picks.get(name) {
            Some(Some(id)) => {
                if let Some(recipe) = dataset.get(*id) {
                    ui.label(format!("Random {name} recipe:"));
                    recipe_table::draw(ui, &format!("random_{name}"), [recipe], 60.0);
                }
            }
            Some(None) => {
                ui.weak(format!("No {name} recipe found."));
            }
            None => {}
        }
    }
}

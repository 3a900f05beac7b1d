// src/gui/components/search.rs

use eframe::egui;

use crate::cache::LoadedDataset;
use crate::gui::app::App;
use crate::query;

use super::recipe_table;

pub fn draw_search(ui: &mut egui::Ui, app: &mut App, loaded: &LoadedDataset) {
    ui.horizontal(|ui| {
        ui.label("Ingredient:");
        ui.add(egui::TextEdit::singleline(&mut app.search_term).hint_text("e.g. poulet"));
    });

    let term = app.search_term.trim();
    if term.is_empty() {
        return;
    }

    let hits = query::search_by_ingredient_substring(&loaded.dataset, term);
    ui.label(format!("{} recipe(s) contain \"{}\"", hits.len(), term));
    recipe_table::draw(ui, "search_table", hits, 240.0);
}

pub fn draw_filter(ui: &mut egui::Ui, app: &mut App, loaded: &LoadedDataset) {
    if app.selected.is_empty() {
        ui.weak("Pick ingredients in the left panel.");
        return;
    }

    ui.label(format!("Selected: {}", app.selected.join(", ")));
    let hits = query::filter_by_all_ingredients(&loaded.dataset, &app.selected);
    ui.label(format!("{} recipe(s) contain all of them", hits.len()));
    recipe_table::draw(ui, "filter_table", hits, 240.0);
}

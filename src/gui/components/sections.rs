// src/gui/components/sections.rs
//
// The explorer page, top to bottom. Each section reads the shared dataset
// and keeps its own widget values on `App`.

use eframe::egui;

use crate::cache::LoadedDataset;
use crate::gui::app::App;

use super::{categories, frequency, recipe_table, search, similar};

pub fn draw(ui: &mut egui::Ui, app: &mut App, loaded: &LoadedDataset) {
    section(ui, "Search by ingredient", |ui| search::draw_search(ui, app, loaded));
    section(ui, "Recipes with all selected ingredients", |ui| search::draw_filter(ui, app, loaded));
    section(ui, "Most used ingredients", |ui| frequency::draw_top(ui, app, loaded));
    section(ui, "Fewest ingredients", |ui| frequency::draw_least(ui, app, loaded));
    section(ui, "Categories", |ui| categories::draw(ui, app, loaded));
    section(ui, "Similar recipes", |ui| similar::draw(ui, app, loaded));

    ui.checkbox(&mut app.show_dataset, "Show dataset");
    if app.show_dataset {
        recipe_table::draw(ui, "dataset_table", loaded.dataset.iter(), 400.0);
    }
}

fn section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.heading(title);
    ui.add_space(4.0);
    body(ui);
    ui.add_space(8.0);
    ui.separator();
}

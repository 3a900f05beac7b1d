// src/gui/components/similar.rs

use eframe::egui;

use crate::cache::LoadedDataset;
use crate::gui::app::App;
use crate::query;

use super::recipe_table;

pub fn draw(ui: &mut egui::Ui, app: &mut App, loaded: &LoadedDataset) {
    let dataset = &loaded.dataset;

    let selected_text = app
        .similar_id
        .and_then(|id| dataset.get(id))
        .map(|r| format!("{} ({})", r.recipe_name(), r.recipe_id()))
        .unwrap_or_else(|| s!("Choose a recipe"));

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("similar_central_recipe")
            .selected_text(selected_text)
            .width(320.0)
            .show_ui(ui, |ui| {
                for r in dataset.iter() {
                    let label = format!("{} ({})", r.recipe_name(), r.recipe_id());
                    ui.selectable_value(&mut app.similar_id, Some(r.recipe_id()), label);
                }
            });
        ui.label("min. shared:");
        ui.add(egui::DragValue::new(&mut app.min_shared).range(0..=50));
    });

    let Some(central_id) = app.similar_id else {
        return;
    };

    match query::find_similar(dataset, central_id, app.min_shared) {
        Ok(similar) => {
            ui.label(format!("{} recipe(s) share at least {} ingredient(s)", similar.len(), app.min_shared));
            recipe_table::draw(ui, "similar_table", similar, 240.0);
        }
        Err(e) => {
            loge!("Similar: {}", e);
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }
    }
}

// src/gui/components/frequency.rs
//
// Ingredient ranking as horizontal bars, and the fewest-ingredients table.

use eframe::egui;

use crate::cache::LoadedDataset;
use crate::config::consts::{LEAST_N_MAX, TOP_N_MAX};
use crate::gui::app::App;
use crate::query;

use super::recipe_table;

pub fn draw_top(ui: &mut egui::Ui, app: &mut App, loaded: &LoadedDataset) {
    ui.horizontal(|ui| {
        ui.label("Show top");
        ui.add(egui::DragValue::new(&mut app.top_n).range(1..=TOP_N_MAX));
    });

    // Recomputed only when the dataset or top_n changes.
    let ranked = match app.frequencies.get_or_compute(loaded, app.top_n) {
        Ok(r) => r,
        Err(e) => {
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
            return;
        }
    };
    let Some(max) = ranked.first().map(|(_, n)| *n as f32) else {
        ui.weak("No ingredients.");
        return;
    };

    let label_w = 160.0;
    egui::Grid::new("frequency_bars").num_columns(2).striped(true).show(ui, |ui| {
        for (name, count) in ranked.iter() {
            let label = if name.is_empty() { egui::RichText::new("(blank)").weak() } else { egui::RichText::new(name) };
            ui.add_sized([label_w, 18.0], egui::Label::new(label).truncate());
            ui.add(
                egui::ProgressBar::new(*count as f32 / max)
                    .desired_width(ui.available_width().max(120.0))
                    .text(count.to_string()),
            );
            ui.end_row();
        }
    });
}

pub fn draw_least(ui: &mut egui::Ui, app: &mut App, loaded: &LoadedDataset) {
    ui.add(egui::Slider::new(&mut app.least_n, 1..=LEAST_N_MAX).text("recipes"));
    let least = query::least_ingredients(&loaded.dataset, app.least_n);
    recipe_table::draw(ui, "least_table", least, 200.0);
}

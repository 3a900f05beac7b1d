// src/gui/components/source_bar.rs
//
// Recipes file field + Reload / Copy / Save settings.

use eframe::egui;

use crate::config::consts::CSV_SEP;
use crate::csv::rows_to_string;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Recipes:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.recipes_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0),
        );
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Reload").clicked() || submitted {
            logf!("UI: Reload {}", app.recipes_path_text);
            app.reload();
        }

        if ui.button("Copy").clicked() {
            match app.loaded.clone() {
                Some(loaded) if !loaded.dataset.is_empty() => {
                    let rows: Vec<Vec<String>> = loaded
                        .dataset
                        .iter()
                        .map(|r| {
                            vec![
                                r.recipe_id().to_string(),
                                s!(r.recipe_name()),
                                r.num_ingredients().to_string(),
                                r.categories().join(" "),
                                r.ingredients_label(),
                            ]
                        })
                        .collect();
                    let txt = rows_to_string(&["id", "name", "count", "categories", "ingredients"], &rows, CSV_SEP);
                    ui.ctx().copy_text(txt);
                    logf!("Copy: {} recipes", rows.len());
                    app.status(format!("Copied {} recipes to clipboard", rows.len()));
                }
                _ => {
                    logd!("Copy: Clicked, but there's nothing to copy");
                    app.status("Nothing to copy");
                }
            }
        }

        if ui.button("Save settings").clicked() {
            app.save_settings();
        }

        if let Some(loaded) = &app.loaded {
            ui.separator();
            ui.weak(format!("{} recipes", loaded.dataset.len()));
        }
    });
}

// src/gui/components/ingredient_panel.rs
//
// Left ingredient list. Clicking toggles an ingredient in the multi-select
// used by the "all of these ingredients" filter; shift-click adds a range.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Ingredients");

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.ingredient_filter)
                .hint_text("narrow list…")
                .desired_width(140.0),
        );
        if ui.button("Clear").clicked() && !app.selected.is_empty() {
            app.selected.clear();
            logf!("UI: Selection cleared");
        }
    });
    ui.weak(format!("{} selected", app.selected.len()));

    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let needle = app.ingredient_filter.trim().to_lowercase();
    let visible: Vec<String> = app
        .all_ingredients
        .iter()
        .filter(|name| needle.is_empty() || name.contains(needle.as_str()))
        .cloned()
        .collect();

    let mut clicked: Option<(usize, bool)> = None;

    egui::ScrollArea::vertical()
        .id_salt("ingredients_panel_scroll")
        .show_rows(ui, 18.0, visible.len(), |ui, range| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for idx in range {
                let name = &visible[idx];
                let is_selected = app.selected.contains(name);
                if ui.selectable_label(is_selected, name).clicked() {
                    let shift = ui.input(|i| i.modifiers.shift);
                    clicked = Some((idx, shift));
                }
            }
        });

    if let Some((idx, shift)) = clicked {
        match (shift, app.last_clicked) {
            (true, Some(last)) if last < visible.len() => {
                let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                for name in &visible[lo..=hi] {
                    if !app.selected.contains(name) {
                        app.selected.push(name.clone());
                    }
                }
            }
            _ => app.toggle_selected(&visible[idx]),
        }
        app.last_clicked = Some(idx);
        logf!("UI: Selection changed ({} ingredients): {:?}", app.selected.len(), &app.selected);
    }
}

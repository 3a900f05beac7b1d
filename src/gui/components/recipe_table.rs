// src/gui/components/recipe_table.rs
//
// Shared read-only recipe table. Every section that lists recipes draws
// through here; `salt` keeps each table's column state apart.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder, TableRow};

use crate::query::SimilarRecipe;
use crate::recipe::CanonicalRecipe;

const ROW_H: f32 = 20.0;

/// One table row; `shared` is only set for similarity results.
pub struct Row<'a> {
    pub recipe: &'a CanonicalRecipe,
    pub shared: Option<usize>,
}

impl<'a> From<&'a CanonicalRecipe> for Row<'a> {
    fn from(recipe: &'a CanonicalRecipe) -> Self {
        Self { recipe, shared: None }
    }
}

impl<'a> From<SimilarRecipe<'a>> for Row<'a> {
    fn from(s: SimilarRecipe<'a>) -> Self {
        Self { recipe: s.recipe, shared: Some(s.shared_count) }
    }
}

pub fn draw<'a, I, R>(ui: &mut egui::Ui, salt: &str, rows: I, max_height: f32)
where
    I: IntoIterator<Item = R>,
    R: Into<Row<'a>>,
{
    let rows: Vec<Row<'a>> = rows.into_iter().map(Into::into).collect();
    if rows.is_empty() {
        ui.weak("No recipes.");
        return;
    }
    let with_shared = rows.iter().any(|r| r.shared.is_some());

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut table = TableBuilder::new(ui)
        .id_salt(salt)
        .striped(true)
        .vscroll(true)
        .max_scroll_height(max_height)
        .column(Column::initial(60.0).at_least(40.0).resizable(true).clip(true))
        .column(Column::initial(260.0).at_least(80.0).resizable(true).clip(true));
    if with_shared {
        table = table.column(Column::initial(60.0).at_least(40.0).clip(true));
    }
    table = table
        .column(Column::initial(50.0).at_least(40.0).clip(true))
        .column(Column::initial(90.0).at_least(60.0).resizable(true).clip(true))
        .column(Column::remainder().at_least(120.0).clip(true));

    let mut headers = vec!["Id", "Name"];
    if with_shared {
        headers.push("Shared");
    }
    headers.extend(["Count", "Categories", "Ingredients"]);

    table
        .header(24.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.label(RichText::new(*h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let r = &rows[row.index()];
                let recipe = r.recipe;

                numeric_cell(&mut row, recipe.recipe_id().to_string());
                text_cell(&mut row, s!(recipe.recipe_name()));
                if with_shared {
                    numeric_cell(&mut row, r.shared.unwrap_or(0).to_string());
                }
                numeric_cell(&mut row, recipe.num_ingredients().to_string());
                text_cell(&mut row, recipe.categories().join(", "));
                text_cell(&mut row, recipe.ingredients_label());
            });
        });
}

fn numeric_cell(row: &mut TableRow<'_, '_>, text: String) {
    row.col(|ui| {
        ui.centered_and_justified(|ui| { ui.label(text); });
    });
}

fn text_cell(row: &mut TableRow<'_, '_>, text: String) {
    row.col(|ui| {
        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
    });
}

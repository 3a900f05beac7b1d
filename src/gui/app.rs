// src/gui/app.rs
use std::{collections::HashMap, error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    cache::{DatasetCache, FrequencyMemo, LoadedDataset},
    config::ExplorerOptions,
    query, store,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let cfg_path = ExplorerOptions::default_path();
    let settings = match ExplorerOptions::load(&cfg_path) {
        Ok(s) => s,
        Err(e) => {
            loge!("Config: {} unusable ({}), using defaults", cfg_path.display(), e);
            ExplorerOptions::default()
        }
    };

    eframe::run_native(
        "Recipe Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(settings, cfg_path)))),
    )?;
    Ok(())
}

pub struct App {
    pub settings: ExplorerOptions,
    pub settings_path: PathBuf,

    // recipes path as typed; applied on Reload
    pub recipes_path_text: String,

    pub cache: DatasetCache,
    pub frequencies: FrequencyMemo,
    pub loaded: Option<LoadedDataset>,
    pub all_ingredients: Vec<String>,

    // widget state
    pub search_term: String,
    pub ingredient_filter: String,
    pub selected: Vec<String>,
    pub last_clicked: Option<usize>,
    pub top_n: usize,
    pub least_n: usize,
    pub min_shared: usize,
    pub similar_id: Option<i64>,
    /// category → last pick; `None` once a pick found nothing
    pub random_picks: HashMap<String, Option<i64>>,
    pub show_dataset: bool,

    pub status: String,
}

impl App {
    pub fn new(settings: ExplorerOptions, settings_path: PathBuf) -> Self {
        let mut app = Self {
            recipes_path_text: settings.recipes_path.to_string_lossy().into_owned(),
            top_n: settings.top_n,
            least_n: settings.least_n,
            min_shared: settings.min_shared,
            settings,
            settings_path,
            cache: DatasetCache::new(),
            frequencies: FrequencyMemo::new(),
            loaded: None,
            all_ingredients: Vec::new(),
            search_term: s!(),
            ingredient_filter: s!(),
            selected: Vec::new(),
            last_clicked: None,
            similar_id: None,
            random_picks: HashMap::new(),
            show_dataset: false,
            status: s!("Idle"),
        };
        app.reload();
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Re-read the recipes file. The dataset is only rebuilt when the file
    /// content (or the category rules) changed since the last load.
    pub fn reload(&mut self) {
        self.settings.recipes_path = PathBuf::from(self.recipes_path_text.trim());
        let path = self.settings.recipes_path.clone();

        let rows = match store::load_raw_rows(&path) {
            Ok(rows) => rows,
            Err(e) => {
                loge!("Load: {}: {}", path.display(), e);
                self.status(format!("Could not read {}: {e}", path.display()));
                return;
            }
        };

        let loaded = self.cache.get_or_load(&rows, &self.settings.categories);
        let changed = self.loaded.as_ref().map(|l| l.key) != Some(loaded.key);

        if changed {
            self.all_ingredients = query::all_ingredients(&loaded.dataset);
            self.selected.retain(|s| self.all_ingredients.binary_search(s).is_ok());
            self.random_picks.clear();
            if self.similar_id.is_some_and(|id| !loaded.dataset.contains(id)) {
                self.similar_id = None;
            }
        }

        let report = &loaded.report;
        self.status(format!(
            "Loaded {} recipes from {} ({} rows, {} skipped)",
            report.loaded,
            path.display(),
            report.total_rows,
            report.total_rows - report.loaded
        ));
        self.loaded = Some(loaded);
    }

    /// Write current widget values back to the settings file.
    pub fn save_settings(&mut self) {
        self.settings.top_n = self.top_n;
        self.settings.least_n = self.least_n;
        self.settings.min_shared = self.min_shared;

        match self.settings.save(&self.settings_path) {
            Ok(()) => {
                logf!("Config: saved {}", self.settings_path.display());
                let msg = format!("Settings saved to {}", self.settings_path.display());
                self.status(msg);
            }
            Err(e) => {
                loge!("Config: save failed: {}", e);
                self.status(format!("Save failed: {e}"));
            }
        }
    }

    pub fn toggle_selected(&mut self, name: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == name) {
            self.selected.remove(pos);
        } else {
            self.selected.push(s!(name));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("source_bar").show(ctx, |ui| {
            crate::gui::components::source_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::SidePanel::left("ingredients")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                crate::gui::components::ingredient_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(loaded) = self.loaded.clone() else {
                ui.label("No recipes loaded. Set the recipes file above and press Reload.");
                return;
            };

            egui::ScrollArea::vertical()
                .id_salt("explorer_page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    crate::gui::components::sections::draw(ui, self, &loaded);
                });
        });
    }
}

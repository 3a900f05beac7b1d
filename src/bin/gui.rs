// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use recipe_explorer::config::consts::{LOG_FILE, STORE_DIR};
use recipe_explorer::{gui, log};

fn main() {
    if let Err(e) = log::init_file_logging(&Path::new(STORE_DIR).join(LOG_FILE)) {
        eprintln!("Logging disabled: {}", e);
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Recipe Explorer")
            .with_inner_size([1180.0, 820.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

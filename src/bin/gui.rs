// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::{IconData, ViewportBuilder};
use sheetfolio::{
    config::{consts::DEFAULT_FEEDS_FILE, options::FeedConfig, state::AppState},
    gui, loge,
};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/sheetfolio.png"
    )))
    .ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let mut state = AppState::default();
    match FeedConfig::load_or_default(Path::new(DEFAULT_FEEDS_FILE)) {
        Ok(feeds) => state.options.feeds = feeds,
        Err(e) => {
            loge!("Config: {}", e);
            eprintln!("Bad {}: {}", DEFAULT_FEEDS_FILE, e);
            std::process::exit(1);
        }
    }

    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w, state.gui.window_h]);
    if let Some(icon) = app_icon() {
        // eframe 0.32: icon set via viewport builder
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jourdon Floyd

//! Application entry point wiring the store and egui/eframe to launch the Health Helper UI.

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;
use tracing::info;

use crate::config::AppConfig;
use crate::store::Store;
use crate::ui::HealthHelperApp;

/// Open the data directory and run the main egui event loop until the window closes.
pub fn run(config: AppConfig) -> Result<()> {
    let store = Store::open(&config.data_dir)
        .with_context(|| format!("Failed to open data directory {:?}", config.data_dir))?;
    let start_date = config.start_date;

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Health Helper")
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    info!(data_dir = %store.data_dir().display(), date = %start_date, "starting ui");
    eframe::run_native(
        "Health Helper",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(HealthHelperApp::new(store, start_date)))
        }),
    )
    .map_err(|err| anyhow!("Failed to run the user interface: {err}"))
}

mod error;
mod geometry;
mod store;
mod ui;

use crate::error::Result;
use crate::geometry::Padding;
use crate::ui::app::App;
use eframe::egui;
use std::env;

/// Decoration used when no padding preset is given on the command line.
const DEFAULT_DECORATION: Padding = Padding::new(24, 32, 0, 100);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional first argument: a uniform padding preset for the demo panel.
    let args: Vec<String> = env::args().collect();
    let decoration = match args.get(1).map(|a| a.parse::<i32>()) {
        Some(Ok(p)) => Padding::uniform(p),
        Some(Err(_)) => {
            log::warn!("ignoring non-numeric padding preset {:?}", args[1]);
            DEFAULT_DECORATION
        }
        None => DEFAULT_DECORATION,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Padded Panels",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, decoration)))),
    )?;
    Ok(())
}

//! Per-widget padding storage in egui's id-keyed data map.
//!
//! egui's context carries a generic per-id value store; this module is a
//! thin, fixed-schema user of it. One [`Padding`] record is kept under each
//! widget id, so a later frame (or any caller that never saw the original
//! bounds call) can recompute content bounds without threading the padding
//! parameters forward.

use crate::geometry::Padding;
use eframe::egui;

/// Overwrite the stored padding for `id`.
pub fn set(ctx: &egui::Context, id: egui::Id, padding: Padding) {
    ctx.data_mut(|d| d.insert_temp(id, padding));
}

/// The stored padding for `id`, or [`Padding::ZERO`] if none was ever set.
#[allow(dead_code)]
pub fn get(ctx: &egui::Context, id: egui::Id) -> Padding {
    get_or(ctx, id, Padding::ZERO)
}

/// The stored padding for `id`, or `fallback` if none was ever set.
pub fn get_or(ctx: &egui::Context, id: egui::Id, fallback: Padding) -> Padding {
    ctx.data(|d| d.get_temp(id)).unwrap_or(fallback)
}

//! The `PanelView` trait and the paint context passed to each panel.
//!
//! To add a new demo panel:
//! 1. Create a new file in `ui/panels/`.
//! 2. Implement `PanelView` for your struct.
//! 3. Give it a frame rectangle in `App::update`'s layout pass.

use crate::geometry::Rect;
use eframe::egui;

/// Everything a panel needs to draw itself for one frame.
///
/// Panels receive the egui context as well as the painter so they can reach
/// the per-id padding store during paint.
pub struct PaintCtx<'a> {
    pub ctx: &'a egui::Context,
    pub painter: &'a egui::Painter,
}

/// Trait implemented by every demo panel.
///
/// Each panel owns its own visual state; the orchestrator (`App`) computes a
/// frame rectangle for every panel on every frame and calls `show` on each.
pub trait PanelView {
    /// Display name, used for logging and as the widget-id seed.
    #[allow(dead_code)]
    fn name(&self) -> &str;

    /// Draw the panel into `frame` (window coordinates). Called every frame
    /// by `App::update`.
    fn show(&mut self, paint: &mut PaintCtx<'_>, frame: Rect);
}

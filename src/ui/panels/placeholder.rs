//! Solid-colored placeholder blocks.

use crate::geometry::Rect;
use crate::ui::view::{PaintCtx, PanelView};
use eframe::egui::Color32;

pub struct Placeholder {
    name: String,
    color: Color32,
}

impl Placeholder {
    pub fn new(name: impl Into<String>, color: Color32) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl PanelView for Placeholder {
    fn name(&self) -> &str {
        &self.name
    }

    fn show(&mut self, paint: &mut PaintCtx<'_>, frame: Rect) {
        paint.painter.rect_filled(frame.to_egui(), 0, self.color);
    }
}

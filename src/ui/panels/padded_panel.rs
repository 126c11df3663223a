//! A panel that decorates its content with four-sided padding.
//!
//! The caller hands over either the desired content rectangle (outer bounds
//! grow outward) or the full decorated rectangle (content is inset). Both
//! forms persist the padding in the per-id store, so a later frame can
//! recompute the content rectangle without the original call's arguments.

use crate::geometry::{DecoratedBounds, Padding, Rect};
use crate::store;
use crate::ui::colors;
use crate::ui::view::{PaintCtx, PanelView};
use eframe::egui;

pub struct PaddedPanel {
    name: String,
    id: egui::Id,
    bounds: DecoratedBounds,
    /// Decoration applied on every layout pass when the panel is driven
    /// through [`PanelView::show`].
    decoration: Padding,
}

impl PaddedPanel {
    pub fn new(name: impl Into<String>, decoration: Padding) -> Self {
        let name = name.into();
        let id = egui::Id::new(&name);
        Self {
            name,
            id,
            bounds: DecoratedBounds::default(),
            decoration,
        }
    }

    pub fn outer_bounds(&self) -> Rect {
        self.bounds.outer()
    }

    /// `content` is the desired content area; the panel's outer bounds grow
    /// outward by the padding.
    pub fn set_bounds_with_padding(&mut self, ctx: &egui::Context, content: Rect, padding: Padding) {
        self.bounds = DecoratedBounds::around_content(content, padding);
        store::set(ctx, self.id, padding);
    }

    /// `outer` already includes the padding; the panel's outer bounds are
    /// set exactly and the content is inset.
    pub fn set_bounds_reduced_by_padding(
        &mut self,
        ctx: &egui::Context,
        outer: Rect,
        padding: Padding,
    ) {
        self.bounds = DecoratedBounds::within(outer, padding);
        store::set(ctx, self.id, padding);
    }

    /// The inner rectangle available for content.
    ///
    /// The padding is restored from the store first, so this stays correct
    /// for callers (e.g. a repaint) that never saw the bounds call. Falls
    /// back to the currently held record when the store has no entry.
    pub fn content_bounds(&self, ctx: &egui::Context) -> Rect {
        let padding = store::get_or(ctx, self.id, self.bounds.padding());
        DecoratedBounds::within(self.bounds.outer(), padding).content()
    }

    #[allow(dead_code)]
    pub fn content_width(&self) -> i32 {
        self.bounds.content_width()
    }

    /// Content rectangle computed against this panel's bounds as expressed
    /// in the parent's coordinate space.
    #[allow(dead_code)]
    pub fn content_bounds_in_parent(&self, outer_in_parent: Rect) -> Rect {
        self.bounds.content_in(outer_in_parent)
    }
}

impl PanelView for PaddedPanel {
    fn name(&self) -> &str {
        &self.name
    }

    fn show(&mut self, paint: &mut PaintCtx<'_>, frame: Rect) {
        // The frame is the desired content area; grow outward around it.
        self.set_bounds_with_padding(paint.ctx, frame, self.decoration);

        paint
            .painter
            .rect_filled(self.outer_bounds().to_egui(), 0, *colors::PADDING_FILL);

        let content = self.content_bounds(paint.ctx);
        if !content.is_empty() {
            paint
                .painter
                .rect_filled(content.to_egui(), 0, colors::CONTENT_FILL);
        }
    }
}

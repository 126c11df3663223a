//! An axis-aligned rectangle in integer pixel coordinates.

use eframe::egui;

/// An immutable rectangle: position of the top-left corner plus size.
///
/// Every operation returns a new `Rect`; nothing mutates in place. Width and
/// height may legitimately go negative after inset arithmetic; callers that
/// care must check [`Rect::is_empty`] before painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[allow(dead_code)]
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[allow(dead_code)]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    #[allow(dead_code)]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// The same rectangle moved by `(dx, dy)`.
    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Carve a strip of width `w` off the left edge.
    ///
    /// Returns `(strip, remainder)`. This is the manual-layout primitive the
    /// demo window uses to place its panel columns.
    pub const fn split_left(&self, w: i32) -> (Self, Self) {
        let strip = Self::new(self.x, self.y, w, self.height);
        let rest = Self::new(self.x + w, self.y, self.width - w, self.height);
        (strip, rest)
    }

    // ── egui interop ───────────────────────────────────────────────────────

    pub fn from_egui(r: egui::Rect) -> Self {
        Self::new(
            r.min.x as i32,
            r.min.y as i32,
            r.width() as i32,
            r.height() as i32,
        )
    }

    pub fn to_egui(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.x as f32, self.y as f32),
            egui::vec2(self.width as f32, self.height as f32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_left_carves_strip_and_remainder() {
        let r = Rect::new(10, 20, 100, 50);
        let (strip, rest) = r.split_left(30);
        assert_eq!(strip, Rect::new(10, 20, 30, 50));
        assert_eq!(rest, Rect::new(40, 20, 70, 50));
        assert_eq!(strip.right(), rest.x);
    }

    #[test]
    fn translated_moves_position_only() {
        let r = Rect::new(5, 6, 7, 8);
        assert_eq!(r.translated(100, -6), Rect::new(105, 0, 7, 8));
    }

    #[test]
    fn empty_detection() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(0, 0, 10, -1).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn egui_round_trip() {
        let r = Rect::new(300, 100, 150, 220);
        assert_eq!(Rect::from_egui(r.to_egui()), r);
    }
}

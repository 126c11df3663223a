//! Outer-bounds/content-bounds arithmetic for a padded rectangle.
//!
//! The decorator works with two rectangles at once:
//!
//! ```text
//!              outer()
//!  -----------------------------------
//!  |             top                 |
//!  |   ---------------------------   |
//!  |   |                         |   |
//!  |   |        content()        |  <--- right
//!  |   |                         |   |
//!  |   ---------------------------   |
//!  |             bottom              |
//!  -----------------------------------
//! ```

use crate::geometry::{Padding, Rect};

/// One outer rectangle plus the padding that separates it from its content.
///
/// This is the single canonical representation of a decorated rectangle: the
/// padding record lives here and nowhere else. Content dimensions are plain
/// subtraction and are returned verbatim: a padding larger than the outer
/// bounds yields a negative-size content rect, never an error and never a
/// clamp. That keeps [`DecoratedBounds::around_content`] followed by
/// [`DecoratedBounds::content`] an exact round trip for every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoratedBounds {
    outer: Rect,
    padding: Padding,
}

impl DecoratedBounds {
    /// Decorate a rectangle that represents the desired *content* area: the
    /// outer bounds grow outward by the padding on each side.
    pub const fn around_content(content: Rect, padding: Padding) -> Self {
        let outer = Rect::new(
            content.x - padding.left,
            content.y - padding.top,
            content.width + padding.horizontal(),
            content.height + padding.vertical(),
        );
        Self { outer, padding }
    }

    /// Decorate a rectangle that already represents the *full* decorated
    /// area: the outer bounds are taken exactly as given and the content is
    /// inset by the padding.
    pub const fn within(outer: Rect, padding: Padding) -> Self {
        Self { outer, padding }
    }

    pub const fn outer(&self) -> Rect {
        self.outer
    }

    pub const fn padding(&self) -> Padding {
        self.padding
    }

    /// The inner rectangle left for actual content.
    pub const fn content(&self) -> Rect {
        Self::inset(self.outer, self.padding)
    }

    pub const fn content_width(&self) -> i32 {
        self.outer.width - self.padding.horizontal()
    }

    /// The content rectangle for this decoration, but computed against the
    /// panel's bounds as expressed in the parent's coordinate space.
    pub const fn content_in(&self, outer_in_parent: Rect) -> Rect {
        Self::inset(outer_in_parent, self.padding)
    }

    const fn inset(outer: Rect, p: Padding) -> Rect {
        Rect::new(
            outer.x + p.left,
            outer.y + p.top,
            outer.width - p.horizontal(),
            outer.height - p.vertical(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn around_content_grows_outward() {
        // The worked example from the demo window layout.
        let content = Rect::new(300, 100, 150, 220);
        let d = DecoratedBounds::around_content(content, Padding::new(24, 32, 0, 100));
        assert_eq!(d.outer(), Rect::new(276, 68, 174, 352));
    }

    #[test]
    fn around_content_round_trips_exactly() {
        let cases = [
            (Rect::new(300, 100, 150, 220), Padding::new(24, 32, 0, 100)),
            (Rect::new(0, 0, 0, 0), Padding::uniform(5)),
            (Rect::new(-40, 7, 600, 400), Padding::symmetric(3, 9)),
            (Rect::new(1, 2, 3, 4), Padding::ZERO),
        ];
        for (content, padding) in cases {
            let d = DecoratedBounds::around_content(content, padding);
            assert_eq!(d.content(), content);
        }
    }

    #[test]
    fn within_insets_the_given_rect() {
        let outer = Rect::new(10, 20, 100, 80);
        let d = DecoratedBounds::within(outer, Padding::new(4, 6, 8, 10));
        assert_eq!(d.outer(), outer);
        assert_eq!(d.content(), Rect::new(14, 26, 88, 64));
    }

    #[test]
    fn uniform_and_symmetric_forms_match_four_value_form() {
        let r = Rect::new(50, 60, 200, 100);
        let four = DecoratedBounds::around_content(r, Padding::new(8, 8, 8, 8));
        let sym = DecoratedBounds::around_content(r, Padding::symmetric(8, 8));
        let uni = DecoratedBounds::around_content(r, Padding::uniform(8));
        assert_eq!(four, sym);
        assert_eq!(sym, uni);
    }

    #[test]
    fn setter_is_idempotent() {
        let r = Rect::new(300, 100, 150, 220);
        let p = Padding::new(24, 32, 0, 100);
        let once = DecoratedBounds::around_content(r, p);
        let twice = DecoratedBounds::around_content(once.content(), p);
        assert_eq!(once, twice);
        assert_eq!(once.content(), twice.content());
    }

    #[test]
    fn content_width_subtracts_horizontal_padding() {
        let d = DecoratedBounds::within(Rect::new(0, 0, 174, 352), Padding::new(24, 32, 0, 100));
        assert_eq!(d.content_width(), 150);
    }

    #[test]
    fn content_in_parent_coordinates() {
        // Local bounds start at the origin; the same panel sits at (40, 30)
        // in its parent.
        let d = DecoratedBounds::within(Rect::new(0, 0, 100, 50), Padding::new(5, 5, 5, 5));
        let in_parent = d.content_in(Rect::new(40, 30, 100, 50));
        assert_eq!(in_parent, Rect::new(45, 35, 90, 40));
    }

    #[test]
    fn oversized_padding_passes_negative_size_through() {
        let d = DecoratedBounds::within(Rect::new(0, 0, 10, 10), Padding::uniform(8));
        let c = d.content();
        assert_eq!(c, Rect::new(8, 8, -6, -6));
        assert!(c.is_empty());
        // And the expanding form still recovers the original exactly.
        let back = DecoratedBounds::around_content(c, Padding::uniform(8));
        assert_eq!(back.outer(), Rect::new(0, 0, 10, 10));
    }
}

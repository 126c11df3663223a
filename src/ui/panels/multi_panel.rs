//! A strip of three side-by-side panels laid out by manual arithmetic.

use crate::geometry::Rect;
use crate::ui::colors;
use crate::ui::view::{PaintCtx, PanelView};
use eframe::egui::Color32;

struct Strip {
    name: &'static str,
    /// `None` falls back to the window background color.
    color: Option<Color32>,
}

pub struct MultiPanelView {
    strips: [Strip; 3],
}

impl Default for MultiPanelView {
    fn default() -> Self {
        Self {
            strips: [
                Strip {
                    name: "Left",
                    color: Some(colors::LEFT_PANEL),
                },
                Strip {
                    name: "Center",
                    color: None,
                },
                Strip {
                    name: "Right",
                    color: None,
                },
            ],
        }
    }
}

/// Carve the three strip rectangles out of `frame`.
///
/// The fractions are of the frame's full width: skip a quarter, "Left" takes
/// an eighth, a 20 px gap, "Center" takes a third, a 50 px gap, "Right"
/// takes whatever is left.
pub fn strip_frames(frame: Rect) -> [Rect; 3] {
    let w = frame.width;
    let (_, r) = frame.split_left(w / 4);
    let (left, r) = r.split_left(w / 8);
    let (_, r) = r.split_left(20);
    let (center, r) = r.split_left(w / 3);
    let (_, right) = r.split_left(50);
    [left, center, right]
}

impl PanelView for MultiPanelView {
    fn name(&self) -> &str {
        "MultiPanel"
    }

    fn show(&mut self, paint: &mut PaintCtx<'_>, frame: Rect) {
        for (strip, rect) in self.strips.iter().zip(strip_frames(frame)) {
            if rect.is_empty() {
                log::debug!("strip {} collapsed at {}x{}", strip.name, rect.width, rect.height);
                continue;
            }
            let fill = strip.color.unwrap_or(colors::WINDOW_BACKGROUND);
            paint.painter.rect_filled(rect.to_egui(), 0, fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_frames_at_600x400() {
        let [left, center, right] = strip_frames(Rect::new(0, 0, 600, 400));
        assert_eq!(left, Rect::new(150, 0, 75, 400));
        assert_eq!(center, Rect::new(245, 0, 200, 400));
        assert_eq!(right, Rect::new(495, 0, 105, 400));
    }

    #[test]
    fn strips_follow_the_frame_origin() {
        let [left, ..] = strip_frames(Rect::new(100, 40, 600, 400));
        assert_eq!(left, Rect::new(250, 40, 75, 400));
    }

    #[test]
    fn narrow_frame_collapses_the_right_strip() {
        let [_, _, right] = strip_frames(Rect::new(0, 0, 80, 100));
        assert!(right.is_empty());
    }
}

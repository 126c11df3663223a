//! Named colors and the placeholder-block palette.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

/// Window background (the look-and-feel default every unstyled panel
/// inherits).
pub const WINDOW_BACKGROUND: Color32 = Color32::from_rgb(220, 20, 60); // crimson

/// Outer (padding) area of a padded panel, drawn translucent.
pub static PADDING_FILL: Lazy<Color32> =
    Lazy::new(|| Color32::from_rgba_unmultiplied(95, 158, 160, 51)); // cadet blue @ 20%

/// Content area of a padded panel.
pub const CONTENT_FILL: Color32 = Color32::from_rgb(245, 245, 220); // beige

/// The one panel strip with an explicit color of its own.
pub const LEFT_PANEL: Color32 = Color32::from_rgb(85, 107, 47); // dark olive green

pub const HEADLINE_TEXT: Color32 = Color32::WHITE;

/// Goldenrod ramp cycled across the placeholder blocks.
pub static BLOCK_COLORS: Lazy<Vec<Color32>> = Lazy::new(|| {
    vec![
        Color32::from_rgb(250, 230, 160),
        Color32::from_rgb(245, 214, 122),
        Color32::from_rgb(238, 201, 95),
        Color32::from_rgb(229, 184, 66),
        Color32::from_rgb(218, 165, 32),
        Color32::from_rgb(199, 147, 24),
        Color32::from_rgb(178, 130, 18),
        Color32::from_rgb(156, 112, 13),
        Color32::from_rgb(133, 94, 9),
        Color32::from_rgb(110, 77, 5),
    ]
});

//! Application orchestrator: owns all panels and drives the per-frame layout.

use crate::geometry::{Padding, Rect};
use crate::store;
use crate::ui::colors;
use crate::ui::panels::{multi_panel::MultiPanelView, padded_panel::PaddedPanel, placeholder::Placeholder};
use crate::ui::view::{PaintCtx, PanelView};
use eframe::egui;
use egui::{Align2, FontId};

const BLOCK_COUNT: usize = 40;

/// The top-level application, implementing [`eframe::App`].
///
/// All geometry lives in the panel structs; `App` only:
/// 1. Computes a frame rectangle for every child on every frame
///    (the resize/layout pass).
/// 2. Calls `show` on each registered panel.
/// 3. Hosts the two interactive widgets (button and slider).
pub struct App {
    multi_panel: MultiPanelView,
    padded: PaddedPanel,
    blocks: Vec<Placeholder>,
    slider_value: f32,
    clicks: u32,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, decoration: Padding) -> Self {
        // Registering a new block = one line here.
        let blocks = (0..BLOCK_COUNT)
            .map(|i| {
                Placeholder::new(
                    i.to_string(),
                    colors::BLOCK_COLORS[i % colors::BLOCK_COLORS.len()],
                )
            })
            .collect();

        // The button carries a left-only padding in the store so other
        // layout code can inset against it without knowing the widget.
        store::set(
            &cc.egui_ctx,
            egui::Id::new("Button1"),
            Padding::new(12, 0, 0, 0),
        );

        Self {
            multi_panel: MultiPanelView::default(),
            padded: PaddedPanel::new("PaddedPanel", decoration),
            blocks,
            slider_value: 0.0,
            clicks: 0,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let background = egui::Frame::new().fill(colors::WINDOW_BACKGROUND);
        egui::CentralPanel::default().frame(background).show(ctx, |ui| {
            let root = Rect::from_egui(ui.max_rect());
            let painter = ui.painter().clone();

            // Headline first; the panels paint over it, as children do.
            painter.text(
                root.to_egui().center(),
                Align2::CENTER_CENTER,
                "Hello World!",
                FontId::proportional(16.0),
                colors::HEADLINE_TEXT,
            );

            let mut paint = PaintCtx {
                ctx,
                painter: &painter,
            };

            // ── Layout pass: every child gets its frame in window coords ──
            self.multi_panel.show(&mut paint, root);

            self.padded
                .show(&mut paint, Rect::new(300, 100, 150, 220).translated(root.x, root.y));

            for (i, block) in self.blocks.iter_mut().enumerate() {
                let i = i as i32;
                let frame = Rect::new(50, 2 + (i + 1) * 25, 20, 20).translated(root.x, root.y);
                block.show(&mut paint, frame);
            }

            // ── Interactive widgets, placed at fixed pixel rects ──────────
            let button_rect = Rect::new(60, 80, 100, 60).translated(root.x, root.y);
            if ui.put(button_rect.to_egui(), egui::Button::new("Button1")).clicked() {
                self.clicks += 1;
                log::info!("Button1 clicked ({} so far)", self.clicks);
            }

            let slider_rect = Rect::new(50, 150, 160, 160).translated(root.x, root.y);
            ui.put(
                slider_rect.to_egui(),
                egui::Slider::new(&mut self.slider_value, 0.0..=10.0).text("SliderOne"),
            );
        });
    }
}

//! UI layer: App orchestrator, PanelView trait, color palettes, and panels.

pub mod app;
pub mod colors;
pub mod panels;
pub mod view;

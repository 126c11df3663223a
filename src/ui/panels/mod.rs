//! The demo panels: padded decorator, multi-panel strip, placeholder blocks.

pub mod multi_panel;
pub mod padded_panel;
pub mod placeholder;

//! Integer-pixel geometry: rectangles, paddings, and decorated bounds.

pub mod decorated;
pub mod padding;
pub mod rect;

pub use decorated::DecoratedBounds;
pub use padding::Padding;
pub use rect::Rect;

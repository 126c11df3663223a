//! A four-sided inset separating outer bounds from content bounds.

/// Per-side padding in pixels. Values are expected to be non-negative but
/// this is not enforced, matching the arithmetic-only contract of the
/// decorator.
///
/// Note the side order: left, top, right, bottom. This is NOT the CSS order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// left = right = `x`, top = bottom = `y`.
    pub const fn symmetric(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }

    /// The same amount on all four sides.
    pub const fn uniform(p: i32) -> Self {
        Self::symmetric(p, p)
    }

    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

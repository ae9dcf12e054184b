use serde::{Deserialize, Serialize};

use super::Edge;

/// Width and height of the outlined rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Either dimension is zero; such a rectangle has an empty outline.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn is_square(self) -> bool {
        self.width == self.height
    }

    /// Length of the given side.
    #[inline]
    pub fn edge_length(self, edge: Edge) -> f64 {
        match edge {
            Edge::Top | Edge::Bottom => self.width,
            Edge::Right | Edge::Left => self.height,
        }
    }
}

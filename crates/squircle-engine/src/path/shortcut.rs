use serde::{Deserialize, Serialize};

use crate::coords::{CornerRadii, Size};

use super::PathList;

/// Degenerate shapes that bypass corner geometry.
///
/// Checked in declaration order; the first match wins.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shortcut {
    /// Zero width or height: empty path.
    Empty,
    /// Every radius is zero: plain rectangle.
    Rectangle,
    /// Square with every radius at half the side: two-arc circle.
    Circle,
    /// No smoothing: classic arc-only rounded rectangle.
    RoundedRectangle,
}

impl Shortcut {
    /// Returns the shortcut that applies to normalized inputs, if any.
    pub fn detect(size: Size, radii: &CornerRadii, smoothing: f64) -> Option<Self> {
        if size.is_empty() {
            Some(Shortcut::Empty)
        } else if radii.is_zero() {
            Some(Shortcut::Rectangle)
        } else if size.is_square() && radii.uniform() == Some(size.width / 2.0) {
            Some(Shortcut::Circle)
        } else if smoothing == 0.0 {
            Some(Shortcut::RoundedRectangle)
        } else {
            None
        }
    }

    pub fn path(self, size: Size, radii: &CornerRadii) -> PathList {
        match self {
            Shortcut::Empty => PathList::new(),
            Shortcut::Rectangle => rectangle(size),
            Shortcut::Circle => circle(size.width),
            Shortcut::RoundedRectangle => rounded_rectangle(size, radii),
        }
    }
}

fn rectangle(Size { width, height }: Size) -> PathList {
    let mut path = PathList::with_capacity(5);
    path.move_to(0.0, 0.0);
    path.line_to(width, 0.0);
    path.line_to(width, height);
    path.line_to(0.0, height);
    path.close();
    path
}

fn circle(diameter: f64) -> PathList {
    let radius = diameter / 2.0;
    let mut path = PathList::with_capacity(4);
    path.move_to(radius, 0.0);
    path.arc_rel(radius, false, 0.0, diameter);
    path.arc_rel(radius, false, 0.0, -diameter);
    path.close();
    path
}

fn rounded_rectangle(Size { width, height }: Size, radii: &CornerRadii) -> PathList {
    let CornerRadii { top_left, top_right, bottom_right, bottom_left } = *radii;
    let mut path = PathList::with_capacity(10);
    path.move_to(width - top_right, 0.0);
    path.arc_rel(top_right, true, top_right, top_right);
    path.line_to(width, height - bottom_right);
    path.arc_rel(bottom_right, true, -bottom_right, bottom_right);
    path.line_to(bottom_left, height);
    path.arc_rel(bottom_left, true, -bottom_left, -bottom_left);
    path.line_to(0.0, top_left);
    path.arc_rel(top_left, true, top_left, -top_left);
    path.close();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: f64, height: f64) -> Size {
        Size::new(width, height)
    }

    // ── detect ────────────────────────────────────────────────────────────

    #[test]
    fn empty_wins_over_everything() {
        assert_eq!(Shortcut::detect(size(0.0, 10.0), &CornerRadii::zero(), 0.0), Some(Shortcut::Empty));
    }

    #[test]
    fn zero_radii_is_rectangle() {
        assert_eq!(Shortcut::detect(size(10.0, 10.0), &CornerRadii::zero(), 0.6), Some(Shortcut::Rectangle));
    }

    #[test]
    fn half_side_square_is_circle() {
        let s = size(200.0, 200.0);
        assert_eq!(Shortcut::detect(s, &CornerRadii::all(100.0), 0.6), Some(Shortcut::Circle));
        assert_eq!(Shortcut::detect(s, &CornerRadii::all(99.0), 0.6), None);
        assert_eq!(
            Shortcut::detect(s, &CornerRadii::new(100.0, 100.0, 100.0, 50.0), 0.6),
            None
        );
    }

    #[test]
    fn zero_smoothing_is_rounded_rectangle() {
        assert_eq!(
            Shortcut::detect(size(300.0, 100.0), &CornerRadii::all(20.0), 0.0),
            Some(Shortcut::RoundedRectangle)
        );
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn rectangle_path() {
        let path = Shortcut::Rectangle.path(size(300.0, 100.0), &CornerRadii::zero());
        assert_eq!(path.to_string(), "M 0 0 L 300 0 L 300 100 L 0 100 Z");
    }

    #[test]
    fn circle_path() {
        let path = Shortcut::Circle.path(size(200.0, 200.0), &CornerRadii::all(100.0));
        assert_eq!(path.to_string(), "M 100 0 a 100 100 0 0 0 0 200 a 100 100 0 0 0 0 -200 Z");
    }

    #[test]
    fn rounded_rectangle_path() {
        let path = Shortcut::RoundedRectangle.path(size(300.0, 100.0), &CornerRadii::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(
            path.to_string(),
            "M 280 0 a 20 20 0 0 1 20 20 L 300 70 a 30 30 0 0 1 -30 30 \
             L 40 100 a 40 40 0 0 1 -40 -40 L 0 10 a 10 10 0 0 1 10 -10 Z"
        );
    }
}

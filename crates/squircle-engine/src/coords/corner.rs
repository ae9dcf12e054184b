use serde::{Deserialize, Serialize};

/// One of the four rectangle corners.
///
/// Discriminants follow CSS order and double as array indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] =
        [Corner::TopLeft, Corner::TopRight, Corner::BottomRight, Corner::BottomLeft];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Edge shared with the vertically adjacent corner (left or right side).
    #[inline]
    pub const fn vertical_edge(self) -> Edge {
        match self {
            Corner::TopLeft | Corner::BottomLeft => Edge::Left,
            Corner::TopRight | Corner::BottomRight => Edge::Right,
        }
    }

    /// Edge shared with the horizontally adjacent corner (top or bottom side).
    #[inline]
    pub const fn horizontal_edge(self) -> Edge {
        match self {
            Corner::TopLeft | Corner::TopRight => Edge::Top,
            Corner::BottomRight | Corner::BottomLeft => Edge::Bottom,
        }
    }

    #[inline]
    pub const fn edges(self) -> [Edge; 2] {
        [self.vertical_edge(), self.horizontal_edge()]
    }
}

/// One of the four rectangle sides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The two corners bounding this edge, in clockwise order.
    #[inline]
    pub const fn corners(self) -> [Corner; 2] {
        match self {
            Edge::Top => [Corner::TopLeft, Corner::TopRight],
            Edge::Right => [Corner::TopRight, Corner::BottomRight],
            Edge::Bottom => [Corner::BottomRight, Corner::BottomLeft],
            Edge::Left => [Corner::BottomLeft, Corner::TopLeft],
        }
    }

    /// Direction a corner's transition runs along when it sits on this edge.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Horizontal,
            Edge::Right | Edge::Left => Axis::Vertical,
        }
    }
}

/// Ramp direction of a corner transition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_corner_sits_on_its_two_edges() {
        for corner in Corner::ALL {
            for edge in corner.edges() {
                assert!(edge.corners().contains(&corner), "{corner:?} not on {edge:?}");
            }
        }
    }

    #[test]
    fn edge_axis_matches_corner_edges() {
        for corner in Corner::ALL {
            assert_eq!(corner.vertical_edge().axis(), Axis::Vertical);
            assert_eq!(corner.horizontal_edge().axis(), Axis::Horizontal);
        }
    }

    #[test]
    fn indices_are_dense() {
        let corners: Vec<usize> = Corner::ALL.iter().map(|c| c.index()).collect();
        let edges: Vec<usize> = Edge::ALL.iter().map(|e| e.index()).collect();
        assert_eq!(corners, vec![0, 1, 2, 3]);
        assert_eq!(edges, vec![0, 1, 2, 3]);
    }
}

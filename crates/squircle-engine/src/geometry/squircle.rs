use serde::{Deserialize, Serialize};

use crate::coords::{Corner, CornerRadii, Edge, Size};

use super::{resolve_merge, CornerGeometry, EdgeState};

/// Set of corners and edges whose derived geometry is out of date.
///
/// Marking a corner marks both of its edges: a corner's ramps are blended
/// per edge, so re-deriving it invalidates the blend on each side.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Dirty {
    corners: [bool; 4],
    edges: [bool; 4],
}

impl Dirty {
    #[inline]
    pub const fn none() -> Self {
        Self { corners: [false; 4], edges: [false; 4] }
    }

    #[inline]
    pub const fn all() -> Self {
        Self { corners: [true; 4], edges: [true; 4] }
    }

    #[inline]
    pub fn mark_edge(&mut self, edge: Edge) {
        self.edges[edge.index()] = true;
    }

    #[inline]
    pub fn mark_corner(&mut self, corner: Corner) {
        self.corners[corner.index()] = true;
        for edge in corner.edges() {
            self.mark_edge(edge);
        }
    }

    /// Union with another set.
    #[inline]
    pub fn extend(&mut self, other: Dirty) {
        for i in 0..4 {
            self.corners[i] |= other.corners[i];
            self.edges[i] |= other.edges[i];
        }
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        !self.corners.iter().chain(self.edges.iter()).any(|&d| d)
    }

    #[inline]
    pub fn has_corner(&self, corner: Corner) -> bool {
        self.corners[corner.index()]
    }

    #[inline]
    pub fn has_edge(&self, edge: Edge) -> bool {
        self.edges[edge.index()]
    }

    pub fn corners(&self) -> impl Iterator<Item = Corner> + '_ {
        Corner::ALL.into_iter().filter(|&c| self.has_corner(c))
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::ALL.into_iter().filter(|&e| self.has_edge(e))
    }
}

/// Complete derived geometry for one squircle.
///
/// `size`, `radii` and `smoothing` are the normalized inputs; `corners` and
/// `edges` are derived from them. After [`refresh`](Self::refresh) the derived
/// part is identical to what [`new`](Self::new) would build from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquircleGeometry {
    pub size: Size,
    pub radii: CornerRadii,
    pub smoothing: f64,
    /// Indexed by [`Corner::index`].
    pub corners: [CornerGeometry; 4],
    /// Indexed by [`Edge::index`].
    pub edges: [EdgeState; 4],
}

impl SquircleGeometry {
    /// Derives every corner and edge from normalized inputs.
    pub fn new(size: Size, radii: CornerRadii, smoothing: f64, damping: f64) -> Self {
        let mut geometry = Self {
            size,
            radii,
            smoothing,
            corners: [CornerGeometry::default(); 4],
            edges: [EdgeState::default(); 4],
        };
        geometry.refresh(Dirty::all(), damping);
        geometry
    }

    #[inline]
    pub fn corner(&self, corner: Corner) -> &CornerGeometry {
        &self.corners[corner.index()]
    }

    #[inline]
    pub fn edge(&self, edge: Edge) -> &EdgeState {
        &self.edges[edge.index()]
    }

    /// Recomputes the invalidated subset.
    ///
    /// Corners whose stored radius or smoothing no longer match the inputs are
    /// added to `dirty` automatically. Dirty corners are re-derived in full;
    /// every dirty edge is re-measured and its two corners get their ramps on
    /// that axis refreshed and re-blended. Returns the set actually touched.
    pub fn refresh(&mut self, mut dirty: Dirty, damping: f64) -> Dirty {
        for corner in Corner::ALL {
            if !self.corner(corner).matches(self.radii.get(corner), self.smoothing) {
                dirty.mark_corner(corner);
            }
        }

        for edge in dirty.edges() {
            self.measure_edge(edge);
        }
        for corner in dirty.corners() {
            self.corners[corner.index()] = CornerGeometry::new(
                self.radii.get(corner),
                self.smoothing,
                self.edge(corner.vertical_edge()).half_space(),
                self.edge(corner.horizontal_edge()).half_space(),
            );
        }
        for edge in dirty.edges() {
            self.resolve_edge(edge, damping);
        }
        dirty
    }

    /// Re-measures all four edges without touching corner geometry.
    pub fn measure_edges(&mut self) {
        for edge in Edge::ALL {
            self.measure_edge(edge);
        }
    }

    fn measure_edge(&mut self, edge: Edge) {
        let [a, b] = edge.corners();
        self.edges[edge.index()] =
            EdgeState::measure(self.size.edge_length(edge), self.radii.get(a), self.radii.get(b));
    }

    fn resolve_edge(&mut self, edge: Edge, damping: f64) {
        let axis = edge.axis();
        let state = *self.edge(edge);
        let [ia, ib] = edge.corners().map(Corner::index);

        let mut a = self.corners[ia];
        let mut b = self.corners[ib];
        a.refresh_axis(axis, state.half_space());
        b.refresh_axis(axis, state.half_space());
        if resolve_merge(&mut a, &mut b, axis, self.size.edge_length(edge), &state, damping) {
            log::trace!("{edge:?} edge consumed (space {}), ramps blended", state.space);
        }
        self.corners[ia] = a;
        self.corners[ib] = b;
    }
}

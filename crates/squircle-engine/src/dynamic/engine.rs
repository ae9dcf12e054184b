use crate::coords::{Corner, Edge};
use crate::geometry::{Dirty, SquircleGeometry};
use crate::params::{normalize_size, normalize_smoothing, resolve_radii, RadiusPatch, RadiusSpec};
use crate::path::{squircle_path, Shortcut};
use crate::squircle::{SquircleArgs, SquircleConfig};

use super::{Snapshot, SquircleUpdate};

/// Stateful squircle that redraws by recomputing only what changed.
///
/// Lifecycle:
/// - [`new`](Self::new) derives the full geometry but renders nothing
/// - [`manual_draw`](Self::manual_draw) renders the current state (first frame)
/// - [`update`](Self::update) applies a partial change and renders, or reports
///   that nothing changed
///
/// The raw arguments are kept as given; the geometry holds their normalized
/// form. Invalidation that a shortcut draw skips is carried in `pending` until
/// the next full draw.
#[derive(Debug, Clone)]
pub struct DynamicSquircle {
    config: SquircleConfig,
    args: SquircleArgs,
    geometry: SquircleGeometry,
    pending: Dirty,
}

impl DynamicSquircle {
    pub fn new(args: &SquircleArgs) -> Self {
        Self::with_config(args, SquircleConfig::default())
    }

    pub fn with_config(args: &SquircleArgs, config: SquircleConfig) -> Self {
        let size = normalize_size(args.height, args.width);
        let radii = resolve_radii(&args.radius, size);
        let smoothing = normalize_smoothing(args.smoothing);
        Self {
            config,
            args: *args,
            geometry: SquircleGeometry::new(size, radii, smoothing, config.merge_damping),
            pending: Dirty::none(),
        }
    }

    #[inline]
    pub fn args(&self) -> &SquircleArgs {
        &self.args
    }

    #[inline]
    pub fn config(&self) -> &SquircleConfig {
        &self.config
    }

    /// Normalized inputs and the geometry of the last full draw.
    #[inline]
    pub fn geometry(&self) -> &SquircleGeometry {
        &self.geometry
    }

    /// The shortcut the current parameters resolve to, if any.
    pub fn shortcut(&self) -> Option<Shortcut> {
        let g = &self.geometry;
        Shortcut::detect(g.size, &g.radii, g.smoothing)
    }

    /// Applies `update` and returns the new path.
    ///
    /// Fields equal to the stored value count as absent; `None` means nothing
    /// differed and nothing was recomputed.
    pub fn update(&mut self, update: SquircleUpdate) -> Option<String> {
        let mut next = self.args;
        let mut size_changed = false;
        let mut radius_changed = false;
        let mut smoothing_changed = false;

        if let Some(height) = update.height.filter(|&h| !same(h, next.height)) {
            next.height = height;
            size_changed = true;
        }
        if let Some(width) = update.width.filter(|&w| !same(w, next.width)) {
            next.width = width;
            size_changed = true;
        }
        if let Some(radius) = update.radius.and_then(|patch| apply_patch(next.radius, patch)) {
            next.radius = radius;
            radius_changed = true;
        }
        if let Some(smoothing) = update.smoothing.filter(|&s| !same(s, next.smoothing)) {
            next.smoothing = smoothing;
            smoothing_changed = true;
        }

        if !(size_changed || radius_changed || smoothing_changed) {
            log::trace!("update: no change");
            return None;
        }
        self.args = next;

        if size_changed || radius_changed {
            let size = normalize_size(next.height, next.width);
            let previous = self.geometry.size;
            if size.height != previous.height {
                self.pending.mark_edge(Edge::Left);
                self.pending.mark_edge(Edge::Right);
            }
            if size.width != previous.width {
                self.pending.mark_edge(Edge::Top);
                self.pending.mark_edge(Edge::Bottom);
            }
            self.geometry.size = size;
            self.geometry.radii = resolve_radii(&next.radius, size);
        }
        if smoothing_changed {
            self.geometry.smoothing = normalize_smoothing(next.smoothing);
        }

        Some(self.draw())
    }

    /// Renders the current state without diffing.
    pub fn manual_draw(&mut self) -> String {
        self.draw()
    }

    /// Copy of the current state for inspection.
    pub fn read(&self) -> Snapshot {
        let g = &self.geometry;
        let stale = !self.pending.is_clean()
            || Corner::ALL.into_iter().any(|c| !g.corner(c).matches(g.radii.get(c), g.smoothing));
        Snapshot {
            args: self.args,
            config: self.config,
            shortcut: self.shortcut(),
            stale,
            geometry: self.geometry.clone(),
        }
    }

    fn draw(&mut self) -> String {
        if let Some(shortcut) = self.shortcut() {
            log::debug!("{shortcut:?} shortcut, per-corner refresh deferred");
            self.geometry.measure_edges();
            return shortcut
                .path(self.geometry.size, &self.geometry.radii)
                .render(self.config.precision);
        }

        let touched = self.geometry.refresh(std::mem::take(&mut self.pending), self.config.merge_damping);
        log::trace!(
            "refreshed corners {:?} edges {:?}",
            touched.corners().collect::<Vec<_>>(),
            touched.edges().collect::<Vec<_>>(),
        );
        squircle_path(&self.geometry).render(self.config.precision)
    }
}

/// Merges a patch into a radius spec, or `None` when it changes nothing.
///
/// Patch values equal to the current raw radius are skipped, so a uniform
/// patch matching all four corners keeps a per-corner spec as it is.
fn apply_patch(spec: RadiusSpec, patch: RadiusPatch) -> Option<RadiusSpec> {
    let raw = spec.raw_radii();
    match patch {
        RadiusPatch::Uniform(r) => {
            let unchanged = Corner::ALL.into_iter().all(|c| same(raw.get(c), r));
            (!unchanged).then_some(RadiusSpec::Uniform(r))
        }
        RadiusPatch::PerCorner { .. } => {
            let mut next = None;
            for corner in Corner::ALL {
                if let Some(value) = patch.get(corner).filter(|&v| !same(v, raw.get(corner))) {
                    next = Some(next.unwrap_or(spec).corner(corner, value));
                }
            }
            next
        }
    }
}

/// Input equality for diffing; NaN matches NaN so a repeated NaN is not a change.
#[inline]
fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

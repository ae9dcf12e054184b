use crate::coords::{Axis, Corner, Size};
use crate::geometry::{CornerGeometry, SquircleGeometry};

use super::PathList;

/// Walks the outline clockwise from the top edge and records every command.
///
/// Order: top-right, bottom-right, bottom-left, top-left. Straight edges are
/// absolute `L` commands placed at each corner's transition length; corners
/// are relative ramp / arc / ramp sequences.
pub fn squircle_path(geometry: &SquircleGeometry) -> PathList {
    let Size { width, height } = geometry.size;
    let mut path = PathList::with_capacity(18);

    let top_right = geometry.corner(Corner::TopRight);
    path.move_to(width - top_right.horizontal.transition_length, 0.0);
    push_corner(&mut path, geometry, Corner::TopRight);

    let bottom_right = geometry.corner(Corner::BottomRight);
    path.line_to(width, height - bottom_right.vertical.transition_length);
    push_corner(&mut path, geometry, Corner::BottomRight);

    let bottom_left = geometry.corner(Corner::BottomLeft);
    path.line_to(bottom_left.horizontal.transition_length, height);
    push_corner(&mut path, geometry, Corner::BottomLeft);

    let top_left = geometry.corner(Corner::TopLeft);
    path.line_to(0.0, top_left.vertical.transition_length);
    push_corner(&mut path, geometry, Corner::TopLeft);

    path.close();
    path
}

/// Travel direction through a corner.
///
/// `sx`/`sy` are the signs of the corner's net x/y displacement when walked
/// clockwise; `leading` is the axis the walk arrives along.
struct Heading {
    sx: f64,
    sy: f64,
    leading: Axis,
}

impl Heading {
    fn of(corner: Corner) -> Self {
        match corner {
            Corner::TopRight => Heading { sx: 1.0, sy: 1.0, leading: Axis::Horizontal },
            Corner::BottomRight => Heading { sx: -1.0, sy: 1.0, leading: Axis::Vertical },
            Corner::BottomLeft => Heading { sx: -1.0, sy: -1.0, leading: Axis::Horizontal },
            Corner::TopLeft => Heading { sx: 1.0, sy: -1.0, leading: Axis::Vertical },
        }
    }
}

fn push_corner(path: &mut PathList, geometry: &SquircleGeometry, corner: Corner) {
    let g = geometry.corner(corner);
    if g.is_sharp() {
        return;
    }

    let vertical_merged = geometry.edge(corner.vertical_edge()).merged;
    let horizontal_merged = geometry.edge(corner.horizontal_edge()).merged;
    let heading = Heading::of(corner);
    let (leading_merged, trailing_merged) = match heading.leading {
        Axis::Horizontal => (horizontal_merged, vertical_merged),
        Axis::Vertical => (vertical_merged, horizontal_merged),
    };

    if !leading_merged {
        push_ramp(path, g, &heading, heading.leading, true);
    }

    let (arc_x, arc_y) = arc_span(g, vertical_merged, horizontal_merged);
    path.arc_rel(g.radius, true, heading.sx * arc_x, heading.sy * arc_y);

    if !trailing_merged {
        let trailing = match heading.leading {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        };
        push_ramp(path, g, &heading, trailing, false);
    }
}

/// Unsigned x/y extent of the arc.
///
/// With both sides merged the arc is a full quarter circle. With one side
/// merged the arc absorbs that side's ramp and runs to its transition length.
fn arc_span(g: &CornerGeometry, vertical_merged: bool, horizontal_merged: bool) -> (f64, f64) {
    if vertical_merged && horizontal_merged {
        return (g.radius, g.radius);
    }
    let x = if horizontal_merged {
        g.horizontal.transition_length - g.length_d
    } else {
        g.arc_movement_length + if vertical_merged { g.length_d } else { 0.0 }
    };
    let y = if vertical_merged {
        g.vertical.transition_length - g.length_d
    } else {
        g.arc_movement_length + if horizontal_merged { g.length_d } else { 0.0 }
    };
    (x, y)
}

/// Records one cubic ramp along `axis`.
///
/// An incoming ramp starts flat on the edge and ends tangent to the arc; an
/// outgoing ramp is its mirror image, leaving the arc and landing on the next edge.
fn push_ramp(path: &mut PathList, g: &CornerGeometry, heading: &Heading, axis: Axis, incoming: bool) {
    let ramp = g.ramp(axis);
    let (a, b, c, d) = (ramp.length_a, ramp.length_b, g.length_c, g.length_d);

    // (along, across) offsets relative to the ramp's start point
    let points = if incoming {
        [(a, 0.0), (a + b, 0.0), (a + b + c, d)]
    } else {
        [(c, d), (c + b, d), (c + b + a, d)]
    };

    let [p1, p2, p3] = points.map(|(along, across)| match axis {
        Axis::Horizontal => (heading.sx * along, heading.sy * across),
        Axis::Vertical => (heading.sx * across, heading.sy * along),
    });
    path.cubic_rel(p1, p2, p3);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::CornerRadii;
    use crate::geometry::DEFAULT_MERGE_DAMPING;
    use crate::path::PathCmd;

    fn geometry(width: f64, height: f64, radii: CornerRadii, smoothing: f64) -> SquircleGeometry {
        SquircleGeometry::new(Size::new(width, height), radii, smoothing, DEFAULT_MERGE_DAMPING)
    }

    fn count(path: &PathList, pred: impl Fn(&PathCmd) -> bool) -> usize {
        path.cmds().iter().filter(|c| pred(c)).count()
    }

    fn is_cubic(c: &PathCmd) -> bool { matches!(c, PathCmd::CubicRel { .. }) }
    fn is_arc(c: &PathCmd) -> bool { matches!(c, PathCmd::ArcRel { .. }) }

    /// Sums relative commands from the move point and returns the end point
    /// of every command.
    fn trace(path: &PathList) -> Vec<(f64, f64)> {
        let mut at = (0.0, 0.0);
        let mut points = Vec::new();
        for cmd in path.cmds() {
            match *cmd {
                PathCmd::MoveTo { x, y } | PathCmd::LineTo { x, y } => at = (x, y),
                PathCmd::CubicRel { dx, dy, .. } | PathCmd::ArcRel { dx, dy, .. } => {
                    at = (at.0 + dx, at.1 + dy)
                }
                PathCmd::Close => continue,
            }
            points.push(at);
        }
        points
    }

    #[test]
    fn open_edges_emit_two_ramps_per_corner() {
        let path = squircle_path(&geometry(400.0, 300.0, CornerRadii::all(40.0), 0.6));
        assert_eq!(count(&path, is_cubic), 8);
        assert_eq!(count(&path, is_arc), 4);
    }

    #[test]
    fn sharp_corner_emits_nothing() {
        let path = squircle_path(&geometry(400.0, 300.0, CornerRadii::new(0.0, 40.0, 40.0, 40.0), 0.6));
        assert_eq!(count(&path, is_arc), 3);
        assert_eq!(count(&path, is_cubic), 6);
        assert_eq!(path.cmds().last(), Some(&PathCmd::Close));
        assert_eq!(path.cmds()[path.cmds().len() - 2], PathCmd::LineTo { x: 0.0, y: 0.0 });
    }

    #[test]
    fn merged_short_edges_drop_their_ramps() {
        // stadium: left and right edges are fully consumed
        let path = squircle_path(&geometry(400.0, 200.0, CornerRadii::all(100.0), 0.8));
        assert_eq!(count(&path, is_arc), 4);
        assert_eq!(count(&path, is_cubic), 4);
        // the top edge is open, so the walk starts a full (1 + s) * r from the corner
        let PathCmd::MoveTo { x, y } = path.cmds()[0] else { panic!("expected a move") };
        assert!((x - 220.0).abs() < 1e-9 && y == 0.0);
    }

    #[test]
    fn outline_returns_to_the_top_edge() {
        let cases = [
            (400.0, 300.0, CornerRadii::all(40.0), 0.6),
            (400.0, 200.0, CornerRadii::all(100.0), 0.8),
            (300.0, 180.0, CornerRadii::new(90.0, 20.0, 60.0, 0.0), 1.0),
            (120.0, 120.0, CornerRadii::new(60.0, 60.0, 10.0, 60.0), 0.3),
        ];
        for (w, h, radii, s) in cases {
            let path = squircle_path(&geometry(w, h, radii, s));
            let points = trace(&path);
            let start = points[0];
            let end = *points.last().unwrap();
            // `Z` then draws the straight part of the top edge
            assert!(
                end.1.abs() < 1e-6 && end.0 <= start.0 + 1e-6,
                "{w}x{h} {radii:?} s={s}: start {start:?} end {end:?}"
            );
        }
    }

    #[test]
    fn corners_land_on_the_next_edge() {
        let path = squircle_path(&geometry(400.0, 300.0, CornerRadii::all(40.0), 0.6));
        let points = trace(&path);
        // after the top-right corner (move, ramp, arc, ramp) the pen is on the right edge
        assert!((points[3].0 - 400.0).abs() < 1e-9);
        // after the bottom-right corner it is on the bottom edge
        assert!((points[7].1 - 300.0).abs() < 1e-9);
    }
}

use std::fmt::Write;

use super::write_number;

/// One outline command.
///
/// Only the subset the squircle outline needs: absolute move / line, relative
/// cubic and relative elliptical arc (always circular, no rotation), close.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCmd {
    /// `M x y`
    MoveTo { x: f64, y: f64 },
    /// `L x y`
    LineTo { x: f64, y: f64 },
    /// `c dx1 dy1 dx2 dy2 dx dy`
    CubicRel { dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx: f64, dy: f64 },
    /// `a r r 0 0 sweep dx dy`
    ArcRel { radius: f64, sweep: bool, dx: f64, dy: f64 },
    /// `Z`
    Close,
}

impl PathCmd {
    /// Appends this command to `out` as space-separated tokens.
    pub fn write_to(&self, out: &mut String, precision: usize) {
        match *self {
            PathCmd::MoveTo { x, y } => write_tokens(out, "M", &[x, y], precision),
            PathCmd::LineTo { x, y } => write_tokens(out, "L", &[x, y], precision),
            PathCmd::CubicRel { dx1, dy1, dx2, dy2, dx, dy } => {
                write_tokens(out, "c", &[dx1, dy1, dx2, dy2, dx, dy], precision)
            }
            PathCmd::ArcRel { radius, sweep, dx, dy } => {
                out.push_str("a ");
                write_number(out, radius, precision);
                out.push(' ');
                write_number(out, radius, precision);
                // x-axis-rotation, large-arc flag, sweep flag
                let _ = write!(out, " 0 0 {} ", u8::from(sweep));
                write_number(out, dx, precision);
                out.push(' ');
                write_number(out, dy, precision);
            }
            PathCmd::Close => out.push('Z'),
        }
    }
}

fn write_tokens(out: &mut String, letter: &str, values: &[f64], precision: usize) {
    out.push_str(letter);
    for &v in values {
        out.push(' ');
        write_number(out, v, precision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(cmd: PathCmd) -> String {
        let mut out = String::new();
        cmd.write_to(&mut out, 4);
        out
    }

    #[test]
    fn move_and_line() {
        assert_eq!(render(PathCmd::MoveTo { x: 300.0, y: 0.0 }), "M 300 0");
        assert_eq!(render(PathCmd::LineTo { x: 1.5, y: -2.0 }), "L 1.5000 -2");
    }

    #[test]
    fn cubic() {
        let cmd = PathCmd::CubicRel { dx1: 1.0, dy1: 0.0, dx2: 2.0, dy2: 0.0, dx: 3.25, dy: 0.5 };
        assert_eq!(render(cmd), "c 1 0 2 0 3.2500 0.5000");
    }

    #[test]
    fn arc_flags() {
        assert_eq!(
            render(PathCmd::ArcRel { radius: 100.0, sweep: false, dx: 0.0, dy: 200.0 }),
            "a 100 100 0 0 0 0 200"
        );
        assert_eq!(
            render(PathCmd::ArcRel { radius: 8.0, sweep: true, dx: 8.0, dy: -8.0 }),
            "a 8 8 0 0 1 8 -8"
        );
    }

    #[test]
    fn close() {
        assert_eq!(render(PathCmd::Close), "Z");
    }
}

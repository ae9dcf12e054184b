use std::fmt;

use super::{PathCmd, DEFAULT_PRECISION};

/// Recorded outline in emission order.
///
/// Commands are kept structured until [`render`](Self::render) so callers can
/// inspect them (tests do) or render at a different precision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathList {
    cmds: Vec<PathCmd>,
}

impl PathList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { cmds: Vec::with_capacity(capacity) }
    }

    /// Returns commands in emission order.
    #[inline]
    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: PathCmd) {
        self.cmds.push(cmd);
    }

    #[inline]
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.push(PathCmd::MoveTo { x, y });
    }

    #[inline]
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.push(PathCmd::LineTo { x, y });
    }

    #[inline]
    pub fn cubic_rel(&mut self, c1: (f64, f64), c2: (f64, f64), to: (f64, f64)) {
        self.push(PathCmd::CubicRel { dx1: c1.0, dy1: c1.1, dx2: c2.0, dy2: c2.1, dx: to.0, dy: to.1 });
    }

    #[inline]
    pub fn arc_rel(&mut self, radius: f64, sweep: bool, dx: f64, dy: f64) {
        self.push(PathCmd::ArcRel { radius, sweep, dx, dy });
    }

    #[inline]
    pub fn close(&mut self) {
        self.push(PathCmd::Close);
    }

    /// Renders the commands as a single-spaced `d` string.
    pub fn render(&self, precision: usize) -> String {
        let mut out = String::with_capacity(self.cmds.len() * 32);
        for (i, cmd) in self.cmds.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            cmd.write_to(&mut out, precision);
        }
        out
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_PRECISION))
    }
}

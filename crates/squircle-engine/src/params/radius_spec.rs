use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coords::{Corner, CornerRadii};

use super::RadiusSpecError;

/// Requested corner radius, before normalization.
///
/// `Uniform` applies one value to every corner and is clamped to half of the
/// shorter side. `PerCorner` resolves each corner to its explicit value, then
/// `default`, then zero; adjacent radii that overflow an edge are shrunk
/// proportionally.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum RadiusSpec {
    Uniform(f64),
    PerCorner {
        default: Option<f64>,
        top_left: Option<f64>,
        top_right: Option<f64>,
        bottom_right: Option<f64>,
        bottom_left: Option<f64>,
    },
}

impl Default for RadiusSpec {
    fn default() -> Self {
        RadiusSpec::Uniform(0.0)
    }
}

impl From<f64> for RadiusSpec {
    fn from(r: f64) -> Self {
        RadiusSpec::Uniform(r)
    }
}

impl From<CornerRadii> for RadiusSpec {
    fn from(r: CornerRadii) -> Self {
        RadiusSpec::PerCorner {
            default: None,
            top_left: Some(r.top_left),
            top_right: Some(r.top_right),
            bottom_right: Some(r.bottom_right),
            bottom_left: Some(r.bottom_left),
        }
    }
}

impl RadiusSpec {
    /// Per-corner spec where every unset corner falls back to `default`.
    #[inline]
    pub fn with_default(default: f64) -> Self {
        RadiusSpec::PerCorner {
            default: Some(default),
            top_left: None,
            top_right: None,
            bottom_right: None,
            bottom_left: None,
        }
    }

    /// Returns a copy with one corner set explicitly.
    ///
    /// A `Uniform` spec becomes `PerCorner` with the uniform value as default.
    #[must_use]
    pub fn corner(self, corner: Corner, value: f64) -> Self {
        let (default, mut radii) = match self {
            RadiusSpec::Uniform(r) => (Some(r), [None; 4]),
            RadiusSpec::PerCorner { default, top_left, top_right, bottom_right, bottom_left } => {
                (default, [top_left, top_right, bottom_right, bottom_left])
            }
        };
        radii[corner.index()] = Some(value);
        let [top_left, top_right, bottom_right, bottom_left] = radii;
        RadiusSpec::PerCorner { default, top_left, top_right, bottom_right, bottom_left }
    }

    /// Raw per-corner request: explicit value, else default, else zero.
    /// No clamping or rounding is applied.
    pub fn raw_radii(&self) -> CornerRadii {
        match *self {
            RadiusSpec::Uniform(r) => CornerRadii::all(r),
            RadiusSpec::PerCorner { default, top_left, top_right, bottom_right, bottom_left } => {
                let pick = |v: Option<f64>| v.or(default).unwrap_or(0.0);
                CornerRadii::new(pick(top_left), pick(top_right), pick(bottom_right), pick(bottom_left))
            }
        }
    }
}

impl FromStr for RadiusSpec {
    type Err = RadiusSpecError;

    /// Accepts either a bare number (`"24"`) or comma-separated `key=value`
    /// pairs (`"default=8, tl=24, bottom-right=0"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(RadiusSpecError::new("empty radius spec", 1));
        }
        if !s.contains('=') {
            let col = leading_ws(s) + 1;
            return parse_number(s.trim(), col).map(RadiusSpec::Uniform);
        }

        let mut default = None;
        let mut corners: [Option<f64>; 4] = [None; 4];
        let mut offset = 0;

        for entry in s.split(',') {
            let start = offset;
            let col = start + leading_ws(entry) + 1;
            offset += entry.len() + 1;

            let Some((key, value)) = entry.split_once('=') else {
                return Err(RadiusSpecError::new(
                    format!("expected `key=value`, found `{}`", entry.trim()),
                    col,
                ));
            };
            let value_col = start + key.len() + 1 + leading_ws(value) + 1;
            let value = parse_number(value.trim(), value_col)?;

            let slot = match key.trim().to_ascii_lowercase().as_str() {
                "default" => &mut default,
                "tl" | "top-left" | "top_left" => &mut corners[Corner::TopLeft.index()],
                "tr" | "top-right" | "top_right" => &mut corners[Corner::TopRight.index()],
                "br" | "bottom-right" | "bottom_right" => &mut corners[Corner::BottomRight.index()],
                "bl" | "bottom-left" | "bottom_left" => &mut corners[Corner::BottomLeft.index()],
                other => {
                    return Err(RadiusSpecError::new(format!("unknown corner `{other}`"), col));
                }
            };
            if slot.is_some() {
                return Err(RadiusSpecError::new(
                    format!("corner `{}` given twice", key.trim()),
                    col,
                ));
            }
            *slot = Some(value);
        }

        let [top_left, top_right, bottom_right, bottom_left] = corners;
        Ok(RadiusSpec::PerCorner { default, top_left, top_right, bottom_right, bottom_left })
    }
}

/// Partial radius change accepted by [`DynamicSquircle::update`](crate::dynamic::DynamicSquircle::update).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum RadiusPatch {
    /// Sets every corner.
    Uniform(f64),
    /// Sets only the corners that are `Some`.
    PerCorner {
        top_left: Option<f64>,
        top_right: Option<f64>,
        bottom_right: Option<f64>,
        bottom_left: Option<f64>,
    },
}

impl From<f64> for RadiusPatch {
    fn from(r: f64) -> Self {
        RadiusPatch::Uniform(r)
    }
}

impl RadiusPatch {
    /// Patch touching a single corner.
    #[inline]
    pub fn corner(corner: Corner, value: f64) -> Self {
        let mut radii = [None; 4];
        radii[corner.index()] = Some(value);
        let [top_left, top_right, bottom_right, bottom_left] = radii;
        RadiusPatch::PerCorner { top_left, top_right, bottom_right, bottom_left }
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> Option<f64> {
        match *self {
            RadiusPatch::Uniform(r) => Some(r),
            RadiusPatch::PerCorner { top_left, top_right, bottom_right, bottom_left } => match corner {
                Corner::TopLeft => top_left,
                Corner::TopRight => top_right,
                Corner::BottomRight => bottom_right,
                Corner::BottomLeft => bottom_left,
            },
        }
    }
}

fn leading_ws(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

fn parse_number(s: &str, col: usize) -> Result<f64, RadiusSpecError> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(RadiusSpecError::new(format!("radius `{s}` is not finite"), col)),
        Err(_) => Err(RadiusSpecError::new(format!("expected a number, found `{s}`"), col)),
    }
}

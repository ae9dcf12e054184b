//! Wrappers that embed path data in CSS and SVG.

use std::fmt::Write as _;

use crate::path::write_number;

/// Value for the CSS `clip-path` property: `path("d")`, or `none` for an empty path.
pub fn css_clip_path(d: &str) -> String {
    if d.is_empty() {
        return "none".to_owned();
    }
    format!("path(\"{d}\")")
}

/// Standalone SVG document holding a single filled path.
///
/// `fill` is written as an attribute value and escaped accordingly.
pub fn svg_document(d: &str, height: f64, width: f64, fill: &str) -> String {
    let mut out = String::with_capacity(d.len() + fill.len() + 96);
    out.push_str("<svg height=\"");
    write_number(&mut out, height, 0);
    out.push_str("\" width=\"");
    write_number(&mut out, width, 0);
    out.push_str("\" xmlns=\"http://www.w3.org/2000/svg\"><path d=\"");
    push_escaped(&mut out, d);
    out.push_str("\" fill=\"");
    push_escaped(&mut out, fill);
    out.push_str("\"></path></svg>");
    out
}

fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c if c.is_control() => {
                let _ = write!(out, "&#{};", c as u32);
            }
            c => out.push(c),
        }
    }
}

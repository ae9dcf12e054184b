use std::fmt;

/// A parse error from a textual radius spec such as `"default=8,tl=24"`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusSpecError {
    pub message: String,
    /// 1-based column of the offending entry.
    pub col: usize,
}

impl RadiusSpecError {
    pub(crate) fn new(msg: impl Into<String>, col: usize) -> Self {
        Self { message: msg.into(), col }
    }
}

impl fmt::Display for RadiusSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "radius spec error at column {}: {}", self.col, self.message)
    }
}

impl std::error::Error for RadiusSpecError {}

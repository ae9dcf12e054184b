use std::fmt::Write;

/// Decimal places used for non-integral coordinates.
pub const DEFAULT_PRECISION: usize = 4;

/// Appends `value` in path-data form.
///
/// Integral values print without a decimal point (`-0` prints as `0`);
/// anything else prints fixed to `precision` decimal places.
pub fn write_number(out: &mut String, value: f64, precision: usize) {
    if value == 0.0 {
        out.push('0');
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        let _ = write!(out, "{}", value as i64);
    } else {
        let _ = write!(out, "{value:.precision$}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        let mut out = String::new();
        write_number(&mut out, value, DEFAULT_PRECISION);
        out
    }

    #[test] fn integral() { assert_eq!(fmt(300.0), "300"); }
    #[test] fn negative_integral() { assert_eq!(fmt(-200.0), "-200"); }
    #[test] fn negative_zero() { assert_eq!(fmt(-0.0), "0"); }
    #[test] fn fractional() { assert_eq!(fmt(12.345678), "12.3457"); }
    #[test] fn half() { assert_eq!(fmt(50.5), "50.5000"); }
    #[test] fn tiny_negative() { assert_eq!(fmt(-0.00001), "-0.0000"); }

    #[test]
    fn custom_precision() {
        let mut out = String::new();
        write_number(&mut out, 1.0 / 3.0, 2);
        assert_eq!(out, "0.33");
    }
}

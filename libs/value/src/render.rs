//! Canonical string rendering of tagged values.
//!
//! This is the representation used for map-key fingerprints, so two values
//! that render identically are the same key.

use std::fmt;

use crate::value::{Color, SassList, SassMap, SassNumber, SassValue};

impl fmt::Display for SassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SassValue::String(s) => f.write_str(s),
            SassValue::Number(n) => fmt::Display::fmt(n, f),
            SassValue::Bool(true) => f.write_str("true"),
            SassValue::Bool(false) => f.write_str("false"),
            SassValue::Null => f.write_str("null"),
            SassValue::Color(c) => fmt::Display::fmt(c, f),
            SassValue::List(l) => fmt::Display::fmt(l, f),
            SassValue::Map(m) => fmt::Display::fmt(m, f),
            SassValue::Error(_) => f.write_str("ERROR!"),
        }
    }
}

/// Renders a number the way the preprocessor's host prints it.
///
/// Shortest round-trip digits, `-0` folds into `0`, non-finite values are
/// `Infinity`, `-Infinity` and `NaN`, and magnitudes of `1e21` and above or
/// below `1e-6` switch to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

impl fmt::Display for SassNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            format_number(self.r),
            format_number(self.g),
            format_number(self.b),
            format_number(self.a)
        )
    }
}

impl fmt::Display for SassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.separator() { ", " } else { " " };
        f.write_str("(")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            fmt::Display::fmt(item, f)?;
        }
        // `(5px,)`: single-element comma lists keep their trailing comma.
        if self.len() == 1 && self.separator() {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for SassMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str(")")
    }
}

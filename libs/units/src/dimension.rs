use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

use sassbridge_value::{format_number, SassNumber, SassType, SassValue};

use crate::error::{Error, Result};
use crate::units::Units;

/// A number with symbolic units.
///
/// Every constructor normalizes the units (see [`Units::normalized`]), and
/// every operation returns a new value.
///
/// ```
/// use sassbridge_units::Dimension;
///
/// let speed = Dimension::new(10.0, "px").divide(&Dimension::new(2.0, "s"));
/// assert_eq!(speed.to_string(), "5px/s");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dimension {
    value: f64,
    units: Units,
}

impl Dimension {
    pub fn new(value: f64, units: impl Into<Units>) -> Self {
        Self {
            value,
            units: units.into().normalized(),
        }
    }

    pub fn unitless(value: f64) -> Self {
        Self::new(value, Units::none())
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn units(&self) -> &Units {
        &self.units
    }

    pub fn numerator_units(&self) -> &[String] {
        &self.units.numerator
    }

    pub fn denominator_units(&self) -> &[String] {
        &self.units.denominator
    }

    pub fn is_unitless(&self) -> bool {
        self.units.is_empty()
    }

    /// Units rendered as `n1*n2/d1*d2`; empty for a unitless value.
    pub fn unit_str(&self) -> String {
        self.units.to_string()
    }

    pub fn type_of(&self) -> SassType {
        SassType::Number
    }

    /// `self + other`, in the units of `self`.
    pub fn add(&self, other: &Dimension) -> Result<Dimension> {
        let other = other.convert_to(&self.units)?;
        Ok(Self::new(self.value + other.value, &self.units))
    }

    /// `self - other`, in the units of `self`.
    pub fn subtract(&self, other: &Dimension) -> Result<Dimension> {
        let other = other.convert_to(&self.units)?;
        Ok(Self::new(self.value - other.value, &self.units))
    }

    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let numerator = concat(&self.units.numerator, &other.units.numerator);
        let denominator = concat(&self.units.denominator, &other.units.denominator);
        Self::new(self.value * other.value, (numerator, denominator))
    }

    pub fn divide(&self, other: &Dimension) -> Dimension {
        let numerator = concat(&self.units.numerator, &other.units.denominator);
        let denominator = concat(&self.units.denominator, &other.units.numerator);
        Self::new(self.value / other.value, (numerator, denominator))
    }

    /// Orders `self` against `other` once `other` is expressed in `self`'s units.
    ///
    /// NaN compares equal to everything.
    pub fn compare_to(&self, other: &Dimension) -> Result<Ordering> {
        let other = other.convert_to(&self.units)?;
        Ok(self
            .value
            .partial_cmp(&other.value)
            .unwrap_or(Ordering::Equal))
    }

    pub fn lt(&self, other: &Dimension) -> Result<bool> {
        let other = other.convert_to(&self.units)?;
        Ok(self.value < other.value)
    }

    pub fn lte(&self, other: &Dimension) -> Result<bool> {
        let other = other.convert_to(&self.units)?;
        Ok(self.value <= other.value)
    }

    pub fn gt(&self, other: &Dimension) -> Result<bool> {
        let other = other.convert_to(&self.units)?;
        Ok(self.value > other.value)
    }

    pub fn gte(&self, other: &Dimension) -> Result<bool> {
        let other = other.convert_to(&self.units)?;
        Ok(self.value >= other.value)
    }

    /// Numeric equality after unit conversion; unlike `==`, `1px` equals a
    /// unitless `1`.
    pub fn equals(&self, other: &Dimension) -> Result<bool> {
        let other = other.convert_to(&self.units)?;
        Ok(self.value == other.value)
    }

    /// Re-expresses `self` in the target units.
    ///
    /// A unitless value takes on the target units as given. Otherwise the
    /// target must list exactly the same symbols in the same order on each
    /// side; the result keeps `self`'s own units.
    pub fn convert_to(&self, target: impl Into<Units>) -> Result<Dimension> {
        let target = target.into();
        if self.is_unitless() {
            return Ok(Self::new(self.value, target));
        }
        if self.units.numerator != target.numerator
            || self.units.denominator != target.denominator
        {
            tracing::debug!(from = %self.units, to = %target, "incompatible units");
            return Err(Error::IncompatibleUnits {
                from: self.unit_str(),
                to: target.to_string(),
            });
        }
        Ok(self.clone())
    }

    /// The tagged number for this dimension, which holds at most one unit.
    pub fn to_sass_number(&self) -> Result<SassNumber> {
        if self.units.numerator.len() > 1 || !self.units.denominator.is_empty() {
            return Err(Error::UnsupportedUnit(self.unit_str()));
        }
        let unit = self.units.numerator.first().cloned().unwrap_or_default();
        Ok(SassNumber::new(self.value, unit))
    }

    pub fn to_sass(&self) -> Result<SassValue> {
        self.to_sass_number().map(SassValue::Number)
    }
}

fn concat(left: &[String], right: &[String]) -> Vec<String> {
    left.iter().chain(right).cloned().collect()
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.units)
    }
}

impl From<&SassNumber> for Dimension {
    fn from(number: &SassNumber) -> Self {
        Dimension::new(number.value, number.unit.as_str())
    }
}

impl From<SassNumber> for Dimension {
    fn from(number: SassNumber) -> Self {
        Dimension::from(&number)
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::unitless(value)
    }
}

impl Mul for &Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Self) -> Dimension {
        self.multiply(rhs)
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(&rhs)
    }
}

impl Div for &Dimension {
    type Output = Dimension;

    fn div(self, rhs: Self) -> Dimension {
        self.divide(rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(&rhs)
    }
}

impl FromStr for Dimension {
    type Err = Error;

    /// Parses `<number><units>`, e.g. `10px`, `-1.5e2em` or `3px*px/s`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let end = number_len(s).ok_or_else(|| Error::Parse(s.to_owned()))?;
        let value: f64 = s[..end].parse().map_err(|_| Error::Parse(s.to_owned()))?;
        Ok(Dimension::new(value, s[end..].trim()))
    }
}

/// Byte length of the leading numeric literal, if there is one.
fn number_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let digits = |mut i: usize| {
        while bytes.get(i).is_some_and(|b| b.is_ascii_digit() || *b == b'.') {
            i += 1;
        }
        i
    };

    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits(start);
    if end == start {
        return None;
    }

    // Only an `e` followed by digits is an exponent; `10em` is ten ems.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let mut exp_end = exp;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp {
            end = exp_end;
        }
    }
    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_len() {
        assert_eq!(number_len("10px"), Some(2));
        assert_eq!(number_len("-1.5em"), Some(4));
        assert_eq!(number_len("2e3px"), Some(3));
        assert_eq!(number_len("10em"), Some(2));
        assert_eq!(number_len("1e-2"), Some(4));
        assert_eq!(number_len("px"), None);
        assert_eq!(number_len("-"), None);
    }

    #[test]
    fn test_from_str() {
        let d: Dimension = "3px*px/s".parse().unwrap();
        assert_eq!(d.value(), 3.0);
        assert_eq!(d.unit_str(), "px*px/s");

        let d: Dimension = "-1.5e2em".parse().unwrap();
        assert_eq!(d.value(), -150.0);
        assert_eq!(d.unit_str(), "em");

        assert_eq!(
            "px".parse::<Dimension>(),
            Err(Error::Parse("px".to_owned()))
        );
        assert!("1.2.3px".parse::<Dimension>().is_err());
    }
}

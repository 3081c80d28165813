//! Tagged value representation
//!
//! `SassValue` mirrors the preprocessor's runtime classes one variant per class.
//! Lists and maps expose the same index-based surface the preprocessor does so
//! that backend adapters can fill them slot by slot.

use crate::error::{Error, Result};
use crate::types::SassType;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SassValue {
    String(String),
    Number(SassNumber),
    Bool(bool),
    Null,
    Color(Color),
    List(SassList),
    Map(SassMap),
    Error(String),
}

impl SassValue {
    pub const TRUE: SassValue = SassValue::Bool(true);
    pub const FALSE: SassValue = SassValue::Bool(false);
    pub const NULL: SassValue = SassValue::Null;

    pub fn string(value: impl Into<String>) -> Self {
        SassValue::String(value.into())
    }

    pub fn number(value: f64, unit: impl Into<String>) -> Self {
        SassValue::Number(SassNumber::new(value, unit))
    }

    pub fn unitless(value: f64) -> Self {
        SassValue::Number(SassNumber::unitless(value))
    }

    pub fn boolean(value: bool) -> Self {
        if value {
            SassValue::TRUE
        } else {
            SassValue::FALSE
        }
    }

    pub fn type_of(&self) -> SassType {
        match self {
            SassValue::String(_) => SassType::String,
            SassValue::Number(_) => SassType::Number,
            SassValue::Bool(_) => SassType::Bool,
            SassValue::Null => SassType::Null,
            SassValue::Color(_) => SassType::Color,
            SassValue::List(_) => SassType::List,
            SassValue::Map(_) => SassType::Map,
            SassValue::Error(_) => SassType::Error,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SassValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&SassNumber> {
        match self {
            SassValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SassValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&SassList> {
        match self {
            SassValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&SassMap> {
        match self {
            SassValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<SassNumber> for SassValue {
    fn from(value: SassNumber) -> Self {
        SassValue::Number(value)
    }
}

impl From<Color> for SassValue {
    fn from(value: Color) -> Self {
        SassValue::Color(value)
    }
}

impl From<SassList> for SassValue {
    fn from(value: SassList) -> Self {
        SassValue::List(value)
    }
}

impl From<SassMap> for SassValue {
    fn from(value: SassMap) -> Self {
        SassValue::Map(value)
    }
}

/// A number carrying at most one unit symbol (empty string = unitless).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SassNumber {
    pub value: f64,
    pub unit: String,
}

impl SassNumber {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn unitless(value: f64) -> Self {
        Self::new(value, "")
    }

    pub fn is_unitless(&self) -> bool {
        self.unit.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
}

/// Ordered list with a separator flag (`true` = comma separated).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SassList {
    items: Vec<SassValue>,
    comma: bool,
}

impl Default for SassList {
    fn default() -> Self {
        Self::new()
    }
}

impl SassList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            comma: true,
        }
    }

    /// A comma separated list of `len` null slots.
    pub fn with_len(len: usize) -> Self {
        Self {
            items: vec![SassValue::Null; len],
            comma: true,
        }
    }

    pub fn from_values(items: Vec<SassValue>, comma: bool) -> Self {
        Self { items, comma }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SassValue> {
        self.items.get(index)
    }

    pub fn set(&mut self, index: usize, value: SassValue) -> Result<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn push(&mut self, value: SassValue) {
        self.items.push(value);
    }

    pub fn separator(&self) -> bool {
        self.comma
    }

    pub fn set_separator(&mut self, comma: bool) {
        self.comma = comma;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SassValue> {
        self.items.iter()
    }

    pub fn into_values(self) -> Vec<SassValue> {
        self.items
    }
}

impl<'a> IntoIterator for &'a SassList {
    type Item = &'a SassValue;
    type IntoIter = std::slice::Iter<'a, SassValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The preprocessor's own map: parallel key and value slots in insertion order.
///
/// Uniqueness of keys is the preprocessor's responsibility; this type does not
/// check it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SassMap {
    keys: Vec<SassValue>,
    values: Vec<SassValue>,
}

impl SassMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map of `len` entries whose keys and values are all null.
    pub fn with_len(len: usize) -> Self {
        Self {
            keys: vec![SassValue::Null; len],
            values: vec![SassValue::Null; len],
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key(&self, index: usize) -> Option<&SassValue> {
        self.keys.get(index)
    }

    pub fn value(&self, index: usize) -> Option<&SassValue> {
        self.values.get(index)
    }

    pub fn set_key(&mut self, index: usize, key: SassValue) -> Result<()> {
        let len = self.keys.len();
        let slot = self
            .keys
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = key;
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: SassValue) -> Result<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn push(&mut self, key: SassValue, value: SassValue) {
        self.keys.push(key);
        self.values.push(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SassValue, &SassValue)> {
        self.keys.iter().zip(self.values.iter())
    }
}

impl FromIterator<(SassValue, SassValue)> for SassMap {
    fn from_iter<I: IntoIterator<Item = (SassValue, SassValue)>>(iter: I) -> Self {
        let (keys, values) = iter.into_iter().unzip();
        Self { keys, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_slots() {
        let mut list = SassList::with_len(2);
        assert_eq!(list.get(0), Some(&SassValue::Null));
        list.set(1, SassValue::TRUE).unwrap();
        assert_eq!(list.get(1), Some(&SassValue::TRUE));
        assert_eq!(
            list.set(2, SassValue::NULL),
            Err(Error::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert!(list.separator());
    }

    #[test]
    fn test_map_slots() {
        let mut map = SassMap::with_len(1);
        map.set_key(0, SassValue::string("a")).unwrap();
        map.set_value(0, SassValue::unitless(1.0)).unwrap();
        assert_eq!(map.key(0), Some(&SassValue::string("a")));
        assert_eq!(map.value(0), Some(&SassValue::unitless(1.0)));
        assert!(map.set_value(3, SassValue::NULL).is_err());
    }

    #[test]
    fn test_boolean_singletons() {
        assert_eq!(SassValue::boolean(true), SassValue::TRUE);
        assert_eq!(SassValue::boolean(false), SassValue::FALSE);
        assert_eq!(SassValue::NULL.type_of(), SassType::Null);
    }
}

//! Host-side values
//!
//! `NativeValue` is the shape application code works with before values are
//! handed to the preprocessor and after they come back.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use sassbridge_units::Dimension;
use sassbridge_value::SassValue;

use crate::error::Result;
use crate::map::ValueMap;

/// Capability of producing a tagged value.
///
/// [`cast_to_sass`](crate::cast_to_sass) delegates to this before any other
/// rule, which lets custom types choose their own representation.
pub trait ToSass: fmt::Debug + Send + Sync {
    fn to_sass(&self) -> Result<SassValue>;
}

impl ToSass for Dimension {
    fn to_sass(&self) -> Result<SassValue> {
        Ok(Dimension::to_sass(self)?)
    }
}

impl ToSass for ValueMap {
    fn to_sass(&self) -> Result<SassValue> {
        Ok(ValueMap::to_sass(self))
    }
}

impl ToSass for SassValue {
    fn to_sass(&self) -> Result<SassValue> {
        Ok(self.clone())
    }
}

/// An ordered sequence plus its list separator.
///
/// `separator` rides alongside the items rather than inside them:
/// `Some(true)` is comma separated, `Some(false)` space separated and `None`
/// leaves the choice to the consumer (comma when cast to a tagged list).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NativeList {
    pub items: Vec<NativeValue>,
    pub separator: Option<bool>,
}

impl NativeList {
    pub fn new(items: Vec<NativeValue>) -> Self {
        Self {
            items,
            separator: None,
        }
    }

    pub fn with_separator(items: Vec<NativeValue>, comma: bool) -> Self {
        Self {
            items,
            separator: Some(comma),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub enum NativeValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(NativeList),
    /// A plain object: string keys in enumeration order.
    Object(IndexMap<String, NativeValue>),
    Dimension(Dimension),
    Map(ValueMap),
    /// Already tagged; passed through unchanged.
    Sass(SassValue),
    Custom(Arc<dyn ToSass>),
    /// A host value with no tagged form (a function or symbol handle),
    /// carried by its description.
    Opaque(String),
}

impl NativeValue {
    pub fn custom(value: impl ToSass + 'static) -> Self {
        NativeValue::Custom(Arc::new(value))
    }

    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<NativeValue>,
    {
        NativeValue::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, NativeValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            NativeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NativeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            NativeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&NativeList> {
        match self {
            NativeValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, NativeValue>> {
        match self {
            NativeValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_dimension(&self) -> Option<&Dimension> {
        match self {
            NativeValue::Dimension(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            NativeValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut ValueMap> {
        match self {
            NativeValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sass(&self) -> Option<&SassValue> {
        match self {
            NativeValue::Sass(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for NativeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NativeValue::Null, NativeValue::Null) => true,
            (NativeValue::Bool(a), NativeValue::Bool(b)) => a == b,
            (NativeValue::Number(a), NativeValue::Number(b)) => a == b,
            (NativeValue::String(a), NativeValue::String(b)) => a == b,
            (NativeValue::List(a), NativeValue::List(b)) => a == b,
            (NativeValue::Object(a), NativeValue::Object(b)) => {
                a.len() == b.len() && a.iter().eq(b.iter())
            }
            (NativeValue::Dimension(a), NativeValue::Dimension(b)) => a == b,
            (NativeValue::Map(a), NativeValue::Map(b)) => a == b,
            (NativeValue::Sass(a), NativeValue::Sass(b)) => a == b,
            (NativeValue::Custom(a), NativeValue::Custom(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (NativeValue::Opaque(a), NativeValue::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Null => f.write_str("null"),
            NativeValue::Bool(b) => write!(f, "{b}"),
            NativeValue::Number(n) => write!(f, "{n}"),
            NativeValue::String(s) => write!(f, "{s:?}"),
            NativeValue::List(list) => {
                f.write_str("[")?;
                for (i, item) in list.items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            NativeValue::Object(object) => {
                f.write_str("{")?;
                for (i, (key, value)) in object.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
            NativeValue::Dimension(d) => write!(f, "{d}"),
            NativeValue::Map(m) => write!(f, "{m}"),
            NativeValue::Sass(v) => write!(f, "{v}"),
            NativeValue::Custom(c) => write!(f, "{c:?}"),
            NativeValue::Opaque(desc) => f.write_str(desc),
        }
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Bool(value)
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Number(value)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        NativeValue::Number(f64::from(value))
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::String(value.to_owned())
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        NativeValue::String(value)
    }
}

impl From<NativeList> for NativeValue {
    fn from(value: NativeList) -> Self {
        NativeValue::List(value)
    }
}

impl<T: Into<NativeValue>> From<Vec<T>> for NativeValue {
    fn from(items: Vec<T>) -> Self {
        NativeValue::List(NativeList::new(items.into_iter().map(Into::into).collect()))
    }
}

impl From<IndexMap<String, NativeValue>> for NativeValue {
    fn from(value: IndexMap<String, NativeValue>) -> Self {
        NativeValue::Object(value)
    }
}

impl From<Dimension> for NativeValue {
    fn from(value: Dimension) -> Self {
        NativeValue::Dimension(value)
    }
}

impl From<ValueMap> for NativeValue {
    fn from(value: ValueMap) -> Self {
        NativeValue::Map(value)
    }
}

impl From<SassValue> for NativeValue {
    fn from(value: SassValue) -> Self {
        NativeValue::Sass(value)
    }
}

impl<T: Into<NativeValue>> From<Option<T>> for NativeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(NativeValue::Null, Into::into)
    }
}

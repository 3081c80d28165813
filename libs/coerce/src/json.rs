//! JSON bridge for [`NativeValue`]
//!
//! JSON arrays become comma lists, objects keep their key order
//! (`serde_json` is built with `preserve_order`).

use sassbridge_value::SassValue;
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};
use crate::map::ValueMap;
use crate::native::{NativeList, NativeValue};

impl From<&Value> for NativeValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => NativeValue::Null,
            Value::Bool(b) => NativeValue::Bool(*b),
            Value::Number(n) => NativeValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => NativeValue::String(s.clone()),
            Value::Array(items) => {
                NativeValue::List(NativeList::new(items.iter().map(NativeValue::from).collect()))
            }
            Value::Object(object) => NativeValue::Object(
                object
                    .iter()
                    .map(|(k, v)| (k.clone(), NativeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for NativeValue {
    fn from(value: Value) -> Self {
        NativeValue::from(&value)
    }
}

impl NativeValue {
    /// Renders the value as JSON.
    ///
    /// Unitless dimensions become numbers and dimensions with units become
    /// their string form (`"10px"`). Maps become objects keyed by the
    /// rendering of their keys. Non-finite numbers become `null`.
    pub fn to_json(&self) -> Result<Value> {
        Ok(match self {
            NativeValue::Null => Value::Null,
            NativeValue::Bool(b) => Value::Bool(*b),
            NativeValue::Number(n) => number(*n),
            NativeValue::String(s) => Value::String(s.clone()),
            NativeValue::List(list) => Value::Array(
                list.items
                    .iter()
                    .map(NativeValue::to_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
            NativeValue::Object(object) => {
                let mut out = Map::with_capacity(object.len());
                for (key, value) in object {
                    out.insert(key.clone(), value.to_json()?);
                }
                Value::Object(out)
            }
            NativeValue::Dimension(d) if d.is_unitless() => number(d.value()),
            NativeValue::Dimension(d) => Value::String(d.to_string()),
            NativeValue::Map(m) => value_map_to_json(m)?,
            NativeValue::Sass(v) => sass_to_json(v)?,
            NativeValue::Custom(custom) => sass_to_json(&custom.to_sass()?)?,
            NativeValue::Opaque(desc) => return Err(Error::UnsupportedValue(desc.clone())),
        })
    }
}

/// Whole numbers that `f64` represents exactly serialize as integers.
fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Value::from(n as i64);
    }
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}

fn value_map_to_json(map: &ValueMap) -> Result<Value> {
    let mut object = Map::with_capacity(map.len());
    for (key, value) in map {
        object.insert(key_string(key), value.to_native().to_json()?);
    }
    Ok(Value::Object(object))
}

fn sass_to_json(value: &SassValue) -> Result<Value> {
    match value {
        SassValue::Color(_) | SassValue::Error(_) => Ok(Value::String(value.to_string())),
        other => crate::cast_to_native(other).to_json(),
    }
}

fn key_string(key: &SassValue) -> String {
    match key.as_str() {
        Some(s) => s.to_owned(),
        None => key.to_string(),
    }
}

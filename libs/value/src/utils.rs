//! Free helper functions over tagged values.
//!
//! Everything here dispatches on `SassValue::type_of()`; there is no
//! per-type registration step.

use crate::error::{Error, Result};
use crate::types::SassType;
use crate::value::{SassMap, SassValue};

/// Structural identity key for a tagged value: `<type>:<rendering>`.
///
/// Maps keyed by tagged values compare keys through this string, so any two
/// values with the same type and canonical rendering are the same key.
pub fn fingerprint(value: &SassValue) -> String {
    format!("{}:{}", value.type_of(), value)
}

pub fn type_of(value: &SassValue) -> SassType {
    value.type_of()
}

pub fn sass_string(value: &SassValue) -> String {
    value.to_string()
}

pub fn is_null(value: &SassValue) -> bool {
    value.type_of() == SassType::Null
}

/// Sass truthiness: only `null` and `false` are falsy.
pub fn is_falsy(value: &SassValue) -> bool {
    matches!(value, SassValue::Null | SassValue::Bool(false))
}

/// An empty map and an empty list are indistinguishable in Sass source (`()`).
pub fn is_empty_map(value: &SassValue) -> bool {
    match value {
        SassValue::Map(m) => m.is_empty(),
        SassValue::List(l) => l.is_empty(),
        _ => false,
    }
}

/// Replaces an empty list with an empty map; any other value is returned as is.
pub fn handle_empty_map(value: SassValue) -> SassValue {
    match value {
        SassValue::List(ref l) if l.is_empty() => SassValue::Map(SassMap::new()),
        other => other,
    }
}

pub fn is_type(value: &SassValue, ty: SassType) -> bool {
    value.type_of() == ty || (ty == SassType::Map && is_empty_map(value))
}

pub fn assert_type(value: &SassValue, ty: SassType) -> Result<()> {
    if is_type(value, ty) {
        Ok(())
    } else {
        tracing::debug!(expected = %ty, found = %value.type_of(), "type assertion failed");
        Err(Error::UnexpectedType {
            expected: ty,
            found: value.to_string(),
        })
    }
}

/// Strips one pair of matching surrounding quotes from a string.
///
/// `null` passes through untouched; any other non-string is a type error.
pub fn unquote(value: &SassValue) -> Result<SassValue> {
    if is_null(value) {
        return Ok(value.clone());
    }
    assert_type(value, SassType::String)?;
    let text = value.as_str().unwrap_or_default();
    Ok(SassValue::string(strip_quotes(text)))
}

/// Quoted text spanning a line terminator is left as is.
fn strip_quotes(text: &str) -> &str {
    const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            if inner.contains(LINE_TERMINATORS) {
                return text;
            }
            return inner;
        }
    }
    text
}

use indexmap::IndexMap;
use sassbridge_units::Dimension;
use sassbridge_value::{SassList, SassMap, SassValue};

use crate::error::{Error, Result};
use crate::map::ValueMap;
use crate::native::{NativeList, NativeValue, ToSass};

/// Converts a host value into a tagged value.
///
/// | host value          | tagged value                          |
/// |---------------------|---------------------------------------|
/// | `Custom` (`ToSass`) | whatever `to_sass` returns            |
/// | `String`            | unquoted string                       |
/// | `Bool`              | `true` / `false`                      |
/// | `Null`              | `null`                                |
/// | `Number`            | unitless number                       |
/// | `List`              | list, comma separated unless set      |
/// | `Sass`              | itself                                |
/// | `Object`            | map with string keys                  |
///
/// `Dimension` and `Map` go through their own `ToSass` impls. `Opaque` values
/// fail with [`Error::UnsupportedValue`].
pub fn cast_to_sass(value: &NativeValue) -> Result<SassValue> {
    match value {
        NativeValue::Custom(custom) => custom.to_sass(),
        NativeValue::Dimension(d) => ToSass::to_sass(d),
        NativeValue::Map(m) => Ok(m.to_sass()),
        NativeValue::String(s) => Ok(SassValue::string(s.as_str())),
        NativeValue::Bool(b) => Ok(SassValue::boolean(*b)),
        NativeValue::Null => Ok(SassValue::NULL),
        NativeValue::Number(n) => Ok(SassValue::unitless(*n)),
        NativeValue::List(list) => {
            let items = list
                .items
                .iter()
                .map(cast_to_sass)
                .collect::<Result<Vec<_>>>()?;
            Ok(SassValue::List(SassList::from_values(
                items,
                list.separator.unwrap_or(true),
            )))
        }
        NativeValue::Sass(v) => {
            tracing::trace!(value = %v, "passing tagged value through");
            Ok(v.clone())
        }
        NativeValue::Object(object) => {
            let mut map = SassMap::new();
            for (key, value) in object {
                map.push(SassValue::string(key.as_str()), cast_to_sass(value)?);
            }
            Ok(SassValue::Map(map))
        }
        NativeValue::Opaque(desc) => {
            tracing::debug!(value = %desc, "no tagged form for host value");
            Err(Error::UnsupportedValue(desc.clone()))
        }
    }
}

/// Converts a tagged value into a host value, turning maps into [`ValueMap`]s.
pub fn cast_to_native(value: &SassValue) -> NativeValue {
    cast_to_native_with(value, &|m: &SassMap| NativeValue::Map(ValueMap::from(m)))
}

/// [`cast_to_native`] with a caller-chosen conversion for a top-level map.
///
/// The caster applies to `value` itself only. List elements are always
/// converted with the default caster.
pub fn cast_to_native_with<F>(value: &SassValue, map_caster: &F) -> NativeValue
where
    F: Fn(&SassMap) -> NativeValue,
{
    match value {
        SassValue::String(s) => NativeValue::String(s.clone()),
        SassValue::Bool(b) => NativeValue::Bool(*b),
        SassValue::Null => NativeValue::Null,
        SassValue::Number(n) => NativeValue::Dimension(Dimension::from(n)),
        SassValue::Map(m) => map_caster(m),
        SassValue::List(list) => NativeValue::List(NativeList::with_separator(
            list.iter().map(cast_to_native).collect(),
            list.separator(),
        )),
        SassValue::Color(_) | SassValue::Error(_) => NativeValue::Sass(value.clone()),
    }
}

/// Converts a map whose keys are strings into a plain object.
///
/// Values are cast with [`cast_to_native_with`], turning nested maps into
/// objects as well. Non-string keys are used by their rendering.
pub fn map_to_object(map: &SassMap) -> IndexMap<String, NativeValue> {
    map.iter()
        .map(|(key, value)| {
            let key = match key.as_str() {
                Some(s) => s.to_owned(),
                None => key.to_string(),
            };
            (key, cast_to_native_with(value, &object_caster))
        })
        .collect()
}

fn object_caster(map: &SassMap) -> NativeValue {
    NativeValue::Object(map_to_object(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separator_is_comma() {
        let list = NativeValue::List(NativeList::new(vec![
            NativeValue::Number(1.0),
            NativeValue::Number(2.0),
        ]));
        let tagged = cast_to_sass(&list).unwrap();
        assert!(tagged.as_list().unwrap().separator());
    }

    #[test]
    fn test_space_separator_is_kept() {
        let list = NativeValue::List(NativeList::with_separator(vec!["a".into()], false));
        let tagged = cast_to_sass(&list).unwrap();
        assert!(!tagged.as_list().unwrap().separator());
        assert_eq!(cast_to_native(&tagged).as_list().unwrap().separator, Some(false));
    }

    #[test]
    fn test_list_elements_ignore_custom_caster() {
        let mut inner = SassMap::new();
        inner.push(SassValue::string("k"), SassValue::TRUE);
        let list = SassValue::List(SassList::from_values(vec![SassValue::Map(inner)], true));
        let native = cast_to_native_with(&list, &object_caster);
        let items = &native.as_list().unwrap().items;
        assert!(items[0].as_map().is_some());
    }
}

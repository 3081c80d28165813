//! Equality-keyed ordered map
//!
//! `ValueMap` stores entries under the [`fingerprint`] of their key, so two
//! structurally identical tagged values address the same entry even when they
//! are distinct instances. Iteration follows first-insertion order:
//! overwriting a value keeps its position, deleting and re-inserting moves the
//! entry to the end.

use std::fmt;

use indexmap::IndexMap;
use sassbridge_value::{fingerprint, SassMap, SassType, SassValue};

use crate::coercion::cast_to_native;
use crate::error::{Error, Result};
use crate::facet::Coerce;
use crate::native::NativeValue;

/// A value stored in a [`ValueMap`]: a tagged value, or a nested `ValueMap`
/// produced by [`ValueMap::deep_update`].
#[derive(Clone, Debug, PartialEq)]
pub enum MapValue {
    Sass(SassValue),
    Map(ValueMap),
}

impl MapValue {
    pub fn type_of(&self) -> SassType {
        match self {
            MapValue::Sass(v) => v.type_of(),
            MapValue::Map(_) => SassType::Map,
        }
    }

    pub fn is_map(&self) -> bool {
        self.type_of() == SassType::Map
    }

    pub fn as_sass(&self) -> Option<&SassValue> {
        match self {
            MapValue::Sass(v) => Some(v),
            MapValue::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            MapValue::Map(m) => Some(m),
            MapValue::Sass(_) => None,
        }
    }

    /// The tagged form, converting nested maps recursively.
    pub fn to_sass(&self) -> SassValue {
        match self {
            MapValue::Sass(v) => v.clone(),
            MapValue::Map(m) => m.to_sass(),
        }
    }

    pub fn to_native(&self) -> NativeValue {
        match self {
            MapValue::Sass(v) => cast_to_native(v),
            MapValue::Map(m) => NativeValue::Map(m.clone()),
        }
    }

    /// Either kind of map as a `ValueMap`; `None` for anything else.
    fn to_value_map(&self) -> Option<ValueMap> {
        match self {
            MapValue::Map(m) => Some(m.clone()),
            MapValue::Sass(SassValue::Map(m)) => Some(ValueMap::from(m)),
            MapValue::Sass(_) => None,
        }
    }
}

impl fmt::Display for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapValue::Sass(v) => fmt::Display::fmt(v, f),
            MapValue::Map(m) => fmt::Display::fmt(m, f),
        }
    }
}

impl From<SassValue> for MapValue {
    fn from(value: SassValue) -> Self {
        MapValue::Sass(value)
    }
}

impl From<SassMap> for MapValue {
    fn from(value: SassMap) -> Self {
        MapValue::Sass(SassValue::Map(value))
    }
}

impl From<ValueMap> for MapValue {
    fn from(value: ValueMap) -> Self {
        MapValue::Map(value)
    }
}

impl TryFrom<NativeValue> for MapValue {
    type Error = Error;

    /// Only values that are already tagged (or already a `ValueMap`) are
    /// accepted; nothing is coerced.
    fn try_from(value: NativeValue) -> Result<Self> {
        match value {
            NativeValue::Sass(v) => Ok(MapValue::Sass(v)),
            NativeValue::Map(m) => Ok(MapValue::Map(m)),
            other => Err(Error::InvalidValue(other.to_string())),
        }
    }
}

/// Entries that can be merged into a [`ValueMap`].
pub trait MergeSource {
    fn merge_entries(&self) -> Vec<(SassValue, MapValue)>;
}

impl MergeSource for ValueMap {
    fn merge_entries(&self) -> Vec<(SassValue, MapValue)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl MergeSource for SassMap {
    fn merge_entries(&self) -> Vec<(SassValue, MapValue)> {
        self.iter()
            .map(|(k, v)| (k.clone(), MapValue::Sass(v.clone())))
            .collect()
    }
}

impl MergeSource for MapValue {
    fn merge_entries(&self) -> Vec<(SassValue, MapValue)> {
        match self {
            MapValue::Map(m) => m.merge_entries(),
            MapValue::Sass(SassValue::Map(m)) => m.merge_entries(),
            MapValue::Sass(_) => Vec::new(),
        }
    }
}

type ConflictHandler<'a> = dyn FnMut(&SassValue, MapValue, &MapValue) -> MapValue + 'a;

fn keep_new(_key: &SassValue, new: MapValue, _old: &MapValue) -> MapValue {
    new
}

#[derive(Clone, Debug, Default)]
pub struct ValueMap {
    entries: IndexMap<String, (SassValue, MapValue)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    /// Inserts or overwrites; an overwritten entry keeps its position.
    pub fn set(&mut self, key: SassValue, value: impl Into<MapValue>) -> &mut Self {
        self.entries.insert(fingerprint(&key), (key, value.into()));
        self
    }

    /// `set` for values whose type is only known at runtime.
    ///
    /// Both key and value must already be tagged (`NativeValue::Sass`) or be a
    /// `ValueMap`; anything else fails with [`Error::InvalidValue`].
    pub fn try_set(&mut self, key: NativeValue, value: NativeValue) -> Result<&mut Self> {
        let key = match key {
            NativeValue::Sass(k) => k,
            NativeValue::Map(m) => m.to_sass(),
            other => {
                tracing::debug!(key = %other, "rejected map key");
                return Err(Error::InvalidValue(other.to_string()));
            }
        };
        let value = MapValue::try_from(value)?;
        Ok(self.set(key, value))
    }

    pub fn get(&self, key: &SassValue) -> Option<&MapValue> {
        self.entries.get(&fingerprint(key)).map(|(_, v)| v)
    }

    pub fn has(&self, key: &SassValue) -> bool {
        self.entries.contains_key(&fingerprint(key))
    }

    /// Removes the entry for `key`, keeping the order of the others.
    pub fn delete(&mut self, key: &SassValue) -> bool {
        self.entries.shift_remove(&fingerprint(key)).is_some()
    }

    /// Shallow merge; on a key collision the incoming value wins.
    pub fn update(&mut self, source: &impl MergeSource) -> &mut Self {
        self.update_with(source, keep_new)
    }

    /// Shallow merge; `on_conflict(key, new, old)` decides the value stored
    /// for keys already present.
    pub fn update_with<F>(
        &mut self,
        source: &impl MergeSource,
        mut on_conflict: F,
    ) -> &mut Self
    where
        F: FnMut(&SassValue, MapValue, &MapValue) -> MapValue,
    {
        for (key, value) in source.merge_entries() {
            let value = match self.get(&key) {
                Some(old) => on_conflict(&key, value, old),
                None => value,
            };
            self.set(key, value);
        }
        self
    }

    /// Recursive merge: where both sides hold a map, the maps are merged
    /// instead of one replacing the other.
    pub fn deep_update(&mut self, source: &impl MergeSource) -> &mut Self {
        self.deep_update_with(source, keep_new)
    }

    pub fn deep_update_with<F>(
        &mut self,
        source: &impl MergeSource,
        mut on_conflict: F,
    ) -> &mut Self
    where
        F: FnMut(&SassValue, MapValue, &MapValue) -> MapValue,
    {
        self.deep_merge(source.merge_entries(), &mut on_conflict);
        self
    }

    fn deep_merge(
        &mut self,
        entries: Vec<(SassValue, MapValue)>,
        on_conflict: &mut ConflictHandler<'_>,
    ) {
        for (key, value) in entries {
            let merged = match self.get(&key) {
                None => value,
                Some(old) => match old.to_value_map() {
                    Some(mut nested) if value.is_map() => {
                        nested.deep_merge(value.merge_entries(), on_conflict);
                        MapValue::Map(nested)
                    }
                    _ => on_conflict(&key, value, old),
                },
            };
            self.set(key, merged);
        }
    }

    /// Snapshot as the preprocessor's own map, converting nested `ValueMap`s.
    pub fn to_sass_map(&self) -> SassMap {
        self.iter().map(|(k, v)| (k.clone(), v.to_sass())).collect()
    }

    pub fn to_sass(&self) -> SassValue {
        SassValue::Map(self.to_sass_map())
    }

    pub fn type_of(&self) -> SassType {
        SassType::Map
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.values(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &SassValue> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &MapValue> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Calls `f(value, key, map)` for every entry in order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&MapValue, &SassValue, &ValueMap),
    {
        for (key, value) in self.iter() {
            f(value, key, self);
        }
    }

    /// Accessors that coerce keys and values to and from native values.
    pub fn coerce(&mut self) -> Coerce<'_> {
        Coerce::new(self)
    }
}

impl PartialEq for ValueMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl fmt::Display for ValueMap {
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

impl From<&SassMap> for ValueMap {
    fn from(map: &SassMap) -> Self {
        let mut out = ValueMap::new();
        out.update(map);
        out
    }
}

impl From<SassMap> for ValueMap {
    fn from(map: SassMap) -> Self {
        ValueMap::from(&map)
    }
}

impl FromIterator<(SassValue, MapValue)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (SassValue, MapValue)>>(iter: I) -> Self {
        let mut out = ValueMap::new();
        for (key, value) in iter {
            out.set(key, value);
        }
        out
    }
}

/// Entries of a [`ValueMap`] in insertion order.
pub struct Iter<'a> {
    inner: indexmap::map::Values<'a, String, (SassValue, MapValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a SassValue, &'a MapValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a SassValue, &'a MapValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

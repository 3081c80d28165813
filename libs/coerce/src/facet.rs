use crate::coercion::cast_to_sass;
use crate::error::Result;
use crate::map::{MapValue, ValueMap};
use crate::native::NativeValue;

/// Native-value view of a [`ValueMap`].
///
/// Keys and values are cast with [`cast_to_sass`] on the way in and with
/// [`cast_to_native`](crate::cast_to_native) on the way out, so callers can
/// write `map.coerce().set("width", 10)` instead of building tagged values.
pub struct Coerce<'a> {
    map: &'a mut ValueMap,
}

impl<'a> Coerce<'a> {
    pub(crate) fn new(map: &'a mut ValueMap) -> Self {
        Self { map }
    }

    /// `Ok(None)` when the key is absent.
    pub fn get(&self, key: impl Into<NativeValue>) -> Result<Option<NativeValue>> {
        let key = cast_to_sass(&key.into())?;
        Ok(self.map.get(&key).map(MapValue::to_native))
    }

    pub fn set(
        &mut self,
        key: impl Into<NativeValue>,
        value: impl Into<NativeValue>,
    ) -> Result<&mut Self> {
        let key = cast_to_sass(&key.into())?;
        let value = cast_to_sass(&value.into())?;
        self.map.set(key, value);
        Ok(self)
    }

    pub fn has(&self, key: impl Into<NativeValue>) -> Result<bool> {
        let key = cast_to_sass(&key.into())?;
        Ok(self.map.has(&key))
    }

    pub fn delete(&mut self, key: impl Into<NativeValue>) -> Result<bool> {
        let key = cast_to_sass(&key.into())?;
        Ok(self.map.delete(&key))
    }
}

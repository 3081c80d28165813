//! Host value ⇄ tagged value coercion
//!
//! - [`cast_to_sass`] turns a [`NativeValue`] (strings, numbers, lists, plain
//!   objects, dimensions, ...) into a [`SassValue`].
//! - [`cast_to_native`] goes the other way: numbers come back as
//!   [`Dimension`]s and maps as [`ValueMap`]s.
//! - [`ValueMap`] is an insertion-ordered map keyed by tagged values, compared
//!   structurally through their [`fingerprint`](sassbridge_value::fingerprint).
//!
//! ```
//! use sassbridge_coerce::{cast_to_native, cast_to_sass, NativeValue};
//!
//! let tagged = cast_to_sass(&NativeValue::from(vec!["one", "two"])).unwrap();
//! assert_eq!(tagged.to_string(), "(one, two)");
//!
//! let back = cast_to_native(&tagged);
//! assert_eq!(back.as_list().map(|l| l.separator), Some(Some(true)));
//! ```

#![forbid(unsafe_code)]

mod coercion;
mod error;
mod facet;
mod json;
mod map;
mod native;

pub use coercion::{cast_to_native, cast_to_native_with, cast_to_sass, map_to_object};
pub use error::{Error, Result};
pub use facet::Coerce;
pub use map::{Iter, MapValue, MergeSource, ValueMap};
pub use native::{NativeList, NativeValue, ToSass};

pub use sassbridge_units::Dimension;
pub use sassbridge_value::SassValue;

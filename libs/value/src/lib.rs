//! Tagged Sass values
//!
//! This crate models the value universe a Sass preprocessor hands to custom
//! functions: strings, numbers with a single unit, booleans, null, colors,
//! ordered lists and ordered maps. It provides:
//! - `SassValue` and its payload types, with the index-based accessors the
//!   preprocessor exposes (`len`, `get`, `set`, `key`, `value`, separator flag)
//! - `SassType`: the type tag used by Sass's `type-of()`
//! - Canonical rendering (`Display`) and the `fingerprint` derived from it
//! - Free helper functions (`is_null`, `is_falsy`, `unquote`, ...) dispatching on
//!   the type tag

#![forbid(unsafe_code)]

mod error;
mod render;
mod types;
mod utils;
mod value;

pub use error::{Error, Result};
pub use render::format_number;
pub use types::SassType;
pub use utils::{
    assert_type, fingerprint, handle_empty_map, is_empty_map, is_falsy, is_null, is_type,
    sass_string, type_of, unquote,
};
pub use value::{Color, SassList, SassMap, SassNumber, SassValue};

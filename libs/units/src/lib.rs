//! Sass dimensions
//!
//! A `Dimension` is a number together with a list of numerator units and a
//! list of denominator units (`10px`, `3px*px/em`, `1/s`). Units are handled
//! symbolically: a unit that appears on both sides cancels, and addition,
//! subtraction and comparison require both operands to carry the same units
//! (a unitless operand adopts the other side's units). No conversion between
//! different unit symbols is attempted.

#![forbid(unsafe_code)]

mod dimension;
mod error;
mod units;

pub use dimension::Dimension;
pub use error::{Error, Result};
pub use units::Units;

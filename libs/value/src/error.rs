use thiserror::Error;

use crate::types::SassType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Expected {expected} but got {found}")]
    UnexpectedType { expected: SassType, found: String },
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A map key or value that is not a tagged value.
    #[error("Not a legal Sass value: {0}")]
    InvalidValue(String),

    /// A host value with no tagged representation.
    #[error("Don't know how to coerce: {0}")]
    UnsupportedValue(String),

    #[error(transparent)]
    Units(#[from] sassbridge_units::Error),

    #[error(transparent)]
    Value(#[from] sassbridge_value::Error),
}

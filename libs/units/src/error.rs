use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Cannot convert {from} to {to}")]
    IncompatibleUnits { from: String, to: String },

    #[error("complex unit '{0}' cannot be represented as a single-unit number")]
    UnsupportedUnit(String),

    #[error("invalid dimension '{0}'")]
    Parse(String),
}

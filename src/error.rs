//! Error types for operations on values

use crate::value::ValueType;
use thiserror::Error;

pub type RuntimeResult<T> = std::result::Result<T, RuntimeError>;

/// Any error that can occur while operating on values
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An object operation was attempted with `undefined` or `null`, e.g.
    /// searching for either of them in a prototype chain
    #[error("Cannot read property '{property}' of {value}")]
    Nullish {
        /// The operation that was attempted
        property: &'static str,
        /// Which of the two no-value markers was given
        value: ValueType,
    },

    /// A value could not be converted to or from a native Rust type
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// An error converting between [Value](crate::Value) and native Rust types
#[derive(Debug, Error)]
pub enum ValueError {
    /// A value of one type appeared where another type was expected
    #[error("Type error: expected {expected}, received {actual}")]
    Type {
        expected: ValueType,
        actual: ValueType,
    },

    /// A number could not be converted exactly to the target type
    #[error("Cannot represent {value} as {target}")]
    Number {
        value: String,
        target: &'static str,
    },

    /// Catch-all for errors raised during serialization/deserialization
    #[error("{0}")]
    Custom(String),
}

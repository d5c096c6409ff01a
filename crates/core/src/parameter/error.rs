use thiserror::Error;

use super::Parameter;

/// A value that is out of domain or of the wrong shape for its parameter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid value {value} for `{parameter}`: {reason}")]
pub struct InvalidParameter {
    /// The parameter the value was meant for.
    pub parameter: Parameter,
    /// A short rendering of the rejected value.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl InvalidParameter {
    pub fn new(
        parameter: Parameter,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            parameter,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Error returned when a document key does not name a parameter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown parameter `{0}`")]
pub struct UnknownParameter(pub String);

/// Errors that can occur when reading a parameter document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("parameter document must be a JSON object")]
    NotAnObject,

    #[error(transparent)]
    Invalid(#[from] InvalidParameter),
}

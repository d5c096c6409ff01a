use std::fmt;

use thiserror::Error;

use tabula_core::{
    DocumentError, EvalError, InvalidParameter, MethodKind, Parameter, UnknownMethod,
};

use crate::{equation, linear};

/// Errors surfaced by sessions and the solver facade.
///
/// Each variant is scoped to the single call that produced it; none is
/// retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A supplied value is out of domain or of the wrong shape.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),

    /// Required parameters were absent when the method was run.
    #[error("{method} is missing required parameters: {}", Names(.missing))]
    MissingParameters {
        missing: Vec<Parameter>,
        method: MethodKind,
    },

    /// The function could not be evaluated at a point the method needed.
    #[error("function evaluation failed at x = {x}: {source}")]
    Evaluation {
        x: f64,
        #[source]
        source: EvalError,
    },

    /// Elimination found no usable pivot.
    ///
    /// `stages` holds the trace up to the failing stage.
    #[error("matrix is singular: no usable pivot at stage {stage}")]
    SingularMatrix {
        stage: usize,
        stages: Vec<linear::Stage>,
    },

    /// No successful run has produced a result for the current parameters.
    #[error("no result available")]
    NoResultAvailable,

    #[error("parameter document must be a JSON object")]
    InvalidDocument,

    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),

    #[error("no method selected")]
    NoMethodSelected,
}

impl From<DocumentError> for Error {
    fn from(error: DocumentError) -> Self {
        match error {
            DocumentError::NotAnObject => Self::InvalidDocument,
            DocumentError::Invalid(invalid) => Self::InvalidParameter(invalid),
        }
    }
}

/// A rejected bracket is reported against the lower bound, with both
/// endpoints in the rendered value.
impl From<equation::Error> for Error {
    fn from(error: equation::Error) -> Self {
        match error {
            equation::Error::InvalidBracket { bracket, source } => {
                Self::InvalidParameter(InvalidParameter::new(
                    Parameter::LowerBound,
                    format!("[{}, {}]", bracket[0], bracket[1]),
                    source.to_string(),
                ))
            }
            equation::Error::Evaluation { x, source } => Self::Evaluation { x, source },
        }
    }
}

impl From<linear::Error> for Error {
    fn from(error: linear::Error) -> Self {
        let reason = error.to_string();
        match error {
            linear::Error::Singular { stage, stages } => Self::SingularMatrix { stage, stages },
            linear::Error::Empty | linear::Error::NotSquare { .. } => {
                Self::InvalidParameter(InvalidParameter::new(Parameter::MatrixA, "", reason))
            }
            linear::Error::DimensionMismatch { len, .. } => Self::InvalidParameter(
                InvalidParameter::new(Parameter::VectorB, format!("vector of length {len}"), reason),
            ),
        }
    }
}

/// Comma-separated parameter names for error messages.
struct Names<'a>(&'a [Parameter]);

impl fmt::Display for Names<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, parameter) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_message_lists_names() {
        let error = Error::MissingParameters {
            missing: vec![Parameter::LowerBound, Parameter::UpperBound],
            method: MethodKind::Bisection,
        };

        assert_eq!(
            error.to_string(),
            "bisection is missing required parameters: lowerBound, upperBound"
        );
    }

    #[test]
    fn document_errors_map_into_the_taxonomy() {
        assert_eq!(
            Error::from(DocumentError::NotAnObject),
            Error::InvalidDocument
        );
    }

    #[test]
    fn bracket_errors_become_invalid_parameters() {
        let error = Error::from(equation::Error::InvalidBracket {
            bracket: [1.0, 2.0],
            source: equation::BracketError::ZeroWidth,
        });

        let Error::InvalidParameter(invalid) = error else {
            panic!("expected an invalid parameter");
        };
        assert_eq!(invalid.parameter, Parameter::LowerBound);
        assert_eq!(invalid.value, "[1, 2]");
    }
}

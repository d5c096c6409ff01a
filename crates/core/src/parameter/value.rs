use std::fmt;

use ndarray::{Array1, Array2};
use serde_json::Value as Json;

use crate::{Expression, PivotingStrategy};

use super::{InvalidParameter, Parameter};

/// The kind of value a parameter holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Expression,
    Real,
    Count,
    Strategy,
    Matrix,
    Vector,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Expression => "expression",
            Self::Real => "real number",
            Self::Count => "positive integer",
            Self::Strategy => "pivoting strategy",
            Self::Matrix => "matrix",
            Self::Vector => "vector",
        })
    }
}

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Expression(Expression),
    Real(f64),
    Count(usize),
    Strategy(PivotingStrategy),
    Matrix(Array2<f64>),
    Vector(Array1<f64>),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Expression(_) => ValueKind::Expression,
            Self::Real(_) => ValueKind::Real,
            Self::Count(_) => ValueKind::Count,
            Self::Strategy(_) => ValueKind::Strategy,
            Self::Matrix(_) => ValueKind::Matrix,
            Self::Vector(_) => ValueKind::Vector,
        }
    }

    /// Checks that this value is acceptable for `parameter`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if the kind does not match or the value is
    /// out of the parameter's domain.
    pub(super) fn check(&self, parameter: Parameter) -> Result<(), InvalidParameter> {
        let reject = |reason: &str| -> Result<(), InvalidParameter> {
            Err(InvalidParameter::new(parameter, self.to_string(), reason))
        };

        if self.kind() != parameter.kind() {
            return reject(&format!("expected a {}", parameter.kind()));
        }

        match (parameter, self) {
            (_, Self::Real(value)) if !value.is_finite() => reject("must be finite"),
            (Parameter::Tolerance, Self::Real(value)) if *value <= 0.0 => {
                reject("must be positive")
            }
            (Parameter::Delta, Self::Real(value)) if *value == 0.0 => reject("must be non-zero"),
            (_, Self::Count(0)) => reject("must be at least 1"),
            (_, Self::Matrix(matrix)) if matrix.is_empty() => reject("must not be empty"),
            (_, Self::Matrix(matrix)) if !matrix.is_square() => reject("must be square"),
            (_, Self::Matrix(matrix)) if matrix.iter().any(|v| !v.is_finite()) => {
                reject("entries must be finite")
            }
            (_, Self::Vector(vector)) if vector.is_empty() => reject("must not be empty"),
            (_, Self::Vector(vector)) if vector.iter().any(|v| !v.is_finite()) => {
                reject("entries must be finite")
            }
            _ => Ok(()),
        }
    }

    /// Converts a document value into a value for `parameter`.
    ///
    /// Expressions are given as strings and parsed here, so a malformed
    /// expression is rejected as an invalid parameter.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameter`] if the JSON value cannot be converted.
    pub(super) fn from_json(parameter: Parameter, json: &Json) -> Result<Self, InvalidParameter> {
        let reject = |reason: String| InvalidParameter::new(parameter, json.to_string(), reason);
        let expected = || reject(format!("expected a {}", parameter.kind()));

        match parameter.kind() {
            ValueKind::Expression => {
                let text = json.as_str().ok_or_else(expected)?;
                Expression::parse(text)
                    .map(Self::Expression)
                    .map_err(|error| reject(error.to_string()))
            }
            ValueKind::Real => json.as_f64().map(Self::Real).ok_or_else(expected),
            ValueKind::Count => json_count(json).map(Self::Count).ok_or_else(expected),
            ValueKind::Strategy => {
                let text = json.as_str().ok_or_else(expected)?;
                text.parse()
                    .map(Self::Strategy)
                    .map_err(|error: crate::UnknownStrategy| reject(error.to_string()))
            }
            ValueKind::Vector => json_row(json).map(Self::Vector).ok_or_else(expected),
            ValueKind::Matrix => {
                let rows = json.as_array().ok_or_else(expected)?;
                let rows = rows
                    .iter()
                    .map(json_row)
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(expected)?;
                let ncols = rows.first().map_or(0, Array1::len);
                if rows.iter().any(|row| row.len() != ncols) {
                    return Err(reject("rows must all have the same length".to_owned()));
                }
                let flat: Vec<f64> = rows.iter().flat_map(|row| row.iter().copied()).collect();
                Array2::from_shape_vec((rows.len(), ncols), flat)
                    .map(Self::Matrix)
                    .map_err(|error| reject(error.to_string()))
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn json_count(json: &Json) -> Option<usize> {
    if let Some(count) = json.as_u64() {
        return usize::try_from(count).ok();
    }
    let value = json.as_f64()?;
    (value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX.into()).then(|| value as usize)
}

fn json_row(json: &Json) -> Option<Array1<f64>> {
    json.as_array()?
        .iter()
        .map(Json::as_f64)
        .collect::<Option<Vec<_>>>()
        .map(Array1::from)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expression) => write!(f, "\"{expression}\""),
            Self::Real(value) => write!(f, "{value}"),
            Self::Count(count) => write!(f, "{count}"),
            Self::Strategy(strategy) => write!(f, "{strategy}"),
            Self::Matrix(matrix) => write!(f, "{}x{} matrix", matrix.nrows(), matrix.ncols()),
            Self::Vector(vector) => write!(f, "vector of length {}", vector.len()),
        }
    }
}

impl From<Expression> for Value {
    fn from(expression: Expression) -> Self {
        Self::Expression(expression)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<usize> for Value {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

impl From<PivotingStrategy> for Value {
    fn from(strategy: PivotingStrategy) -> Self {
        Self::Strategy(strategy)
    }
}

impl From<Array2<f64>> for Value {
    fn from(matrix: Array2<f64>) -> Self {
        Self::Matrix(matrix)
    }
}

impl From<Array1<f64>> for Value {
    fn from(vector: Array1<f64>) -> Self {
        Self::Vector(vector)
    }
}

//! The closed set of method parameters and the validated store that holds them.

mod error;
mod set;
mod value;

use std::{fmt, str::FromStr};

use serde::Serialize;

pub use error::{DocumentError, InvalidParameter, UnknownParameter};
pub use set::ParameterSet;
pub use value::{Value, ValueKind};

/// A parameter name.
///
/// Each name has a fixed value kind (see [`Parameter::kind`]). Whether a
/// parameter is required, optional, or ignored depends only on the method
/// that runs (see [`MethodKind`](crate::MethodKind)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    /// The function `f(x)` whose root is sought.
    Function,
    /// The first derivative `f'(x)`.
    Derivative,
    /// The second derivative `f''(x)`.
    SecondDerivative,
    /// The iteration function `g(x)` for fixed-point iteration.
    IterationFunction,
    /// The starting point `x0`.
    InitialValue,
    /// The second seed `x1` for the secant method.
    SecondInitialValue,
    /// Left end of a bracketing interval.
    LowerBound,
    /// Right end of a bracketing interval.
    UpperBound,
    /// Step size for incremental search.
    Delta,
    /// Stopping tolerance.
    Tolerance,
    /// Iteration limit.
    MaxIterations,
    /// Pivoting strategy for Gaussian elimination.
    Strategy,
    /// Coefficient matrix `A`.
    MatrixA,
    /// Right-hand side vector `b`.
    VectorB,
}

impl Parameter {
    /// All parameters, in declaration order.
    pub const ALL: [Parameter; 14] = [
        Self::Function,
        Self::Derivative,
        Self::SecondDerivative,
        Self::IterationFunction,
        Self::InitialValue,
        Self::SecondInitialValue,
        Self::LowerBound,
        Self::UpperBound,
        Self::Delta,
        Self::Tolerance,
        Self::MaxIterations,
        Self::Strategy,
        Self::MatrixA,
        Self::VectorB,
    ];

    /// Returns the canonical document key of the parameter.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Derivative => "derivative",
            Self::SecondDerivative => "secondDerivative",
            Self::IterationFunction => "iterationFunction",
            Self::InitialValue => "initialValue",
            Self::SecondInitialValue => "secondInitialValue",
            Self::LowerBound => "lowerBound",
            Self::UpperBound => "upperBound",
            Self::Delta => "delta",
            Self::Tolerance => "tolerance",
            Self::MaxIterations => "maxIterations",
            Self::Strategy => "strategy",
            Self::MatrixA => "matrixA",
            Self::VectorB => "vectorB",
        }
    }

    /// Returns the kind of value this parameter holds.
    #[must_use]
    pub fn kind(self) -> ValueKind {
        match self {
            Self::Function | Self::Derivative | Self::SecondDerivative | Self::IterationFunction => {
                ValueKind::Expression
            }
            Self::InitialValue
            | Self::SecondInitialValue
            | Self::LowerBound
            | Self::UpperBound
            | Self::Delta
            | Self::Tolerance => ValueKind::Real,
            Self::MaxIterations => ValueKind::Count,
            Self::Strategy => ValueKind::Strategy,
            Self::MatrixA => ValueKind::Matrix,
            Self::VectorB => ValueKind::Vector,
        }
    }

    fn alias(self) -> Option<&'static str> {
        match self {
            Self::IterationFunction => Some("g"),
            Self::InitialValue => Some("x0"),
            Self::SecondInitialValue => Some("x1"),
            Self::MatrixA => Some("a"),
            Self::VectorB => Some("b"),
            _ => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a document key, ignoring ASCII case.
///
/// Short aliases are accepted: `g`, `x0`, `x1`, `A`, and `b`.
impl FromStr for Parameter {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|parameter| {
                parameter.name().eq_ignore_ascii_case(s)
                    || parameter
                        .alias()
                        .is_some_and(|alias| alias.eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| UnknownParameter(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("function".parse(), Ok(Parameter::Function));
        assert_eq!("MaxIterations".parse(), Ok(Parameter::MaxIterations));
        assert_eq!("x0".parse(), Ok(Parameter::InitialValue));
        assert_eq!("A".parse(), Ok(Parameter::MatrixA));
        assert_eq!("b".parse(), Ok(Parameter::VectorB));
        assert_eq!(
            "colour".parse::<Parameter>(),
            Err(UnknownParameter("colour".to_owned()))
        );
    }

    #[test]
    fn names_round_trip() {
        for parameter in Parameter::ALL {
            assert_eq!(parameter.name().parse(), Ok(parameter));
        }
    }
}

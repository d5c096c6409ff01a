use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::Parameter;

/// Identifies a solving method.
///
/// The set is closed: every method the engine can run has a variant here, and
/// each variant fixes which parameters the method requires and which it
/// accepts with a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MethodKind {
    IncrementalSearch,
    Bisection,
    FalsePosition,
    FixedPoint,
    Newton,
    Secant,
    MultipleRoots,
    GaussianElimination,
}

/// Error returned when a method name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method `{0}`")]
pub struct UnknownMethod(pub String);

impl MethodKind {
    /// All method kinds, in declaration order.
    pub const ALL: [MethodKind; 8] = [
        Self::IncrementalSearch,
        Self::Bisection,
        Self::FalsePosition,
        Self::FixedPoint,
        Self::Newton,
        Self::Secant,
        Self::MultipleRoots,
        Self::GaussianElimination,
    ];

    /// Returns the canonical name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::IncrementalSearch => "incrementalSearch",
            Self::Bisection => "bisection",
            Self::FalsePosition => "falsePosition",
            Self::FixedPoint => "fixedPoint",
            Self::Newton => "newton",
            Self::Secant => "secant",
            Self::MultipleRoots => "multipleRoots",
            Self::GaussianElimination => "gaussianElimination",
        }
    }

    /// Returns the parameters the method needs before it can run.
    ///
    /// The order is stable and is the order in which missing parameters are
    /// reported.
    #[must_use]
    pub fn required_parameters(self) -> &'static [Parameter] {
        use Parameter::*;
        match self {
            Self::IncrementalSearch => &[Function, InitialValue, Delta],
            Self::Bisection | Self::FalsePosition => &[Function, LowerBound, UpperBound],
            Self::FixedPoint => &[Function, IterationFunction, InitialValue],
            Self::Newton => &[Function, InitialValue],
            Self::Secant => &[Function, InitialValue, SecondInitialValue],
            Self::MultipleRoots => &[Function, Derivative, SecondDerivative, InitialValue],
            Self::GaussianElimination => &[MatrixA, VectorB],
        }
    }

    /// Returns the parameters the method reads when present and otherwise
    /// replaces with a default.
    #[must_use]
    pub fn optional_parameters(self) -> &'static [Parameter] {
        use Parameter::*;
        match self {
            Self::IncrementalSearch => &[MaxIterations],
            Self::Bisection
            | Self::FalsePosition
            | Self::FixedPoint
            | Self::Secant
            | Self::MultipleRoots => &[Tolerance, MaxIterations],
            Self::Newton => &[Derivative, Tolerance, MaxIterations],
            Self::GaussianElimination => &[Strategy],
        }
    }

    /// Returns true if the method reads `parameter`, either as a required or
    /// as an optional parameter.
    #[must_use]
    pub fn reads(self, parameter: Parameter) -> bool {
        self.required_parameters().contains(&parameter)
            || self.optional_parameters().contains(&parameter)
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a method name, ignoring ASCII case and `-`, `_`, or space separators,
/// so `falsePosition`, `false_position`, and `False Position` all match.
impl FromStr for MethodKind {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}

/// Rule for choosing the elimination pivot at each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotingStrategy {
    /// Use the diagonal entry as the pivot.
    None,
    /// Swap in the row with the largest magnitude in the pivot column.
    #[default]
    Partial,
    /// Swap in the largest magnitude of the remaining submatrix, exchanging
    /// both rows and columns.
    Total,
}

/// Error returned when a pivoting strategy tag is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown pivoting strategy `{0}`")]
pub struct UnknownStrategy(pub String);

impl PivotingStrategy {
    /// Returns the canonical tag of the strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::Total => "total",
        }
    }
}

impl fmt::Display for PivotingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotingStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "none" | "simple" => Ok(Self::None),
            "partial" => Ok(Self::Partial),
            "total" | "complete" => Ok(Self::Total),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

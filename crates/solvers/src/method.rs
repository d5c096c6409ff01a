//! The method contract and its implementations.
//!
//! A [`Method`] knows which parameters it needs, how to cross-check them,
//! and how to solve once they are present. [`build`] maps each
//! [`MethodKind`] to a fresh, independently owned implementation.

mod bracketing;
mod elimination;
mod open;

use std::fmt;

use tabula_core::{
    Expression, InvalidParameter, MethodKind, Observer, Parameter, ParameterSet,
};

use crate::{
    Error, Report,
    equation::{Action, Config, ConfigError, Iteration},
};

pub use bracketing::{Bisection, FalsePosition, IncrementalSearch};
pub use elimination::GaussianElimination;
pub use open::{FixedPoint, MultipleRoots, Newton, Secant};

/// A solving method.
///
/// Callers normally go through [`Session`](crate::Session), which always
/// runs [`check_parameters`](Self::check_parameters) before
/// [`solve`](Self::solve).
pub trait Method: fmt::Debug {
    /// Identifies the method.
    fn kind(&self) -> MethodKind;

    /// Parameters that must be present before the method can run.
    fn required_parameters(&self) -> &'static [Parameter] {
        self.kind().required_parameters()
    }

    /// Parameters the method reads when present and defaults otherwise.
    fn optional_parameters(&self) -> &'static [Parameter] {
        self.kind().optional_parameters()
    }

    /// Fails with [`Error::MissingParameters`] if any required parameter is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns the missing names in the order of
    /// [`required_parameters`](Self::required_parameters).
    fn check_parameters(&self, parameters: &ParameterSet) -> Result<(), Error> {
        let missing = parameters.missing(self.required_parameters());
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingParameters {
                missing,
                method: self.kind(),
            })
        }
    }

    /// Checks constraints that involve more than one parameter.
    ///
    /// Runs on every configuration change, so it must accept sets where
    /// some parameters are still absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the offending parameter.
    fn validate(&self, _parameters: &ParameterSet) -> Result<(), Error> {
        Ok(())
    }

    /// Runs the algorithm, reporting each iteration to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required parameter is absent or the algorithm
    /// fails.
    fn solve(
        &self,
        parameters: &ParameterSet,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<Report, Error>;
}

/// Creates the method identified by `kind`.
#[must_use]
pub fn build(kind: MethodKind) -> Box<dyn Method> {
    match kind {
        MethodKind::IncrementalSearch => Box::new(IncrementalSearch),
        MethodKind::Bisection => Box::new(Bisection),
        MethodKind::FalsePosition => Box::new(FalsePosition),
        MethodKind::FixedPoint => Box::new(FixedPoint),
        MethodKind::Newton => Box::new(Newton),
        MethodKind::Secant => Box::new(Secant),
        MethodKind::MultipleRoots => Box::new(MultipleRoots),
        MethodKind::GaussianElimination => Box::new(GaussianElimination),
    }
}

fn missing(kind: MethodKind, parameter: Parameter) -> Error {
    Error::MissingParameters {
        missing: vec![parameter],
        method: kind,
    }
}

fn expression(
    parameters: &ParameterSet,
    kind: MethodKind,
    parameter: Parameter,
) -> Result<&Expression, Error> {
    parameters
        .expression(parameter)
        .ok_or_else(|| missing(kind, parameter))
}

fn real(parameters: &ParameterSet, kind: MethodKind, parameter: Parameter) -> Result<f64, Error> {
    parameters
        .real(parameter)
        .ok_or_else(|| missing(kind, parameter))
}

/// Builds the stopping criteria from the optional parameters.
fn config(parameters: &ParameterSet) -> Result<Config, Error> {
    let tolerance = parameters
        .real(Parameter::Tolerance)
        .unwrap_or(Config::DEFAULT_TOLERANCE);
    let max_iters = parameters
        .count(Parameter::MaxIterations)
        .unwrap_or(Config::DEFAULT_MAX_ITERS);

    Config::new(max_iters, tolerance).map_err(|error| {
        let (parameter, value) = match error {
            ConfigError::Tolerance => (Parameter::Tolerance, tolerance.to_string()),
            ConfigError::MaxIters => (Parameter::MaxIterations, max_iters.to_string()),
        };
        InvalidParameter::new(parameter, value, error.to_string()).into()
    })
}

/// Rejects two real parameters that hold the same value.
fn distinct(parameters: &ParameterSet, first: Parameter, second: Parameter) -> Result<(), Error> {
    match (parameters.real(first), parameters.real(second)) {
        (Some(a), Some(b)) if a == b => Err(InvalidParameter::new(
            second,
            b.to_string(),
            format!("must differ from `{first}`"),
        )
        .into()),
        _ => Ok(()),
    }
}

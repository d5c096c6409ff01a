use tabula_core::{MethodKind, Observer, Parameter, ParameterSet};

use crate::{
    Error, Report,
    equation::{Action, Iteration, fixed_point, multiple_roots, newton, secant},
};

use super::{Method, config, distinct, expression, real};

/// Fixed-point iteration `x = g(x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPoint;

impl Method for FixedPoint {
    fn kind(&self) -> MethodKind {
        MethodKind::FixedPoint
    }

    fn solve(
        &self,
        parameters: &ParameterSet,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<Report, Error> {
        let kind = self.kind();
        let f = expression(parameters, kind, Parameter::Function)?;
        let g = expression(parameters, kind, Parameter::IterationFunction)?;
        let x0 = real(parameters, kind, Parameter::InitialValue)?;

        let solution = fixed_point::solve(f, g, x0, &config(parameters)?, observer)?;
        Ok(solution.into())
    }
}

/// Newton–Raphson; estimates the derivative when none is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Newton;

impl Method for Newton {
    fn kind(&self) -> MethodKind {
        MethodKind::Newton
    }

    fn solve(
        &self,
        parameters: &ParameterSet,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<Report, Error> {
        let kind = self.kind();
        let f = expression(parameters, kind, Parameter::Function)?;
        let x0 = real(parameters, kind, Parameter::InitialValue)?;
        let config = config(parameters)?;

        let solution = match parameters.expression(Parameter::Derivative) {
            Some(df) => newton::solve(f, df, x0, &config, observer)?,
            None => newton::solve_estimated(f, x0, &config, observer)?,
        };
        Ok(solution.into())
    }
}

/// Secant iteration from two seeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secant;

impl Method for Secant {
    fn kind(&self) -> MethodKind {
        MethodKind::Secant
    }

    fn validate(&self, parameters: &ParameterSet) -> Result<(), Error> {
        distinct(
            parameters,
            Parameter::InitialValue,
            Parameter::SecondInitialValue,
        )
    }

    fn solve(
        &self,
        parameters: &ParameterSet,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<Report, Error> {
        let kind = self.kind();
        let f = expression(parameters, kind, Parameter::Function)?;
        let x0 = real(parameters, kind, Parameter::InitialValue)?;
        let x1 = real(parameters, kind, Parameter::SecondInitialValue)?;

        let solution = secant::solve(f, x0, x1, &config(parameters)?, observer)?;
        Ok(solution.into())
    }
}

/// Modified Newton for repeated roots.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleRoots;

impl Method for MultipleRoots {
    fn kind(&self) -> MethodKind {
        MethodKind::MultipleRoots
    }

    fn solve(
        &self,
        parameters: &ParameterSet,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<Report, Error> {
        let kind = self.kind();
        let f = expression(parameters, kind, Parameter::Function)?;
        let df = expression(parameters, kind, Parameter::Derivative)?;
        let d2f = expression(parameters, kind, Parameter::SecondDerivative)?;
        let x0 = real(parameters, kind, Parameter::InitialValue)?;

        let solution = multiple_roots::solve(f, df, d2f, x0, &config(parameters)?, observer)?;
        Ok(solution.into())
    }
}

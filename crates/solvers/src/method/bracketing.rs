use tabula_core::{Expression, Function, MethodKind, Observer, Parameter, ParameterSet};

use crate::{
    Error, Report,
    equation::{
        self, Action, BracketError, Config, Iteration, bisection, false_position,
        incremental_search, opposite_signs,
    },
};

use super::{Method, config, distinct, expression, real};

/// Steps from an initial value until the function changes sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementalSearch;

impl Method for IncrementalSearch {
    fn kind(&self) -> MethodKind {
        MethodKind::IncrementalSearch
    }

    fn solve(
        &self,
        parameters: &ParameterSet,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<Report, Error> {
        let kind = self.kind();
        let f = expression(parameters, kind, Parameter::Function)?;
        let x0 = real(parameters, kind, Parameter::InitialValue)?;
        let delta = real(parameters, kind, Parameter::Delta)?;
        let max_iters = parameters
            .count(Parameter::MaxIterations)
            .unwrap_or(Config::DEFAULT_MAX_ITERS);

        let solution = incremental_search::solve(f, x0, delta, max_iters, observer)?;
        Ok(solution.into())
    }
}

/// Bisection on `[lowerBound, upperBound]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bisection;

impl Method for Bisection {
    fn kind(&self) -> MethodKind {
        MethodKind::Bisection
    }

    fn validate(&self, parameters: &ParameterSet) -> Result<(), Error> {
        distinct(parameters, Parameter::LowerBound, Parameter::UpperBound)?;
        sign_change(parameters)
    }

    fn solve(
        &self,
        parameters: &ParameterSet,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<Report, Error> {
        let (f, bracket) = bracket_inputs(parameters, self.kind())?;
        let solution = bisection::solve(f, bracket, &config(parameters)?, observer)?;
        Ok(solution.into())
    }
}

/// False position on `[lowerBound, upperBound]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FalsePosition;

impl Method for FalsePosition {
    fn kind(&self) -> MethodKind {
        MethodKind::FalsePosition
    }

    fn validate(&self, parameters: &ParameterSet) -> Result<(), Error> {
        distinct(parameters, Parameter::LowerBound, Parameter::UpperBound)?;
        sign_change(parameters)
    }

    fn solve(
        &self,
        parameters: &ParameterSet,
        observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<Report, Error> {
        let (f, bracket) = bracket_inputs(parameters, self.kind())?;
        let solution = false_position::solve(f, bracket, &config(parameters)?, observer)?;
        Ok(solution.into())
    }
}

/// Rejects a complete bracket whose endpoint values do not change sign.
///
/// Endpoints where `f` cannot be evaluated are left for the run to report.
fn sign_change(parameters: &ParameterSet) -> Result<(), Error> {
    let (Some(f), Some(lower), Some(upper)) = (
        parameters.expression(Parameter::Function),
        parameters.real(Parameter::LowerBound),
        parameters.real(Parameter::UpperBound),
    ) else {
        return Ok(());
    };
    let (Ok(f_left), Ok(f_right)) = (f.eval(lower), f.eval(upper)) else {
        return Ok(());
    };

    if opposite_signs(f_left, f_right) {
        return Ok(());
    }
    Err(equation::Error::InvalidBracket {
        bracket: [lower, upper],
        source: BracketError::NoSignChange { f_left, f_right },
    }
    .into())
}

fn bracket_inputs(
    parameters: &ParameterSet,
    kind: MethodKind,
) -> Result<(&Expression, [f64; 2]), Error> {
    let f = expression(parameters, kind, Parameter::Function)?;
    let lower = real(parameters, kind, Parameter::LowerBound)?;
    let upper = real(parameters, kind, Parameter::UpperBound)?;
    Ok((f, [lower, upper]))
}

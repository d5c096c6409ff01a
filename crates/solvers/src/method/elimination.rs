use tabula_core::{InvalidParameter, MethodKind, Observer, Parameter, ParameterSet};

use crate::{
    Error, Report,
    equation::{Action, Iteration},
    linear,
};

use super::{Method, missing};

/// Gaussian elimination on `A·x = b`.
///
/// Elimination has no iteration records, so the observer is not called;
/// stages are logged at `debug` level instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianElimination;

impl Method for GaussianElimination {
    fn kind(&self) -> MethodKind {
        MethodKind::GaussianElimination
    }

    fn validate(&self, parameters: &ParameterSet) -> Result<(), Error> {
        let (Some(a), Some(b)) = (
            parameters.matrix(Parameter::MatrixA),
            parameters.vector(Parameter::VectorB),
        ) else {
            return Ok(());
        };

        if a.nrows() == b.len() {
            Ok(())
        } else {
            Err(InvalidParameter::new(
                Parameter::VectorB,
                format!("vector of length {}", b.len()),
                format!("length must match the {} rows of `matrixA`", a.nrows()),
            )
            .into())
        }
    }

    fn solve(
        &self,
        parameters: &ParameterSet,
        _observer: &mut dyn Observer<Iteration, Action>,
    ) -> Result<Report, Error> {
        let kind = self.kind();
        let a = parameters
            .matrix(Parameter::MatrixA)
            .ok_or_else(|| missing(kind, Parameter::MatrixA))?;
        let b = parameters
            .vector(Parameter::VectorB)
            .ok_or_else(|| missing(kind, Parameter::VectorB))?;
        let strategy = parameters
            .strategy(Parameter::Strategy)
            .unwrap_or_default();

        let solution = linear::solve(a, b, strategy)?;
        Ok(solution.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;
    use tabula_core::PivotingStrategy;

    #[test]
    fn defaults_to_partial_pivoting() {
        let set = ParameterSet::new()
            .with(Parameter::MatrixA, array![[0.0, 1.0], [1.0, 0.0]])
            .and_then(|set| set.with(Parameter::VectorB, array![2.0, 3.0]))
            .expect("valid values");

        let report = GaussianElimination.solve(&set, &mut ()).expect("regular");
        let solution = report.as_linear_system().expect("linear report");

        assert_eq!(solution.strategy, PivotingStrategy::Partial);
        assert_eq!(solution.x.to_vec(), vec![3.0, 2.0]);
    }

    #[test]
    fn singular_matrix_maps_into_the_taxonomy() {
        let set = ParameterSet::new()
            .with(Parameter::MatrixA, array![[0.0, 1.0], [1.0, 0.0]])
            .and_then(|set| set.with(Parameter::VectorB, array![2.0, 3.0]))
            .and_then(|set| set.with(Parameter::Strategy, PivotingStrategy::None))
            .expect("valid values");

        let error = GaussianElimination
            .solve(&set, &mut ())
            .expect_err("zero leading pivot");

        assert_eq!(
            error,
            Error::SingularMatrix {
                stage: 1,
                stages: Vec::new(),
            }
        );
    }

    #[test]
    fn mismatched_lengths_fail_validation() {
        let set = ParameterSet::new()
            .with(Parameter::MatrixA, array![[1.0, 0.0], [0.0, 1.0]])
            .and_then(|set| set.with(Parameter::VectorB, array![1.0, 2.0, 3.0]))
            .expect("valid values");

        let error = GaussianElimination.validate(&set).expect_err("3 != 2");

        assert!(matches!(
            error,
            Error::InvalidParameter(InvalidParameter {
                parameter: Parameter::VectorB,
                ..
            })
        ));
    }

    #[test]
    fn validation_waits_for_both_operands() {
        let set = ParameterSet::new()
            .with(Parameter::VectorB, array![1.0, 2.0, 3.0])
            .expect("valid value");

        assert!(GaussianElimination.validate(&set).is_ok());
    }
}

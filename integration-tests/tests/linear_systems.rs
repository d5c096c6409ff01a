use approx::assert_abs_diff_eq;
use serde_json::json;

use integration_tests::reference_system::{self, TRIANGULAR, X};
use tabula_core::{MethodKind, PivotingStrategy};
use tabula_solvers::{Error, Solver};

fn solve(strategy: &str) -> tabula_solvers::linear::Solution {
    let mut solver = Solver::new();
    solver.select(MethodKind::GaussianElimination);
    solver
        .setup_json(&reference_system::document(strategy))
        .expect("valid document");

    solver
        .solve()
        .expect("system is regular")
        .as_linear_system()
        .cloned()
        .expect("linear report")
}

#[test]
fn partial_pivoting_matches_the_reference_solution() {
    let solution = solve("partial");

    assert_eq!(solution.strategy, PivotingStrategy::Partial);
    for (actual, expected) in solution.x.iter().zip(X) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-8);
    }
}

#[test]
fn partial_pivoting_penultimate_stage_matches_the_reference_matrix() {
    let solution = solve("partial");
    let penultimate = &solution.stages[X.len() - 2];

    for (i, expected_row) in TRIANGULAR.iter().enumerate() {
        for (actual, expected) in penultimate.row(i).iter().zip(expected_row) {
            assert_abs_diff_eq!(*actual, *expected, epsilon = 1e-6);
        }
    }
}

#[test]
fn every_strategy_reports_the_same_solution() {
    for strategy in ["none", "partial", "total"] {
        let solution = solve(strategy);
        for (actual, expected) in solution.x.iter().zip(X) {
            assert_abs_diff_eq!(*actual, expected, epsilon = 1e-8);
        }
    }
}

#[test]
fn total_pivoting_swaps_columns_but_reports_original_order() {
    let solution = solve("total");

    let columns = &solution.stages.last().expect("stages").columns;
    assert_ne!(columns, &vec![0, 1, 2, 3]);

    for (actual, expected) in solution.x.iter().zip(X) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-8);
    }
}

#[test]
fn strategy_defaults_to_partial() {
    let mut solver = Solver::new();
    solver.select(MethodKind::GaussianElimination);
    solver
        .setup_json(&json!({
            "matrixA": reference_system::A,
            "vectorB": reference_system::B,
        }))
        .expect("valid document");

    let report = solver.solve().expect("system is regular");

    assert_eq!(
        report.as_linear_system().map(|s| s.strategy),
        Some(PivotingStrategy::Partial)
    );
}

#[test]
fn singular_system_fails_with_partial_trace() {
    let mut solver = Solver::new();
    solver.select(MethodKind::GaussianElimination);
    solver
        .setup_json(&json!({
            "A": [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]],
            "b": [1.0, 2.0, 3.0],
        }))
        .expect("valid document");

    let error = solver.solve().expect_err("rank deficient");

    let Error::SingularMatrix { stage, stages } = error else {
        panic!("expected a singular matrix");
    };
    assert!(stage > 1);
    assert_eq!(stages.len(), stage - 1);
    assert!(matches!(
        solver.last_result(),
        Err(Error::NoResultAvailable)
    ));
}

#[test]
fn rejects_malformed_operands_at_setup() {
    let mut solver = Solver::new();
    solver.select(MethodKind::GaussianElimination);

    for document in [
        json!({ "A": [[1.0, 2.0], [3.0]] }),
        json!({ "A": [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]] }),
        json!({ "b": [] }),
        json!({ "strategy": "diagonal" }),
    ] {
        assert!(
            matches!(
                solver.setup_json(&document),
                Err(Error::InvalidParameter(_))
            ),
            "accepted {document}"
        );
    }

    solver
        .setup_json(&json!({ "A": [[1.0, 0.0], [0.0, 1.0]] }))
        .expect("valid matrix");
    assert!(matches!(
        solver.setup_json(&json!({ "b": [1.0, 2.0, 3.0] })),
        Err(Error::InvalidParameter(_))
    ));
    assert_eq!(
        solver.missing_parameters(),
        Ok(vec![tabula_core::Parameter::VectorB])
    );
}

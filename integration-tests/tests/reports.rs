use serde_json::json;
use tracing::Level;

use integration_tests::{cubic_bracket, reference_system};
use tabula_core::MethodKind;
use tabula_observers::{IterationBudget, StallGuard, TracingObserver};
use tabula_solvers::{Solver, equation::Status};

fn cubic_solver() -> Solver {
    let mut solver = Solver::new();
    solver.select(MethodKind::Bisection);
    solver.setup_json(&cubic_bracket()).expect("valid document");
    solver
}

#[test]
fn root_reports_render_as_procedure_tables() {
    let mut solver = cubic_solver();
    let document = solver
        .solve()
        .expect("converges")
        .to_json()
        .expect("finite numbers");

    assert_eq!(document["kind"], "root");
    assert_eq!(document["method"], "bisection");
    assert_eq!(document["status"], "converged");

    let rows = document["iterations"].as_array().expect("iteration table");
    assert_eq!(document["iters"], json!(rows.len()));

    let first = &rows[0];
    assert_eq!(first["iter"], 1);
    assert_eq!(first["x"], 1.5);
    assert_eq!(first["bracket"], json!([1.0, 2.0]));
    assert!(first.get("dfx").is_none());
    assert!(rows.iter().all(|row| row["error"].is_f64()));
}

#[test]
fn open_method_tables_start_with_the_seed() {
    let mut solver = Solver::new();
    solver.select(MethodKind::Newton);
    solver
        .setup_json(&json!({ "function": "x^2 - 2", "derivative": "2*x", "x0": 1.0 }))
        .expect("valid document");

    let document = solver
        .solve()
        .expect("converges")
        .to_json()
        .expect("finite numbers");

    let seed = &document["iterations"][0];
    assert_eq!(seed["iter"], 0);
    assert_eq!(seed["x"], 1.0);
    assert_eq!(seed["dfx"], 2.0);
    assert!(seed.get("error").is_none());
}

#[test]
fn linear_reports_carry_every_stage() {
    let mut solver = Solver::new();
    solver.select(MethodKind::GaussianElimination);
    solver
        .setup_json(&reference_system::document("total"))
        .expect("valid document");

    let document = solver
        .solve()
        .expect("system is regular")
        .to_json()
        .expect("finite numbers");

    assert_eq!(document["kind"], "linearSystem");
    assert_eq!(document["strategy"], "total");
    assert_eq!(document["x"].as_array().map(Vec::len), Some(4));

    let stages = document["stages"].as_array().expect("stage list");
    assert_eq!(stages.len(), 4);
    for (index, stage) in stages.iter().enumerate() {
        assert_eq!(stage["stage"], json!(index + 1));
        assert_eq!(stage["matrix"].as_array().map(Vec::len), Some(4));
        assert_eq!(stage["matrix"][0].as_array().map(Vec::len), Some(5));
        assert_eq!(stage["columns"].as_array().map(Vec::len), Some(4));
    }
}

#[test]
fn a_budget_truncates_the_table() {
    let mut solver = cubic_solver();
    let mut budget = IterationBudget::new(3);

    let solution = solver
        .solve_observed(&mut budget)
        .expect("runs")
        .as_root()
        .cloned()
        .expect("root report");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.iterations.len(), 3);
    assert_eq!(budget.seen(), 3);

    // An observed stop is still a successful run.
    assert!(solver.last_result().is_ok());
}

#[test]
fn a_stall_guard_ends_a_cycling_iteration() {
    let mut solver = Solver::new();
    solver.select(MethodKind::FixedPoint);
    solver
        .setup_json(&json!({ "function": "x - 0.5", "g": "1 - x", "x0": 0.0 }))
        .expect("valid document");
    let mut guard = StallGuard::new(3);

    let status = solver
        .solve_observed(&mut guard)
        .expect("runs")
        .as_root()
        .map(|solution| solution.status);

    assert_eq!(status, Some(Status::StoppedByObserver));
    assert_eq!(guard.best(), Some(1.0));
}

#[test]
fn tracing_observer_leaves_results_unchanged() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();

    let observed = tracing::subscriber::with_default(subscriber, || {
        let mut solver = cubic_solver();
        let mut observer = TracingObserver::new(Level::TRACE);
        let report = solver.solve_observed(&mut observer).expect("converges");
        report.clone()
    });

    let unobserved = cubic_solver().solve().expect("converges").clone();

    assert_eq!(observed, unobserved);
}

//! Bisection on a bracketing interval.
//!
//! Each iteration evaluates the midpoint of the current bracket and keeps the
//! half across which `f` changes sign, so the bracket width halves every
//! iteration. The error measure is the residual `|f(x_n)|`.

use tabula_core::{Function, MethodKind, Observer};

use super::{Action, Config, Error, Iteration, Solution, bracketing::search};

/// Finds a root of `f` in `bracket` by repeated halving.
///
/// The observer sees every iteration record and may stop the run early.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite, has zero width, or does not
/// satisfy `f(a)·f(b) < 0`, or if `f` cannot be evaluated at a required point.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Iteration, Action> + ?Sized,
{
    search(
        MethodKind::Bisection,
        f,
        bracket,
        config,
        observer,
        super::Bracket::midpoint,
    )
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(f, bracket, config, &mut ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use tabula_core::{EvalError, Expression};

    use crate::equation::{BracketError, Status};

    fn config(max_iters: usize, tolerance: f64) -> Config {
        Config::new(max_iters, tolerance).expect("valid config")
    }

    #[test]
    fn finds_square_root_of_two() {
        let f = |x: f64| x * x - 2.0;

        let solution =
            solve_unobserved(&f, [0.0, 2.0], &config(100, 1e-10)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.fx.abs() < 1e-10);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-9);
        assert_eq!(solution.iterations.len(), solution.iters);
    }

    #[test]
    fn bracket_width_halves_every_iteration() {
        let f = Expression::parse("x^3 - x - 2").expect("valid expression");

        let solution = solve_unobserved(&f, [1.0, 2.0], &config(30, 1e-12)).expect("should solve");

        let widths: Vec<f64> = solution
            .iterations
            .iter()
            .map(|iteration| {
                let [a, b] = iteration.bracket.expect("bisection records brackets");
                b - a
            })
            .collect();
        for pair in widths.windows(2) {
            assert_relative_eq!(pair[1], 0.5 * pair[0]);
        }
    }

    #[test]
    fn either_converges_or_exhausts_iterations() {
        let f = Expression::parse("exp(-x) - x").expect("valid expression");

        for max_iters in [1, 5, 20, 60] {
            let cfg = config(max_iters, 1e-9);
            let solution = solve_unobserved(&f, [0.0, 1.0], &cfg).expect("should run");
            assert!(
                solution.fx.abs() <= cfg.tolerance() || solution.iters == max_iters,
                "neither converged nor exhausted with max_iters = {max_iters}"
            );
        }
    }

    #[test]
    fn exact_midpoint_root_converges_immediately() {
        let f = |x: f64| x - 1.0;

        let solution = solve_unobserved(&f, [0.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 1.0);
    }

    #[test]
    fn accepts_endpoint_values_whose_product_underflows() {
        let f = |x: f64| 1e-200 * (x - 0.3);

        let solution = solve_unobserved(&f, [0.0, 1.0], &Config::default()).expect("should solve");

        // The residual is below any tolerance at the first midpoint.
        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.x, 0.5);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let f = |x: f64| x * x - 36.0;

        let solution = solve_unobserved(&f, [10.0, 0.0], &config(200, 1e-10))
            .expect("should solve with reversed bracket");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 6.0, epsilon = 1e-10);
        assert_eq!(solution.iterations[0].bracket, Some([0.0, 10.0]));
    }

    #[test]
    fn errors_on_no_sign_change() {
        let f = |x: f64| x * x - 9.0;

        let result = solve_unobserved(&f, [5.0, 10.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket {
                source: BracketError::NoSignChange { .. },
                ..
            })
        ));

        // An endpoint that is already a root does not bracket.
        let result = solve_unobserved(&f, [3.0, 10.0], &Config::default());
        assert!(matches!(result, Err(Error::InvalidBracket { .. })));
    }

    #[test]
    fn errors_on_degenerate_bracket() {
        let f = |x: f64| x;

        let result = solve_unobserved(&f, [5.0, 5.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket {
                source: BracketError::ZeroWidth,
                ..
            })
        ));

        let result = solve_unobserved(&f, [f64::NAN, 1.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidBracket {
                source: BracketError::NonFinite,
                ..
            })
        ));
    }

    #[test]
    fn reports_iteration_limit() {
        let f = |x: f64| x * x - 2.0;

        let solution = solve_unobserved(&f, [0.0, 2.0], &config(5, 1e-15)).expect("should run");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 5);
        assert_eq!(solution.iterations.len(), 5);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = |x: f64| x * x - 9.0;

        let mut calls = 0usize;
        let mut observer = |iteration: &Iteration| {
            calls += 1;
            (iteration.iter >= 3).then_some(Action::StopEarly)
        };

        let solution = solve(&f, [0.0, 10.0], &config(100, 1e-12), &mut observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.iterations.len(), 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn propagates_evaluation_failures() {
        let f = Expression::parse("1 / (x - 1)").expect("valid expression");

        let result = solve_unobserved(&f, [0.0, 2.0], &Config::default());

        assert_eq!(
            result,
            Err(Error::Evaluation {
                x: 1.0,
                source: EvalError::DivisionByZero { x: 1.0 },
            })
        );
    }
}

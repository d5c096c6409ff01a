//! Gaussian elimination for square linear systems `A·x = b`.
//!
//! # Algorithm
//!
//! The system is written as the augmented matrix `[A | b]` and reduced to
//! upper-triangular form one stage at a time. Stage `k` (1-based) selects a
//! pivot according to the [`PivotingStrategy`], moves it to position
//! `(k, k)`, and eliminates every entry below it. The final stage `n` has
//! nothing left to eliminate and only verifies the last diagonal pivot.
//! Back substitution on the triangular matrix produces the solution.
//!
//! # Trace
//!
//! Every stage appends a [`Stage`] snapshot of the augmented matrix, so the
//! penultimate stage holds the upper-triangular system and the last stage
//! confirms it. A pivot whose magnitude is at most [`PIVOT_EPSILON`] stops
//! elimination with [`Error::Singular`], which keeps the stages recorded so
//! far.
//!
//! # Pivoting
//!
//! - [`PivotingStrategy::None`] — the diagonal entry must serve as the pivot
//! - [`PivotingStrategy::Partial`] — largest magnitude in the pivot column
//! - [`PivotingStrategy::Total`] — largest magnitude in the remaining
//!   submatrix; column swaps are tracked in [`Stage::columns`] and undone
//!   before the solution is reported

mod eliminate;
mod error;
mod pivot;
mod solution;
mod stage;


use ndarray::{Array1, Array2};
use tabula_core::PivotingStrategy;

pub use error::Error;
pub use solution::Solution;
pub use stage::Stage;

/// Magnitude at or below which a pivot candidate is treated as zero.
pub const PIVOT_EPSILON: f64 = 1e-12;

/// Solves `A·x = b` by Gaussian elimination with the given strategy.
///
/// # Errors
///
/// Returns an error if `a` is empty or not square, if the length of `b`
/// does not match, or if no usable pivot exists at some stage.
pub fn solve(
    a: &Array2<f64>,
    b: &Array1<f64>,
    strategy: PivotingStrategy,
) -> Result<Solution, Error> {
    check_dimensions(a, b)?;

    let (stages, x) = eliminate::run(a, b, strategy)?;

    Ok(Solution {
        strategy,
        stages,
        x,
    })
}

/// Checks that `a` is a non-empty square matrix and `b` matches its size.
///
/// # Errors
///
/// Returns the first dimension problem found.
pub fn check_dimensions(a: &Array2<f64>, b: &Array1<f64>) -> Result<(), Error> {
    let (rows, cols) = a.dim();
    if rows == 0 {
        return Err(Error::Empty);
    }
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if b.len() != rows {
        return Err(Error::DimensionMismatch {
            rows,
            len: b.len(),
        });
    }
    Ok(())
}

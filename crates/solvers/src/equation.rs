//! Root-finding methods for real functions of one variable.
//!
//! Every method records a procedure table of [`Iteration`] rows, forwards
//! each row to an [`Observer`], and returns a [`Solution`] holding the final
//! estimate, the [`Status`] it ended with, and the full table.
//!
//! # Methods
//!
//! - [`incremental_search`] — steps from a point until the function changes sign
//! - [`bisection`] — halves a bracketing interval
//! - [`false_position`] — shrinks a bracket at the secant-line root
//! - [`fixed_point`] — iterates `x = g(x)`
//! - [`newton`] — Newton–Raphson, with an optional numerical derivative
//! - [`secant`] — Newton with a two-point slope
//! - [`multiple_roots`] — modified Newton for repeated roots
//!
//! Bracketing methods measure error by the residual `|f(x_n)|`; open methods
//! measure it by the step `|x_n − x_{n−1}|`. Either way a run converges when
//! the error falls strictly below the tolerance or `f(x_n)` is exactly zero.
//!
//! [`Observer`]: tabula_core::Observer

mod action;
mod bracket;
mod bracketing;
mod config;
mod error;
mod evaluate;
mod iteration;
mod solution;
mod trace;

pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod incremental_search;
pub mod multiple_roots;
pub mod newton;
pub mod secant;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub(crate) use bracket::opposite_signs;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use iteration::Iteration;
pub use solution::{Solution, Status};

/// Magnitude at or below which a derivative or secant denominator is
/// treated as zero.
pub const DENOMINATOR_EPSILON: f64 = f64::EPSILON;

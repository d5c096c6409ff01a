//! Core traits and types for the Tabula numerical-methods engine.
//!
//! This crate defines the shared vocabulary that solvers and observers build on:
//!
//! - [`Function`] — a real function of one variable that may fail to evaluate
//! - [`Expression`] — a parsed infix expression in `x` that implements [`Function`]
//! - [`Parameter`], [`Value`], [`ParameterSet`] — the closed set of method
//!   parameters and the validated store that holds them
//! - [`MethodKind`], [`PivotingStrategy`] — identifiers for solving methods and
//!   elimination strategies
//! - [`Observer`] — receives solver events and optionally returns control actions

mod expression;
mod function;
mod method;
mod observer;
mod parameter;

pub use expression::{EvalError, Expression, SyntaxError};
pub use function::Function;
pub use method::{MethodKind, PivotingStrategy, UnknownMethod, UnknownStrategy};
pub use observer::Observer;
pub use parameter::{
    DocumentError, InvalidParameter, Parameter, ParameterSet, UnknownParameter, Value, ValueKind,
};

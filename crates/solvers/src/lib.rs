//! Numerical methods with step-by-step traces for the Tabula engine.
//!
//! # Modules
//!
//! - [`equation`] — root finding for real functions of one variable, each
//!   method recording a procedure table of [`equation::Iteration`] rows
//! - [`linear`] — Gaussian elimination with a snapshot of the augmented
//!   matrix after every stage
//! - [`method`] — the [`Method`] contract and one implementation per
//!   [`MethodKind`](tabula_core::MethodKind)
//!
//! # Sessions
//!
//! A [`Session`] owns one method, the parameters accumulated for it, and the
//! [`Report`] of its last successful run. [`Session::run`] always checks for
//! missing parameters before any numerical work. [`Solver`] is a thin facade
//! that selects a method, by kind or by name, and forwards to its session.
//!
//! # Logging
//!
//! Sessions and elimination stages emit [`tracing`] events; installing a
//! subscriber is left to the caller.

pub mod equation;
pub mod linear;
pub mod method;

mod error;
mod report;
mod session;
mod solver;

pub use error::Error;
pub use method::Method;
pub use report::Report;
pub use session::{Session, State};
pub use solver::Solver;

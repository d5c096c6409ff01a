//! Reusable observers for the Tabula numerical-methods engine.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the root-finding methods of `tabula-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-method observers
//!   ([`HasEstimate`], [`HasError`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — logs every iteration record through `tracing`
//! - [`IterationBudget`] — stops a run after a fixed number of records
//! - [`StallGuard`] — stops a run once the error measure stops improving
//!
//! [`Observer`]: tabula_core::Observer
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasError`]: traits::HasError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod budget;
mod log;
mod stall;

pub use budget::IterationBudget;
pub use log::TracingObserver;
pub use stall::StallGuard;

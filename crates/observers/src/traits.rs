//! Capability traits for cross-method observers.
//!
//! These traits abstract over event and action types so that an observer
//! can be written once and used with any method whose records expose the
//! right data.
//!
//! # Event traits
//!
//! - [`HasEstimate`] — events that carry an estimate and its function value
//! - [`HasError`] — events that may carry an error measure
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use tabula_core::Observer;
//! use tabula_observers::traits::{CanStopEarly, HasEstimate};
//!
//! struct SmallResidual {
//!     threshold: f64,
//! }
//!
//! impl<E: HasEstimate, A: CanStopEarly> Observer<E, A> for SmallResidual {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.value().abs() < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use tabula_solvers::equation::{Action, Iteration};

/// An event that carries an estimate and the function value there.
pub trait HasEstimate {
    /// Returns the iteration index of this event.
    fn index(&self) -> usize;

    /// Returns the estimate.
    fn estimate(&self) -> f64;

    /// Returns the function value at the estimate.
    fn value(&self) -> f64;
}

/// An event that may carry an error measure.
pub trait HasError {
    /// Returns the error measure, or `None` for events without one, such as
    /// seed rows.
    fn error(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasEstimate for Iteration {
    fn index(&self) -> usize {
        self.iter
    }

    fn estimate(&self) -> f64 {
        self.x
    }

    fn value(&self) -> f64 {
        self.fx
    }
}

impl HasError for Iteration {
    fn error(&self) -> Option<f64> {
        self.error
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

use thiserror::Error;

/// Stopping criteria shared by the iterative root-finding methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a root-finding config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: Self::DEFAULT_MAX_ITERS,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Iteration limit used when none is configured.
    pub const DEFAULT_MAX_ITERS: usize = 100;

    /// Tolerance used when none is configured.
    pub const DEFAULT_TOLERANCE: f64 = 1e-7;

    /// Creates a new config with validated criteria.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive or
    /// `max_iters` is zero.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the stopping tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns true if an iterate with this residual and error measure
    /// satisfies the stopping criterion.
    ///
    /// An exact zero residual always converges.
    #[must_use]
    pub fn is_converged(&self, fx: f64, error: f64) -> bool {
        fx == 0.0 || error < self.tolerance
    }
}

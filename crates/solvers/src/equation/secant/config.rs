use thiserror::Error;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    min_denominator: f64,
}

/// Errors that can occur when validating a secant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("min_denominator must be finite and non-negative")]
    MinDenominator,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: Self::DEFAULT_MAX_ITERS,
            min_denominator: Self::DEFAULT_MIN_DENOMINATOR,
        }
    }
}

impl Config {
    pub const DEFAULT_MAX_ITERS: usize = 100;
    pub const DEFAULT_MIN_DENOMINATOR: f64 = 1e-6;

    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `min_denominator` is
    /// negative or non-finite.
    pub fn new(max_iters: usize, min_denominator: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !min_denominator.is_finite() || min_denominator < 0.0 {
            return Err(ConfigError::MinDenominator);
        }

        Ok(Self {
            max_iters,
            min_denominator,
        })
    }

    /// Returns the maximum number of recorded steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the smallest accepted `|f(b) - f(a)|` for a step.
    #[must_use]
    pub fn min_denominator(&self) -> f64 {
        self.min_denominator
    }
}

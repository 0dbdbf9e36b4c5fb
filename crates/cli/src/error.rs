use secant_solvers::equation::secant::ConfigError;
use thiserror::Error;

use crate::input::InputError;

/// Errors detected before the solver runs.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("invalid solver config: {0}")]
    Config(#[from] ConfigError),
}

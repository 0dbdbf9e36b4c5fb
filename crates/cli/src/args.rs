//! Command-line arguments.

use clap::Parser;

use secant_solvers::equation::secant::Config;

/// Finds a real root of f(x) with the secant method.
///
/// The four fields stay as text here; [`SolverInput`](crate::SolverInput)
/// validates them so that blank and malformed values get the same messages
/// in every front end.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "secant", version)]
pub struct Args {
    /// First initial guess.
    #[arg(allow_hyphen_values = true)]
    pub x0: String,

    /// Second initial guess.
    #[arg(allow_hyphen_values = true)]
    pub x1: String,

    /// Relative error to reach; must be positive.
    #[arg(allow_hyphen_values = true)]
    pub tolerance: String,

    /// Function of x, e.g. "x*x - 4".
    #[arg(allow_hyphen_values = true)]
    pub function: String,

    /// Maximum number of secant steps.
    #[arg(long, default_value_t = Config::DEFAULT_MAX_ITERS, value_parser = parse_max_iters)]
    pub max_iters: usize,

    /// Print the outcome as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_max_iters(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_owned()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

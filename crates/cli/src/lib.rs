//! Command-line front end for the secant root finder.
//!
//! The binary takes two initial guesses, a tolerance, and a function of `x`,
//! validates them, runs the solver, and prints the iteration log with a
//! summary:
//!
//! ```text
//! secant <x0> <x1> <tolerance> <function> [--max-iters N] [--json]
//! ```
//!
//! The library half exposes each stage so that other front ends can reuse
//! the same validation and rendering:
//!
//! - [`args`] — command-line parsing
//! - [`input`] — field validation into a [`SolverInput`]
//! - [`report`] — fixed-precision table, summary, and JSON rendering
//! - [`trace`] — per-step logging while the solver runs

pub mod args;
pub mod input;
pub mod report;
pub mod trace;

mod error;

pub use args::Args;
pub use error::Error;
pub use input::SolverInput;

use secant_solvers::equation::secant::{self, Config, Solution};
use tracing::info;

use trace::StepLogger;

/// The solver result for a validated input.
#[derive(Debug)]
pub struct Outcome {
    pub input: SolverInput,
    pub result: Result<Solution, secant::Error>,
}

/// Runs the secant solver on a validated input, logging each step.
#[must_use]
pub fn run(input: SolverInput, config: &Config) -> Outcome {
    info!(
        function = %input.expression,
        x0 = input.x0,
        x1 = input.x1,
        tolerance = input.tolerance,
        "solving"
    );

    let result = secant::solve(
        &input.expression,
        [input.x0, input.x1],
        input.tolerance,
        config,
        StepLogger,
    );

    Outcome { input, result }
}

/// Validates parsed arguments and runs the solver.
///
/// # Errors
///
/// Returns an error if the input fields or solver config are invalid.
/// Solver failures are reported inside the [`Outcome`].
pub fn execute(args: &Args) -> Result<Outcome, Error> {
    let config = Config::new(args.max_iters, Config::DEFAULT_MIN_DENOMINATOR)?;
    let input = SolverInput::parse(&args.x0, &args.x1, &args.tolerance, &args.function)?;

    Ok(run(input, &config))
}

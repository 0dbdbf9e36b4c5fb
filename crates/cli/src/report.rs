//! Rendering of solver outcomes.
//!
//! Every floating-point value in the table and the summary's root and error
//! are printed with six decimal places.

use std::fmt;

use serde::Serialize;

use secant_solvers::equation::secant::{Error, IterationRecord, Solution};

use crate::{Outcome, SolverInput};

/// Column headers of the iteration table.
pub const COLUMNS: [&str; 7] = ["Iteration", "x0", "x1", "f(x0)", "f(x1)", "x2", "ε"];

const INDEX_WIDTH: usize = 9;
const VALUE_WIDTH: usize = 14;

/// The iteration log as an aligned text table, one row per record.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a>(pub &'a [IterationRecord]);

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>INDEX_WIDTH$}", COLUMNS[0])?;
        for column in &COLUMNS[1..] {
            write!(f, " {column:>VALUE_WIDTH$}")?;
        }
        writeln!(f)?;

        for record in self.0 {
            write!(f, "{:>INDEX_WIDTH$}", record.iter)?;
            for value in [
                record.x0,
                record.x1,
                record.fx0,
                record.fx1,
                record.x2,
                record.error,
            ] {
                write!(f, " {value:>VALUE_WIDTH$.6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Summary of a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub function: String,
    pub x0: f64,
    pub x1: f64,
    pub tolerance: f64,
    pub iters: usize,
    pub root: f64,
    pub error: f64,
}

impl Summary {
    /// Combines the input with the solution it produced.
    #[must_use]
    pub fn new(input: &SolverInput, solution: &Solution) -> Self {
        Self {
            function: input.expression.text().to_owned(),
            x0: input.x0,
            x1: input.x1,
            tolerance: input.tolerance,
            iters: solution.iters,
            root: solution.root,
            error: solution.error,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Secant method")?;
        writeln!(f)?;
        writeln!(f, "Function: {}", self.function)?;
        writeln!(f, "x0 = {},  x1 = {}", self.x0, self.x1)?;
        writeln!(f, "Tolerance = {}", self.tolerance)?;
        writeln!(f)?;
        writeln!(f, "Iterations: {}", self.iters)?;
        writeln!(f, "Approximate root: {:.6}", self.root)?;
        write!(f, "Final error: {:.6}", self.error)
    }
}

/// Renders an outcome as the table followed by the summary, or by the
/// failure message.
///
/// A non-convergence failure still prints the partial iteration log.
#[must_use]
pub fn render_text(outcome: &Outcome) -> String {
    match &outcome.result {
        Ok(solution) => format!(
            "{}\n{}\n",
            Table(&solution.records),
            Summary::new(&outcome.input, solution)
        ),
        Err(error) => match error.records() {
            Some(records) => format!("{}{}\n", Table(records), failure_message(error)),
            None => format!("{}\n", failure_message(error)),
        },
    }
}

/// Returns a one-line, human-readable description of a solver failure.
#[must_use]
pub fn failure_message(error: &Error) -> String {
    let kind = match error {
        Error::Model(_) => "function evaluation failed",
        Error::DegenerateStep { .. } => "degenerate step",
        Error::Divergence { .. } => "divergence",
        Error::NonConvergence { .. } => "no convergence",
    };
    format!("error ({kind}): {error}")
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
enum JsonReport<'a> {
    Solved {
        summary: Summary,
        solution: &'a Solution,
    },
    Failed {
        error: String,
        records: &'a [IterationRecord],
    },
}

/// Renders an outcome as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(outcome: &Outcome) -> Result<String, serde_json::Error> {
    let report = match &outcome.result {
        Ok(solution) => JsonReport::Solved {
            summary: Summary::new(&outcome.input, solution),
            solution,
        },
        Err(error) => JsonReport::Failed {
            error: error.to_string(),
            records: error.records().unwrap_or_default(),
        },
    };
    serde_json::to_string_pretty(&report)
}

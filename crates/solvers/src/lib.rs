//! Numerical solvers for the secant workspace.
//!
//! Solvers take a [`Model`] as their function oracle and report their
//! progress to an [`Observer`].
//!
//! # Features
//!
//! - `serde` — derives `Serialize` for solutions and iteration records.
//!
//! [`Model`]: secant_core::Model
//! [`Observer`]: secant_core::Observer

pub mod equation;

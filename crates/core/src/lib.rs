//! Core traits shared by the secant workspace.
//!
//! This crate defines the abstractions that the solver and the expression
//! evaluator meet at:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output; the
//!   secant solver uses any `Model<Input = f64, Output = f64>` as its
//!   function oracle
//! - [`Observer`] — receives solver events and optionally returns control actions

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;

//! Solvers for equations — finding a root `x` where `f(x) = 0`.
//!
//! The function `f` is any [`Model`] with `f64` input and output. Solvers in
//! this module drive its value toward zero.
//!
//! # Solvers
//!
//! - [`secant`] — open method driven by the two most recent samples
//!
//! [`Model`]: secant_core::Model

pub mod secant;

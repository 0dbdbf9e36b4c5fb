use std::convert::Infallible;

use approx::assert_relative_eq;
use secant_core::Model;
use secant_expr::{ArithmeticError, Expression};

use super::{
    Action, Config, Error, Event, IterationRecord, SEED_ERROR, Status, solve, solve_unobserved,
};

/// f(x) = x³ - 2x - 5, with a single real root near 2.0946.
struct Cubic;

impl Model for Cubic {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x.powi(3) - 2.0 * x - 5.0)
    }
}

/// f(x) = 2x - 4.
struct Line;

impl Model for Line {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(2.0 * x - 4.0)
    }
}

/// f(x) = x² + c.
struct ShiftedSquare(f64);

impl Model for ShiftedSquare {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x * x + self.0)
    }
}

/// f(x) = 1 / x, infinite at zero.
struct Reciprocal;

impl Model for Reciprocal {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(1.0 / x)
    }
}

fn expression(text: &str) -> Expression {
    Expression::new(text).expect("non-blank expression")
}

fn assert_log_is_chained(records: &[IterationRecord]) {
    for (index, record) in records.iter().enumerate() {
        assert_eq!(record.iter, index + 1);
    }
    for pair in records.windows(2) {
        let [prev, next] = pair else { unreachable!() };
        assert_eq!(next.x0, prev.x1);
        assert_eq!(next.x1, prev.x2);
        assert_relative_eq!(next.error, ((next.x2 - next.x1) / next.x2).abs());
    }
}

#[test]
fn finds_root_of_expression() {
    let model = expression("x*x - 4");
    let tolerance = 1e-4;

    let solution = solve_unobserved(&model, [1.0, 3.0], tolerance, &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, 2.0, epsilon = 1e-4);
    assert!(solution.error <= tolerance);
    assert!((2..=100).contains(&solution.iters));
    assert_eq!(solution.iters, solution.records.len());
    assert_log_is_chained(&solution.records);
}

#[test]
fn finds_root_of_cubic() {
    let solution = solve_unobserved(&Cubic, [2.0, 3.0], 1e-8, &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, 2.094_551_481_542_327, epsilon = 1e-9);
    assert_relative_eq!(solution.root, solution.records[solution.iters - 1].x2);
    assert_log_is_chained(&solution.records);
}

#[test]
fn first_record_holds_seed_error() {
    // The first secant step for a line lands on the root with true error 0.5.
    let solution = solve_unobserved(&Line, [1.0, 3.0], 1e-6, &Config::default())
        .expect("should converge");

    let first = solution.records[0];
    assert_eq!(first.error, SEED_ERROR);
    assert_relative_eq!(first.x2, 2.0);

    // A second step is always taken before the tolerance test can pass.
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.root, 2.0);
    assert_eq!(solution.error, 0.0);
}

#[test]
fn tolerance_at_seed_error_stops_after_first_step() {
    let solution = solve_unobserved(&Cubic, [2.0, 3.0], 1.0, &Config::default())
        .expect("seed error meets tolerance");

    assert_eq!(solution.iters, 1);
    assert_eq!(solution.error, SEED_ERROR);
}

#[test]
fn symmetric_guesses_are_degenerate() {
    let result = solve_unobserved(&ShiftedSquare(0.0), [-1.0, 1.0], 1e-4, &Config::default());

    assert!(matches!(result, Err(Error::DegenerateStep { iter: 1, .. })));
}

#[test]
fn infinite_sample_diverges() {
    let result = solve_unobserved(&Reciprocal, [1.0, 0.0], 1e-4, &Config::default());

    assert!(matches!(result, Err(Error::Divergence { iter: 1, .. })));
}

#[test]
fn function_without_real_root_never_converges() {
    let result = solve_unobserved(&ShiftedSquare(1.0), [1.0, 2.0], 1e-6, &Config::default());

    match result {
        Err(Error::NonConvergence {
            iters,
            error,
            records,
        }) => {
            assert_eq!(iters, 100);
            assert_eq!(records.len(), 100);
            assert!(error > 1e-6);
            assert_log_is_chained(&records);
        }
        Err(Error::Divergence { .. } | Error::DegenerateStep { .. }) => {}
        other => panic!("expected a failure, got {other:?}"),
    }
}

#[test]
fn non_convergence_respects_configured_cap() {
    let config = Config::new(3, 1e-6).expect("valid config");

    let err = solve_unobserved(&Cubic, [2.0, 3.0], 1e-15, &config)
        .expect_err("three steps cannot reach the tolerance");

    assert!(matches!(err, Error::NonConvergence { iters: 3, .. }));
    let records = err.records().expect("partial log");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].error, SEED_ERROR);
}

#[test]
fn converges_on_last_allowed_step() {
    let config = Config::new(2, 1e-6).expect("valid config");

    let solution =
        solve_unobserved(&Line, [1.0, 3.0], 1e-6, &config).expect("second step meets tolerance");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.root, 2.0);
}

#[test]
fn single_step_cap_stops_at_seed_error() {
    let config = Config::new(1, 1e-6).expect("valid config");

    let err = solve_unobserved(&Line, [1.0, 3.0], 1e-6, &config)
        .expect_err("tolerance is never tested against a real error");

    assert!(matches!(err, Error::NonConvergence { iters: 1, error, .. } if error == SEED_ERROR));
    assert_eq!(err.records().map(<[_]>::len), Some(1));
}

#[test]
fn power_splice_shifts_root_of_square() {
    // Only the digit next to `^` is raised (2.5^2 reads as 2.25), so away
    // from integers f(x) is close to x - 4 and the root lands near 4.
    let model = expression("x^2 - 4");

    let solution = solve_unobserved(&model, [1.0, 3.0], 1e-4, &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 5);
    assert_relative_eq!(solution.root, 4.0, epsilon = 1e-6);
    assert_log_is_chained(&solution.records);
}

#[test]
fn model_errors_propagate() {
    // f(3) divides by zero inside the expression.
    let model = expression("1/(x-3)");

    let err = solve_unobserved(&model, [1.0, 3.0], 1e-4, &Config::default())
        .expect_err("model fails at x = 3");

    let Error::Model(source) = &err else {
        panic!("expected a model error, got {err:?}");
    };
    assert_eq!(
        source.downcast_ref::<secant_expr::Error>(),
        Some(&secant_expr::Error::Arithmetic(ArithmeticError::DivisionByZero))
    );
}

#[test]
fn observer_sees_every_step() {
    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| -> Option<Action> {
        seen.push((event.record.iter, event.is_within_tolerance()));
        None
    };

    let solution =
        solve(&Cubic, [2.0, 3.0], 1e-8, &Config::default(), observer).expect("should converge");

    assert_eq!(seen.len(), solution.iters);
    assert_eq!(seen.first(), Some(&(1, false)));
    assert_eq!(seen.last(), Some(&(solution.iters, true)));
}

#[test]
fn observer_can_stop_iteration() {
    let observer = |event: &Event<'_>| (event.record.iter == 2).then_some(Action::StopEarly);

    let solution =
        solve(&Cubic, [2.0, 3.0], 1e-12, &Config::default(), observer).expect("stops cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.root, solution.records[1].x2);
    assert_eq!(solution.error, solution.records[1].error);
}

use super::*;
use crate::types::Money;

fn sqrt_of(a: Money) -> impl FnMut(Money) -> (Money, Money) {
	move |v| (v * v - a, 2.0 * v)
}

#[test]
fn solve_should_find_square_root() {
	let config = SolverConfig::default();
	let root = solve(10.0, Bounds::above(0.0), &config, sqrt_of(2.0)).unwrap();
	assert_relative_eq!(root, 2.0f64.sqrt(), max_relative = 1e-15);
}

#[test]
fn solve_should_accept_exact_seed() {
	let config = SolverConfig::default();
	assert_eq!(solve(3.0, Bounds::above(0.0), &config, sqrt_of(9.0)), Ok(3.0));
}

#[test]
fn solve_should_lift_seed_into_bracket() {
	let config = SolverConfig::default();
	// From 0.5 the first step would overshoot towards 9; the lifted seed starts at the bound.
	let mut seen = std::vec::Vec::new();
	let root = solve(0.5, Bounds::above(2.0), &config, |v| {
		seen.push(v);
		(v * v - 9.0, 2.0 * v)
	})
	.unwrap();
	assert_eq!(seen[0], 2.0);
	assert_relative_eq!(root, 3.0, max_relative = 1e-15);
}

#[test]
fn solve_should_halve_instead_of_going_negative() {
	let config = SolverConfig::default();
	// Newton on ln(v) from 10 steps to -13 first.
	let mut seen = std::vec::Vec::new();
	let root = solve(10.0, Bounds::above(0.0), &config, |v| {
		seen.push(v);
		(Float::ln(v), 1.0 / v)
	})
	.unwrap();
	assert_eq!(seen[1], 5.0);
	assert!(seen.iter().all(|v| *v > 0.0));
	assert_relative_eq!(root, 1.0, max_relative = 1e-13);
}

#[test]
fn solve_should_respect_upper_bound() {
	let config = SolverConfig::default();
	let mut seen = std::vec::Vec::new();
	let root = solve(1.0, Bounds::between(0.0, 4.0), &config, |v| {
		seen.push(v);
		(v * v - 9.0, 2.0 * v)
	})
	.unwrap();
	assert!(seen.iter().all(|v| *v <= 4.0));
	assert_relative_eq!(root, 3.0, max_relative = 1e-15);
}

#[test]
fn solve_should_fail_on_zero_derivative() {
	let config = SolverConfig::default();
	assert_eq!(
		solve(1.0, Bounds::above(0.0), &config, |_| (1.0, 0.0)),
		Err(SolverError::ZeroDerivative)
	);
	assert_eq!(
		solve(1.0, Bounds::above(0.0), &config, |_| (1e300, 1e-300)),
		Err(SolverError::ZeroDerivative)
	);
}

#[test]
fn solve_should_fail_on_non_finite_residual() {
	let config = SolverConfig::default();
	assert_eq!(
		solve(1.0, Bounds::above(0.0), &config, |_| (Money::NAN, 1.0)),
		Err(SolverError::NonFinite)
	);
}

#[test]
fn solve_should_report_exhausted_budget() {
	let config = SolverConfig::default().with_max_iterations(2);
	assert_eq!(
		solve(1e12, Bounds::above(0.0), &config, sqrt_of(2.0)),
		Err(SolverError::DidNotConverge)
	);
}

#[test]
fn solve_should_reject_bad_seed() {
	let config = SolverConfig::default();
	assert_eq!(
		solve(-1e30, Bounds::above(0.0), &config, sqrt_of(2.0)),
		Err(SolverError::NonPositive)
	);
	assert_eq!(
		solve(Money::INFINITY, Bounds::above(0.0), &config, sqrt_of(2.0)),
		Err(SolverError::NonFinite)
	);
	assert_eq!(
		solve(Money::NAN, Bounds::above(0.0), &config, sqrt_of(2.0)),
		Err(SolverError::NonFinite)
	);
}

#[test]
fn solve_should_reject_bad_config() {
	let zero_steps = SolverConfig::default().with_max_iterations(0);
	assert_eq!(
		solve(1.0, Bounds::above(0.0), &zero_steps, sqrt_of(2.0)),
		Err(SolverError::InvalidParameter)
	);
	let no_tolerance = SolverConfig::default().with_tolerance(0.0);
	assert_eq!(
		solve(1.0, Bounds::above(0.0), &no_tolerance, sqrt_of(2.0)),
		Err(SolverError::InvalidParameter)
	);
}

#[test]
fn config_should_deserialize_with_defaults() {
	let config: SolverConfig = serde_json::from_str(r#"{"max_iterations": 32}"#).unwrap();
	assert_eq!(config.max_iterations, 32);
	assert_eq!(config.tolerance, TOLERANCE);
}

#[test]
fn solve_should_not_accept_midpoint_at_bound() {
	let config = SolverConfig::default();
	// The root at 10 lies outside the bracket, so every step from 4 is pulled back onto 4.
	assert_eq!(
		solve(4.0, Bounds::between(0.0, 4.0), &config, |v| (v - 10.0, 1.0)),
		Err(SolverError::DidNotConverge)
	);
}

#[test]
fn solve_should_accept_bound_when_its_step_is_small() {
	let config = SolverConfig::default();
	// The root sits a few ulps above the upper bound.
	assert_eq!(
		solve(5.0, Bounds::between(0.0, 4.0), &config, |v| (v * v - 16.00000000000001, 2.0 * v)),
		Ok(4.0)
	);
}

#[test]
fn solve_should_clamp_seed_from_above() {
	let config = SolverConfig::default();
	let mut seen = std::vec::Vec::new();
	let root = solve(1e300, Bounds::between(0.0, 10.0), &config, |v| {
		seen.push(v);
		(v * v - 9.0, 2.0 * v)
	})
	.unwrap();
	assert_eq!(seen[0], 10.0);
	assert_relative_eq!(root, 3.0, max_relative = 1e-15);
}

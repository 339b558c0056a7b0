//! Safeguarded Newton–Raphson iteration over a single positive unknown.
//!
//! Both curves feed a residual `f(v)` and its derivative `f'(v)` into [`solve`],
//! which steps `v ← v − f(v)/f'(v)` until the relative step is within the
//! configured tolerance. A step leaving the bracket known to contain the root
//! moves halfway towards the violated bound instead. Such a midpoint is never
//! accepted as a root; the iteration continues from it.

mod config;
#[cfg(test)]
mod tests;

pub use config::{SolverConfig, MAX_ITERATIONS, TOLERANCE};

use crate::ensure;
use crate::types::{validate_amount, Money};
use crate::SolverError;
use num_traits::Float;

const LOG_TARGET: &str = "math::newton";

/// Bracket for the iterate. Estimates never drop to zero or below, even when `lower` is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Bounds {
	pub lower: Money,
	pub upper: Option<Money>,
}

impl Bounds {
	#[cfg(test)]
	pub fn above(lower: Money) -> Self {
		Self { lower, upper: None }
	}

	pub fn between(lower: Money, upper: Money) -> Self {
		Self {
			lower,
			upper: Some(upper),
		}
	}

	fn clamp_seed(&self, seed: Money) -> Money {
		let seed = Float::max(seed, self.lower);
		match self.upper {
			Some(upper) => Float::min(seed, upper),
			None => seed,
		}
	}

	/// Replacement for `next` when it falls outside the bracket, `None` otherwise.
	fn pull_inside(&self, current: Money, next: Money) -> Option<Money> {
		if next < self.lower || next <= 0.0 {
			return Some((current + self.lower) / 2.0);
		}
		match self.upper {
			Some(upper) if next > upper => Some((current + upper) / 2.0),
			_ => None,
		}
	}
}

/// Runs Newton's method from `seed`.
///
/// `residual` returns `(f(v), f'(v))`. The returned value is finite and positive.
pub(crate) fn solve<R>(seed: Money, bounds: Bounds, config: &SolverConfig, mut residual: R) -> Result<Money, SolverError>
where
	R: FnMut(Money) -> (Money, Money),
{
	config.validate()?;
	validate_amount(seed)?;

	let mut v = bounds.clamp_seed(seed);
	if v != seed {
		log::trace!(target: LOG_TARGET, "seed {:?} moved into bracket at {:?}", seed, v);
	}

	for iteration in 0..config.max_iterations {
		let (f, df) = residual(v);
		ensure!(Float::is_finite(f) && Float::is_finite(df), SolverError::NonFinite);

		if f == 0.0 {
			return accept(v);
		}

		ensure!(df != 0.0, SolverError::ZeroDerivative);
		let step = f / df;
		ensure!(Float::is_finite(step), SolverError::ZeroDerivative);

		let next = v - step;
		match bounds.pull_inside(v, next) {
			None => {
				if Float::abs(next - v) <= config.tolerance * next {
					log::trace!(target: LOG_TARGET, "converged to {:?} after {} steps", next, iteration + 1);
					return accept(next);
				}
				v = next;
			}
			Some(inside) => {
				// A pulled in point is never accepted on its own; only `v`, once its own step is small.
				if Float::abs(step) <= config.tolerance * v {
					log::trace!(target: LOG_TARGET, "converged at bracket edge {:?} after {} steps", v, iteration + 1);
					return accept(v);
				}
				log::trace!(
					target: LOG_TARGET,
					"step to {:?} left bracket {:?}, using {:?}",
					next,
					bounds,
					inside
				);
				if inside == v {
					break;
				}
				v = inside;
			}
		}
	}

	log::debug!(
		target: LOG_TARGET,
		"no convergence within {} steps, last estimate {:?}",
		config.max_iterations,
		v
	);
	Err(SolverError::DidNotConverge)
}

fn accept(v: Money) -> Result<Money, SolverError> {
	validate_amount(v).map_err(|e| {
		log::debug!(target: LOG_TARGET, "rejecting estimate {:?}: {}", v, e);
		e
	})?;
	Ok(v)
}

use crate::ensure;
use crate::types::Money;
use crate::SolverError;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Same loop bound as the on-chain contract.
pub const MAX_ITERATIONS: u16 = 255;

/// Relative step size below which an estimate is accepted.
///
/// Matches the on-chain `diff * 10**14 < D` check.
pub const TOLERANCE: Money = 1e-14;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
	pub max_iterations: u16,
	pub tolerance: Money,
}

impl Default for SolverConfig {
	fn default() -> Self {
		Self {
			max_iterations: MAX_ITERATIONS,
			tolerance: TOLERANCE,
		}
	}
}

impl SolverConfig {
	pub fn with_max_iterations(mut self, max_iterations: u16) -> Self {
		self.max_iterations = max_iterations;
		self
	}

	pub fn with_tolerance(mut self, tolerance: Money) -> Self {
		self.tolerance = tolerance;
		self
	}

	pub(crate) fn validate(&self) -> Result<(), SolverError> {
		ensure!(self.max_iterations > 0, SolverError::InvalidParameter);
		ensure!(
			Float::is_finite(self.tolerance) && self.tolerance > 0.0,
			SolverError::InvalidParameter
		);
		Ok(())
	}
}

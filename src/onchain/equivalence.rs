use super::math::{calculate_d, calculate_y, MAX_D_ITERATIONS, MAX_Y_ITERATIONS};
use crate::convention::{solve_balance_scaled, solve_invariant_scaled};
use crate::types::{AssetIndex, Balance, Money};
use crate::SolverError;

/// Result of running the integer reference and the real-valued solver on the same input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
	pub reference: Balance,
	/// Solver output truncated to an integer.
	pub solved: Balance,
	/// `|reference - solved| / reference`, with the difference taken in integers.
	/// Zero when the reference is zero.
	pub relative_error: Money,
}

impl Comparison {
	fn new(reference: Balance, solved: Money) -> Self {
		let solved = solved as Balance;
		let relative_error = if reference == 0 {
			0.0
		} else {
			reference.abs_diff(solved) as Money / reference as Money
		};
		Self {
			reference,
			solved,
			relative_error,
		}
	}

	pub fn within(&self, tolerance: Money) -> bool {
		self.relative_error < tolerance
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonError {
	/// The integer computation overflowed or did not converge.
	Reference,
	Solver(SolverError),
}

impl From<SolverError> for ComparisonError {
	fn from(value: SolverError) -> Self {
		ComparisonError::Solver(value)
	}
}

/// Compare invariant D for `x0`, `x1`. The solver starts from `x0 + x1`.
pub fn compare_invariant(ann_scaled: Balance, x0: Balance, x1: Balance) -> Result<Comparison, ComparisonError> {
	let reference = calculate_d::<MAX_D_ITERATIONS>(&[x0, x1], ann_scaled).ok_or(ComparisonError::Reference)?;

	let (x0_f, x1_f) = (x0 as Money, x1 as Money);
	let solved = solve_invariant_scaled(ann_scaled as Money, 0.0, x0_f, x1_f, x0_f + x1_f)?;

	Ok(Comparison::new(reference, solved))
}

/// Compare the balance of asset `asset_index` that keeps the invariant at `d`.
pub fn compare_balance(
	ann_scaled: Balance,
	x0: Balance,
	x1: Balance,
	d: Balance,
	asset_index: usize,
) -> Result<Comparison, ComparisonError> {
	let idx = AssetIndex::try_from(asset_index)?;
	let reference =
		calculate_y::<MAX_Y_ITERATIONS>(&[x0, x1], d, idx, ann_scaled).ok_or(ComparisonError::Reference)?;

	let solved = solve_balance_scaled(ann_scaled as Money, 0.0, x0 as Money, x1 as Money, d as Money, asset_index)?;

	Ok(Comparison::new(reference, solved))
}

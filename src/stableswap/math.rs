use crate::newton::{self, Bounds, SolverConfig};
use crate::types::{validate_amount, AssetIndex, Balances, CurveParams, Money};
use crate::SolverError;
use num_traits::Float;

const N_COINS: Money = 2.0;

/// Calculate the invariant D of a two-asset stableswap pool, starting Newton's method from `d0`.
///
/// `gamma` in `params` is not used by this curve.
pub fn calculate_d(
	params: &CurveParams,
	balances: &Balances,
	d0: Money,
	config: &SolverConfig,
) -> Result<Money, SolverError> {
	params.validate()?;
	balances.validate()?;

	let (x_small, x_big) = balances.sorted();
	let ann = params.ann;
	let s = x_small + x_big;

	// D never drops below the constant product value; the curve only adds to it.
	let d_min = N_COINS * Float::sqrt(x_small) * Float::sqrt(x_big);
	// Nor above the sum. With `c^3 = 4 * ann * S * P`, `D = c + d_min` already
	// gives `D^3 / (4P) >= ann * S + D`, which is the tighter bound for dust balances.
	let c = Float::cbrt(4.0 * ann) * Float::cbrt(s) * Float::cbrt(x_small) * Float::cbrt(x_big);
	let d_max = Float::max(Float::min(s, c + d_min), d_min);

	newton::solve(d0, Bounds::between(d_min, d_max), config, |d| {
		let d_p = d * (d / (N_COINS * x_small)) * (d / (N_COINS * x_big));
		let f = ann * s + d - ann * d - d_p;
		let df = 1.0 - ann - (N_COINS + 1.0) * d_p / d;
		(f, df)
	})
}

/// Calculate the balance of asset `idx` that keeps the invariant at `d`.
///
/// The current balance at `idx` is ignored. The iteration starts from an upper
/// bound of the positive root, from where Newton's method descends monotonically.
pub fn calculate_y(
	params: &CurveParams,
	balances: &Balances,
	d: Money,
	idx: AssetIndex,
	config: &SolverConfig,
) -> Result<Money, SolverError> {
	params.validate()?;
	validate_amount(d)?;
	let x_j = balances.companion(idx);
	validate_amount(x_j)?;

	let ann = params.ann;

	// ann * y^2 + (ann * (x_j - D) + D) * y - D^3 / (4 * x_j) = 0
	let c = d * (d / (N_COINS * x_j)) * (d / N_COINS);
	let b = ann * (x_j - d) + d;

	let y_max = if ann == 0.0 {
		c / b
	} else {
		let y_max = Float::sqrt(c / ann) + Float::max(-b, 0.0) / ann;
		if b > 0.0 {
			Float::min(y_max, c / b)
		} else {
			y_max
		}
	};

	newton::solve(y_max, Bounds::between(0.0, y_max), config, |y| {
		let f = ann * y * y + b * y - c;
		let df = 2.0 * ann * y + b;
		(f, df)
	})
}

/// Imbalance of the stableswap equation at `d`, relative to the left hand side
/// `ann * S + D`.
pub fn equation_error(params: &CurveParams, balances: &Balances, d: Money) -> Money {
	let ann = params.ann;
	let lhs = ann * balances.sum() + d;
	let rhs = ann * d + d * (d / (N_COINS * balances.x0)) * (d / (N_COINS * balances.x1));
	Float::abs(lhs - rhs) / lhs
}

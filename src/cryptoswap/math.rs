use crate::newton::{self, Bounds, SolverConfig};
use crate::types::{validate_amount, AssetIndex, Balances, CurveParams, Money};
use crate::SolverError;
use num_traits::Float;

const N_COINS: Money = 2.0;

/// `K = Ann * K0 * gamma^2 / (gamma + 1 - K0)^2` and its derivative in `K0`.
///
/// Both vanish when `gamma` or `ann` is zero, which leaves the constant product curve.
fn amplification_factor(params: &CurveParams, k0: Money) -> (Money, Money) {
	if params.gamma == 0.0 || params.ann == 0.0 {
		return (0.0, 0.0);
	}
	let gamma2 = params.gamma * params.gamma;
	let g1k0 = params.gamma + 1.0 - k0;
	let k = params.ann * gamma2 * k0 / (g1k0 * g1k0);
	let dk = params.ann * gamma2 * (g1k0 + 2.0 * k0) / (g1k0 * g1k0 * g1k0);
	(k, dk)
}

/// Calculate the invariant D of a two-asset cryptoswap pool, starting Newton's method from `d0`.
pub fn calculate_d(
	params: &CurveParams,
	balances: &Balances,
	d0: Money,
	config: &SolverConfig,
) -> Result<Money, SolverError> {
	params.validate()?;
	balances.validate()?;

	let (x_small, x_big) = balances.sorted();
	let s = x_small + x_big;
	let p = x_small * x_big;

	// Below the constant product value K0 exceeds one and K heads for its pole at K0 = 1 + gamma.
	let d_min = N_COINS * Float::sqrt(x_small) * Float::sqrt(x_big);
	// Above it K <= ann * K0, so the root is at most `c + d_min` with `c^3 = 16 * ann * S * P`,
	// and never above the sum.
	let c = Float::cbrt(16.0 * params.ann) * Float::cbrt(s) * Float::cbrt(x_small) * Float::cbrt(x_big);
	let d_max = Float::max(Float::min(s, c + d_min), d_min);

	newton::solve(d0, Bounds::between(d_min, d_max), config, |d| {
		let k0 = (N_COINS * x_small / d) * (N_COINS * x_big / d);
		let (k, dk) = amplification_factor(params, k0);
		let dk_dd = dk * (-2.0 * k0 / d);

		let f = k * d * (s - d) + p - d * d / 4.0;
		let df = dk_dd * d * (s - d) + k * (s - 2.0 * d) - d / 2.0;
		(f, df)
	})
}

/// Calculate the balance of asset `idx` that keeps the invariant at `d`.
///
/// The current balance at `idx` is ignored. The iteration starts from the constant
/// product balance `D^2 / (4 * x_j)`, which bounds the answer from above.
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

	let y_max = d / (N_COINS * x_j) * d / N_COINS;

	newton::solve(y_max, Bounds::between(0.0, y_max), config, |y| {
		let k0 = (N_COINS * x_j / d) * (N_COINS * y / d);
		let (k, dk) = amplification_factor(params, k0);
		let dk_dy = dk * (N_COINS * x_j / d) * (N_COINS / d);
		let s = x_j + y;

		let f = k * d * (s - d) + x_j * y - d * d / 4.0;
		let df = dk_dy * d * (s - d) + k * d + x_j;
		(f, df)
	})
}

/// Imbalance of the cryptoswap equation at `d`, relative to `(D / 2)^2`.
pub fn equation_error(params: &CurveParams, balances: &Balances, d: Money) -> Money {
	let s = balances.sum();
	let p = balances.x0 * balances.x1;
	let k0 = (N_COINS * balances.x0 / d) * (N_COINS * balances.x1 / d);
	let (k, _) = amplification_factor(params, k0);
	let lhs = k * d * s + p;
	let rhs = k * d * d + d * d / 4.0;
	Float::abs(lhs - rhs) / (d * d / 4.0)
}

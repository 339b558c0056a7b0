use crate::newton::SolverConfig;
use crate::types::{AssetIndex, Balances, CurveParams, Money};
use crate::{cryptoswap, stableswap, SolverError};
use serde::{Deserialize, Serialize};

/// Invariant equation a pool follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curve {
	/// Amplified constant sum; `gamma` is ignored.
	#[default]
	StableSwap,
	/// Cryptopool curve concentrated around the current price by `gamma`.
	CryptoSwap,
}

impl Curve {
	pub fn solve_invariant(&self, params: &CurveParams, balances: &Balances, d_guess: Money) -> Result<Money, SolverError> {
		self.solve_invariant_with_config(params, balances, d_guess, &SolverConfig::default())
	}

	pub fn solve_invariant_with_config(
		&self,
		params: &CurveParams,
		balances: &Balances,
		d_guess: Money,
		config: &SolverConfig,
	) -> Result<Money, SolverError> {
		match self {
			Curve::StableSwap => stableswap::calculate_d(params, balances, d_guess, config),
			Curve::CryptoSwap => cryptoswap::calculate_d(params, balances, d_guess, config),
		}
	}

	pub fn solve_balance(
		&self,
		params: &CurveParams,
		balances: &Balances,
		d: Money,
		idx: AssetIndex,
	) -> Result<Money, SolverError> {
		self.solve_balance_with_config(params, balances, d, idx, &SolverConfig::default())
	}

	pub fn solve_balance_with_config(
		&self,
		params: &CurveParams,
		balances: &Balances,
		d: Money,
		idx: AssetIndex,
		config: &SolverConfig,
	) -> Result<Money, SolverError> {
		match self {
			Curve::StableSwap => stableswap::calculate_y(params, balances, d, idx, config),
			Curve::CryptoSwap => cryptoswap::calculate_y(params, balances, d, idx, config),
		}
	}
}

/// Invariant D of a stableswap pool with balances `x0`, `x1`.
///
/// `ann` is in native units (amplification times 4, no on-chain multiplier);
/// see [`crate::convention`] for the scaled form.
pub fn solve_invariant(ann: Money, gamma: Money, x0: Money, x1: Money, d_guess: Money) -> Result<Money, SolverError> {
	Curve::StableSwap.solve_invariant(&CurveParams::new(ann, gamma), &Balances::new(x0, x1), d_guess)
}

/// Balance at `asset_index` of a stableswap pool that keeps the invariant at `d`.
pub fn solve_balance(
	ann: Money,
	gamma: Money,
	x0: Money,
	x1: Money,
	d: Money,
	asset_index: usize,
) -> Result<Money, SolverError> {
	let idx = AssetIndex::try_from(asset_index)?;
	Curve::StableSwap.solve_balance(&CurveParams::new(ann, gamma), &Balances::new(x0, x1), d, idx)
}

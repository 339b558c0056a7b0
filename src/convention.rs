//! Entry points taking the amplification as the on-chain contract stores it.
//!
//! On chain, `ANN = A * N^N * A_MULTIPLIER`. The solvers take `A * N^N`, so the
//! scaled value is divided by [`A_MULTIPLIER`] here, once, before the call.
//! `gamma` is passed through untouched.

use crate::curve::{solve_balance, solve_invariant};
use crate::types::Money;
use crate::SolverError;

pub const A_MULTIPLIER: Money = 10_000.0;

pub fn to_native_amplification(ann_scaled: Money) -> Money {
	ann_scaled / A_MULTIPLIER
}

pub fn solve_invariant_scaled(
	ann_scaled: Money,
	gamma: Money,
	x0: Money,
	x1: Money,
	d_guess: Money,
) -> Result<Money, SolverError> {
	solve_invariant(to_native_amplification(ann_scaled), gamma, x0, x1, d_guess)
}

pub fn solve_balance_scaled(
	ann_scaled: Money,
	gamma: Money,
	x0: Money,
	x1: Money,
	d: Money,
	asset_index: usize,
) -> Result<Money, SolverError> {
	solve_balance(to_native_amplification(ann_scaled), gamma, x0, x1, d, asset_index)
}

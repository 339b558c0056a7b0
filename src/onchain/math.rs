use crate::to_u256;
use crate::types::{AssetIndex, Balance};
use primitive_types::U256;

pub const MAX_D_ITERATIONS: u8 = 255;
pub const MAX_Y_ITERATIONS: u8 = 255;

/// Scale of `ANN` on chain.
pub const A_MULTIPLIER: Balance = 10_000;

const N_COINS: u128 = 2;
const PRECISION: u128 = 1;

/// Invariant D for integer balances `xp`, with `ann` scaled by [`A_MULTIPLIER`].
///
/// At most `N` Newton steps are taken, starting from the sum of the balances.
/// Returns `None` when a balance is zero (but not both), on overflow, when `ann < A_MULTIPLIER`,
/// or when two consecutive estimates still differ by more than one after `N` steps.
pub fn calculate_d<const N: u8>(xp: &[Balance; 2], ann: Balance) -> Option<Balance> {
	let (x_small, x_big) = if xp[0] <= xp[1] { (xp[0], xp[1]) } else { (xp[1], xp[0]) };

	if x_big == 0 {
		return Some(0);
	}
	if x_small == 0 {
		return None;
	}

	let xp_hp = [to_u256!(x_small), to_u256!(x_big)];
	let (ann_hp, a_multiplier, n_coins, precision) = to_u256!(ann, A_MULTIPLIER, N_COINS, PRECISION);

	let s_hp = xp_hp[0].checked_add(xp_hp[1])?;
	let mut d = s_hp;

	for _ in 0..N {
		let d_p = xp_hp
			.iter()
			.try_fold(d, |acc, v| acc.checked_mul(d)?.checked_div(v.checked_mul(n_coins)?))?;
		let d_prev = d;

		d = ann_hp
			.checked_mul(s_hp)?
			.checked_div(a_multiplier)?
			.checked_add(d_p.checked_mul(n_coins)?)?
			.checked_mul(d)?
			.checked_div(
				ann_hp
					.checked_sub(a_multiplier)?
					.checked_mul(d)?
					.checked_div(a_multiplier)?
					.checked_add(n_coins.checked_add(U256::one())?.checked_mul(d_p)?)?,
			)?;

		if abs_diff(d_prev, d) <= precision {
			return Balance::try_from(d).ok();
		}
	}

	None
}

/// Balance of asset `idx` that keeps the invariant at `d`; the current balance at `idx` is ignored.
pub fn calculate_y<const N: u8>(xp: &[Balance; 2], d: Balance, idx: AssetIndex, ann: Balance) -> Option<Balance> {
	let x_j = match idx {
		AssetIndex::First => xp[1],
		AssetIndex::Second => xp[0],
	};
	if x_j == 0 || ann == 0 {
		return None;
	}

	let (x_j_hp, d_hp, ann_hp, a_multiplier, n_coins, precision) =
		to_u256!(x_j, d, ann, A_MULTIPLIER, N_COINS, PRECISION);
	let two_hp = to_u256!(2u128);

	let c = d_hp
		.checked_mul(d_hp)?
		.checked_div(x_j_hp.checked_mul(n_coins)?)?
		.checked_mul(d_hp)?
		.checked_mul(a_multiplier)?
		.checked_div(ann_hp.checked_mul(n_coins)?)?;

	let b = x_j_hp.checked_add(d_hp.checked_mul(a_multiplier)?.checked_div(ann_hp)?)?;
	let mut y = d_hp;

	for _ in 0..N {
		let y_prev = y;
		y = y
			.checked_mul(y)?
			.checked_add(c)?
			.checked_div(two_hp.checked_mul(y)?.checked_add(b)?.checked_sub(d_hp)?)?;

		if abs_diff(y_prev, y) <= precision {
			return Balance::try_from(y).ok();
		}
	}

	None
}

#[inline]
fn abs_diff(d0: U256, d1: U256) -> U256 {
	if d1 >= d0 {
		// This is safe due the previous condition
		d1 - d0
	} else {
		d0 - d1
	}
}

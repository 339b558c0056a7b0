use crate::ensure;
use crate::SolverError;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Real-valued amount used by the solvers.
pub type Money = f64;

/// Integer amount as held by the on-chain contract.
pub type Balance = u128;

/// Pool balances of a two-asset pool.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Balances {
	pub x0: Money,
	pub x1: Money,
}

impl Balances {
	pub fn new(x0: Money, x1: Money) -> Self {
		Self { x0, x1 }
	}

	pub fn get(&self, idx: AssetIndex) -> Money {
		match idx {
			AssetIndex::First => self.x0,
			AssetIndex::Second => self.x1,
		}
	}

	/// Balance of the asset that is held fixed while `idx` is solved for.
	pub fn companion(&self, idx: AssetIndex) -> Money {
		self.get(idx.other())
	}

	/// Balances in ascending order.
	pub fn sorted(&self) -> (Money, Money) {
		if self.x0 <= self.x1 {
			(self.x0, self.x1)
		} else {
			(self.x1, self.x0)
		}
	}

	pub fn sum(&self) -> Money {
		self.x0 + self.x1
	}

	pub(crate) fn validate(&self) -> Result<(), SolverError> {
		validate_amount(self.x0)?;
		validate_amount(self.x1)
	}
}

impl From<(Money, Money)> for Balances {
	fn from(value: (Money, Money)) -> Self {
		Self::new(value.0, value.1)
	}
}

/// Selects which of the two balances is the unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetIndex {
	First,
	Second,
}

impl AssetIndex {
	pub fn other(self) -> Self {
		match self {
			AssetIndex::First => AssetIndex::Second,
			AssetIndex::Second => AssetIndex::First,
		}
	}
}

impl TryFrom<usize> for AssetIndex {
	type Error = SolverError;

	fn try_from(value: usize) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(AssetIndex::First),
			1 => Ok(AssetIndex::Second),
			_ => Err(SolverError::InvalidAssetIndex),
		}
	}
}

impl From<AssetIndex> for usize {
	fn from(value: AssetIndex) -> Self {
		match value {
			AssetIndex::First => 0,
			AssetIndex::Second => 1,
		}
	}
}

/// Curve parameters in the solver's native unit.
///
/// `ann` is the amplification already multiplied by `N^N` (4 for two assets),
/// without the on-chain `A_MULTIPLIER` scaling. `gamma` is a plain fraction,
/// e.g. `0.000145`, and is only read by the cryptoswap curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
	pub ann: Money,
	pub gamma: Money,
}

impl CurveParams {
	pub fn new(ann: Money, gamma: Money) -> Self {
		Self { ann, gamma }
	}

	pub(crate) fn validate(&self) -> Result<(), SolverError> {
		ensure!(Float::is_finite(self.ann) && Float::is_finite(self.gamma), SolverError::InvalidParameter);
		ensure!(self.ann >= 0.0 && self.gamma >= 0.0, SolverError::InvalidParameter);
		Ok(())
	}
}

/// Checks that `v` is a usable balance or invariant value.
pub(crate) fn validate_amount(v: Money) -> Result<(), SolverError> {
	ensure!(Float::is_finite(v), SolverError::NonFinite);
	ensure!(v > 0.0, SolverError::NonPositive);
	Ok(())
}

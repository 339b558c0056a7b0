//! # Curve Invariant Math
//!
//! Newton solvers for the two-asset StableSwap and cryptopool invariant
//! equations: the invariant `D` for given balances, and the balance `y` of
//! one asset for a given `D`.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(not(feature = "std"), test))]
extern crate std;

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod convention;
pub mod cryptoswap;
pub mod curve;
pub mod newton;
pub mod onchain;
pub mod stableswap;
pub mod types;

pub use curve::{solve_balance, solve_invariant, Curve};
pub use newton::SolverConfig;

#[macro_export]
macro_rules! ensure {
	($e:expr, $f:expr) => {
		match $e {
			true => (),
			false => {
				return Err($f);
			}
		}
	};
}

#[macro_export]
macro_rules! to_u256 {
    ($($x:expr),+) => (
        {($(U256::from($x)),+)}
    );
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum SolverError {
	/// Iteration budget exhausted before the step fell below the tolerance.
	DidNotConverge,
	/// Derivative vanished, or was too small to take a finite step from.
	ZeroDerivative,
	/// An input or iterate is NaN or infinite.
	NonFinite,
	/// A balance or invariant is zero or negative.
	NonPositive,
	/// Negative or non-finite curve parameter, or an unusable solver config.
	InvalidParameter,
	InvalidAssetIndex,
}

impl SolverError {
	/// Newton iteration failed to settle. A zero derivative is treated as a special case.
	pub fn is_convergence_failure(&self) -> bool {
		matches!(self, SolverError::DidNotConverge | SolverError::ZeroDerivative)
	}

	pub fn is_domain_violation(&self) -> bool {
		matches!(self, SolverError::NonFinite | SolverError::NonPositive)
	}
}

impl core::fmt::Display for SolverError {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		let msg = match self {
			SolverError::DidNotConverge => "newton iteration did not converge",
			SolverError::ZeroDerivative => "zero derivative during newton step",
			SolverError::NonFinite => "value is not finite",
			SolverError::NonPositive => "value is not positive",
			SolverError::InvalidParameter => "invalid curve parameter or solver config",
			SolverError::InvalidAssetIndex => "asset index out of range",
		};
		f.write_str(msg)
	}
}

#[cfg(feature = "std")]
impl std::error::Error for SolverError {}

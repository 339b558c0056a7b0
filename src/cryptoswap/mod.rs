//! Two-asset cryptoswap curve:
//!
//! `K * D * (x0 + x1) + x0 * x1 = K * D^2 + (D / 2)^2`, with
//! `K0 = 4 * x0 * x1 / D^2` and `K = Ann * K0 * gamma^2 / (gamma + 1 - K0)^2`.
//!
//! `gamma` sets how far from the peg the curve keeps its stableswap-like flat
//! region; with `gamma == 0` it is the constant product curve.
mod math;

#[cfg(test)]
mod tests;

pub use math::*;

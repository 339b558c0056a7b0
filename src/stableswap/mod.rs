//! Two-asset stableswap curve:
//!
//! `Ann * (x0 + x1) + D = Ann * D + D^3 / (4 * x0 * x1)`
//!
//! This is the curve the reference simulator solves; `gamma` is accepted
//! alongside the amplification but does not enter the equation.
mod math;

#[cfg(test)]
mod tests;

pub use math::*;

//! Integer stableswap math as the on-chain contract runs it, and a check of
//! the real-valued solver against it.
//!
//! Amplification here is the contract's `ANN = A * N^N * A_MULTIPLIER`.
mod equivalence;
mod math;


pub use equivalence::*;
pub use math::*;

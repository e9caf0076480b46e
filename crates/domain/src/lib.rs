//! Domain types and pure math for concentrated-liquidity repositioning.
//!
//! This crate holds everything that can be computed without touching the
//! chain: asset descriptors, tick ranges, position targets, and the
//! range-bound collateral math used by the repositioning planner.

/// Error types for domain math.
pub mod errors;
/// Concentrated-liquidity and tick/price math.
pub mod math;
/// Tick ranges, mint targets, and reposition targets.
pub mod position;
/// Asset descriptors and smallest-unit amounts.
pub mod token;

pub use errors::MathError;
pub use position::{MintTarget, RepositionTarget, TickRange};
pub use token::{Token, TokenAmount};

//! Repositioning planner for concentrated-liquidity positions.
//!
//! Given a position that has drifted out of its price range, the planner
//! computes how to burn it, swap the right fraction of the freed collateral
//! into the opposite asset, and re-mint at the target range, emitting one
//! atomic settlement directive:
//! - out-of-range direction and freed-collateral sizing
//! - target balance fraction and impact-padded swap fraction
//! - impact-bounded swap limit price
//! - burn + swap + mint directive assembly, gas estimation, submission

/// Prelude module for convenient imports.
pub mod prelude;

/// Collaborator interfaces to the chain (pool view, swap planner, settlement).
pub mod collaborators;
/// Planner configuration.
pub mod config;
/// Error taxonomy.
pub mod errors;
/// The repositioning pipeline.
pub mod planner;

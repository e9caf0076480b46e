//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use rebal_planner::prelude::*;
//! ```

pub use crate::collaborators::{
    ChainContext, PoolView, SettlementContract, SpotSnapshot, SwapPlanner, TxHandle,
};
pub use crate::config::RepositionConfig;
pub use crate::errors::PlanError;
pub use crate::planner::{FRACTION_DENOM, PostBalance, RepositionPlanner};

pub use rebal_directive::{OrderDirective, OrderDirectiveBuilder};
pub use rebal_domain::{MintTarget, RepositionTarget, TickRange, Token, TokenAmount};

//! Settlement directive data model and wire encoding.
//!
//! A directive is the ordered instruction set (open token, hops, pool legs)
//! a settlement contract executes atomically. Leg ordering is significant
//! to the consuming contract and is preserved exactly by the encoding.

/// Append-only builder yielding an immutable directive.
pub mod builder;
/// Directive structures, roll-type constants, and byte encoding.
pub mod order;

pub use builder::OrderDirectiveBuilder;
pub use order::{
    AmbientLeg, DirectiveError, HopLeg, NO_ROLL, OrderDirective, PassiveLeg, PoolLeg, ROLL_BALANCE,
    ROLL_FRACTION, RangeLeg, SettlementLeg, SwapLeg,
};

//! Pure math for concentrated-liquidity positions.
//!
//! Price model used throughout the workspace: pool price is the base/quote
//! reserve ratio, so per unit of liquidity a position in range holds
//! `base = L * (sqrt(P) - sqrt(Pl))` and `quote = L * (1/sqrt(P) - 1/sqrt(Pu))`.
//! A position converts fully to the base asset once price reaches its upper
//! bound and fully to the quote asset at its lower bound.

mod concentrated_liquidity;
mod price_tick;

pub use concentrated_liquidity::{
    base_token_for_conc_liq, conc_deposit_balance, quote_token_for_conc_liq,
};
pub use price_tick::{MAX_TICK, MIN_TICK, price_to_sqrt_q64, price_to_tick, tick_to_price};

use crate::errors::MathError;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Lowest tick supported by the pool's discretized price scale.
pub const MIN_TICK: i32 = -887_272;
/// Highest tick supported by the pool's discretized price scale.
pub const MAX_TICK: i32 = 887_272;

/// Returns the price corresponding to a given tick.
/// P = 1.0001 ^ tick
pub fn tick_to_price(tick: i32) -> Result<Decimal, MathError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfBounds(tick));
    }
    let price = 1.0001f64.powi(tick);
    Decimal::from_f64(price).ok_or(MathError::NumericOverflow)
}

/// Returns the tick corresponding to a given price.
/// tick = log_1.0001(P), rounded to the nearest tick so that a price
/// derived from a tick round-trips back to the same tick.
pub fn price_to_tick(price: Decimal) -> Result<i32, MathError> {
    if price <= Decimal::ZERO {
        return Err(MathError::NonPositivePrice);
    }
    let price = price.to_f64().ok_or(MathError::NumericOverflow)?;
    let tick = price.log(1.0001f64).round() as i32;
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfBounds(tick));
    }
    Ok(tick)
}

/// Encodes a price into the pool's native Q64.64 square-root representation.
pub fn price_to_sqrt_q64(price: Decimal) -> Result<u128, MathError> {
    if price <= Decimal::ZERO {
        return Err(MathError::NonPositivePrice);
    }
    let price = price.to_f64().ok_or(MathError::NumericOverflow)?;
    let sqrt_q64 = price.sqrt() * 2f64.powi(64);
    if !sqrt_q64.is_finite() || sqrt_q64 >= u128::MAX as f64 {
        return Err(MathError::NumericOverflow);
    }
    Ok(sqrt_q64 as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_to_price() {
        // Tick 0 -> Price 1
        let p = tick_to_price(0).unwrap();
        assert_eq!(p, Decimal::from(1));

        // Tick 100 -> 1.0001^100 ~= 1.010049
        let p100 = tick_to_price(100).unwrap();
        let diff = (p100.to_f64().unwrap() - 1.01004966).abs();
        assert!(diff < 0.000001);
    }

    #[test]
    fn test_tick_to_price_monotonic() {
        let ticks = [-100_000, -5_000, -1, 0, 1, 100, 5_000, 100_000];
        for window in ticks.windows(2) {
            let lower = tick_to_price(window[0]).unwrap();
            let upper = tick_to_price(window[1]).unwrap();
            assert!(lower < upper, "ticks {} and {}", window[0], window[1]);
        }
    }

    #[test]
    fn test_price_to_tick_round_trip() {
        for tick in [-50_000, -123, 0, 1, 250, 77_777] {
            let price = tick_to_price(tick).unwrap();
            assert_eq!(price_to_tick(price).unwrap(), tick);
        }
    }

    #[test]
    fn test_tick_bounds() {
        assert!(tick_to_price(MAX_TICK + 1).is_err());
        assert!(tick_to_price(MIN_TICK - 1).is_err());
        assert!(price_to_tick(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_price_to_sqrt_q64() {
        // sqrt(4) = 2, so the encoding is exactly 2^65
        let q = price_to_sqrt_q64(Decimal::from(4)).unwrap();
        assert_eq!(q, 1u128 << 65);

        assert!(price_to_sqrt_q64(Decimal::ZERO).is_err());
    }
}

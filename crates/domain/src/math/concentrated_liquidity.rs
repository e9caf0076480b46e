use crate::errors::MathError;
use crate::token::TokenAmount;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Fraction of a concentrated position's value held as the base asset,
/// for a range [lower, upper) at the given spot price.
///
/// Exactly 0 at or below the lower bound (all quote), exactly 1 at or
/// above the upper bound (all base), and a smooth interpolation inside.
/// Square roots go through f64; error stays below 1 part in 10^4, the
/// granularity of the downstream swap-fraction encoding.
pub fn conc_deposit_balance(
    spot_price: Decimal,
    lower_price: Decimal,
    upper_price: Decimal,
) -> Result<Decimal, MathError> {
    check_price_range(lower_price, upper_price)?;
    if spot_price <= Decimal::ZERO {
        return Err(MathError::NonPositivePrice);
    }

    if spot_price <= lower_price {
        return Ok(Decimal::ZERO);
    }
    if spot_price >= upper_price {
        return Ok(Decimal::ONE);
    }

    let spot = spot_price.to_f64().ok_or(MathError::NumericOverflow)?;
    let sqrt_spot = spot.sqrt();
    let sqrt_lower = sqrt_f64(lower_price)?;
    let sqrt_upper = sqrt_f64(upper_price)?;

    // Per unit of liquidity, valued in base units at the spot price:
    //   base  = sqrt(P) - sqrt(Pl)
    //   quote = (1/sqrt(P) - 1/sqrt(Pu)) * P = sqrt(P) - P/sqrt(Pu)
    let base_value = sqrt_spot - sqrt_lower;
    let quote_value = sqrt_spot - spot / sqrt_upper;
    let fraction = base_value / (base_value + quote_value);

    Decimal::from_f64(fraction).ok_or(MathError::NumericOverflow)
}

/// Absolute base-asset quantity a liquidity magnitude represents at the
/// given price and range. Saturates at the range bounds, so for a spot at
/// or above the upper bound this is the full single-sided base collateral.
pub fn base_token_for_conc_liq(
    spot_price: Decimal,
    liquidity: u128,
    lower_price: Decimal,
    upper_price: Decimal,
) -> Result<TokenAmount, MathError> {
    check_price_range(lower_price, upper_price)?;
    if spot_price <= Decimal::ZERO {
        return Err(MathError::NonPositivePrice);
    }

    let clamped = spot_price.clamp(lower_price, upper_price);
    let factor = sqrt_f64(clamped)? - sqrt_f64(lower_price)?;
    liq_times_factor(liquidity, factor)
}

/// Absolute quote-asset quantity a liquidity magnitude represents at the
/// given price and range. For a spot at or below the lower bound this is
/// the full single-sided quote collateral.
pub fn quote_token_for_conc_liq(
    spot_price: Decimal,
    liquidity: u128,
    lower_price: Decimal,
    upper_price: Decimal,
) -> Result<TokenAmount, MathError> {
    check_price_range(lower_price, upper_price)?;
    if spot_price <= Decimal::ZERO {
        return Err(MathError::NonPositivePrice);
    }

    let clamped = spot_price.clamp(lower_price, upper_price);
    let factor = 1.0 / sqrt_f64(clamped)? - 1.0 / sqrt_f64(upper_price)?;
    liq_times_factor(liquidity, factor)
}

fn check_price_range(lower: Decimal, upper: Decimal) -> Result<(), MathError> {
    if lower <= Decimal::ZERO || upper <= Decimal::ZERO {
        return Err(MathError::NonPositivePrice);
    }
    if lower >= upper {
        return Err(MathError::InvalidPriceRange);
    }
    Ok(())
}

fn sqrt_f64(price: Decimal) -> Result<f64, MathError> {
    let price = price.to_f64().ok_or(MathError::NumericOverflow)?;
    Ok(price.sqrt())
}

fn liq_times_factor(liquidity: u128, factor: f64) -> Result<TokenAmount, MathError> {
    let factor = Decimal::from_f64(factor).ok_or(MathError::NumericOverflow)?;
    let liquidity = Decimal::from_u128(liquidity).ok_or(MathError::NumericOverflow)?;
    let amount = liquidity
        .checked_mul(factor)
        .ok_or(MathError::NumericOverflow)?;
    let amount = amount.to_u128().ok_or(MathError::NumericOverflow)?;
    Ok(TokenAmount::from(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deposit_balance_outside_range() {
        // Below the range the position is all quote, above it all base.
        let low = conc_deposit_balance(dec!(0.5), dec!(1), dec!(4)).unwrap();
        assert_eq!(low, Decimal::ZERO);

        let high = conc_deposit_balance(dec!(5), dec!(1), dec!(4)).unwrap();
        assert_eq!(high, Decimal::ONE);

        // Boundary prices count as outside.
        assert_eq!(
            conc_deposit_balance(dec!(1), dec!(1), dec!(4)).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            conc_deposit_balance(dec!(4), dec!(1), dec!(4)).unwrap(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_deposit_balance_geometric_mean() {
        // At the geometric mean of the bounds the split is exactly 50/50.
        let mid = conc_deposit_balance(dec!(2), dec!(1), dec!(4)).unwrap();
        assert_eq!(mid, dec!(0.5));
    }

    #[test]
    fn test_deposit_balance_monotonic_in_spot() {
        let mut prev = Decimal::ZERO;
        for spot in [dec!(1.2), dec!(1.8), dec!(2.4), dec!(3.0), dec!(3.8)] {
            let frac = conc_deposit_balance(spot, dec!(1), dec!(4)).unwrap();
            assert!(frac > prev && frac < Decimal::ONE);
            prev = frac;
        }
    }

    #[test]
    fn test_deposit_balance_rejects_bad_range() {
        assert!(matches!(
            conc_deposit_balance(dec!(2), dec!(4), dec!(1)),
            Err(MathError::InvalidPriceRange)
        ));
        assert!(matches!(
            conc_deposit_balance(dec!(0), dec!(1), dec!(4)),
            Err(MathError::NonPositivePrice)
        ));
    }

    #[test]
    fn test_base_token_amounts() {
        // Price 1 -> 4 has sqrt bounds 1 -> 2. Above range the position
        // holds L * (2 - 1) = L base tokens; at the lower bound none.
        let liquidity = 1000u128;
        let above = base_token_for_conc_liq(dec!(9), liquidity, dec!(1), dec!(4)).unwrap();
        assert_eq!(above, TokenAmount::from(1000u64));

        let at_lower = base_token_for_conc_liq(dec!(1), liquidity, dec!(1), dec!(4)).unwrap();
        assert_eq!(at_lower, TokenAmount::zero());
    }

    #[test]
    fn test_quote_token_amounts() {
        // Below range the position holds L * (1/1 - 1/2) = L/2 quote tokens.
        let liquidity = 1000u128;
        let below = quote_token_for_conc_liq(dec!(0.25), liquidity, dec!(1), dec!(4)).unwrap();
        assert_eq!(below, TokenAmount::from(500u64));

        let at_upper = quote_token_for_conc_liq(dec!(4), liquidity, dec!(1), dec!(4)).unwrap();
        assert_eq!(at_upper, TokenAmount::zero());
    }
}

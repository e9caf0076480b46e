use crate::errors::MathError;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Asset descriptor for one side of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    pub name: String,
}

impl Token {
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        name: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
            name: name.into(),
        }
    }

    /// Converts a smallest-unit amount to a display-precision decimal.
    pub fn display_amount(&self, amount: TokenAmount) -> Result<Decimal, MathError> {
        // Decimal carries at most 28 fractional digits.
        if self.decimals > 28 {
            return Err(MathError::NumericOverflow);
        }
        let raw =
            Decimal::from_str(&amount.0.to_string()).map_err(|_| MathError::NumericOverflow)?;
        Ok(raw * Decimal::new(1, u32::from(self.decimals)))
    }
}

/// Amount in the asset's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenAmount(pub U256);

impl TokenAmount {
    pub fn new(amount: impl Into<U256>) -> Self {
        Self(amount.into())
    }

    pub fn zero() -> Self {
        Self(U256::zero())
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }
}

impl From<u64> for TokenAmount {
    fn from(v: u64) -> Self {
        Self(U256::from(v))
    }
}

impl From<u128> for TokenAmount {
    fn from(v: u128) -> Self {
        Self(U256::from(v))
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_amount() {
        let usdc = Token::new("0xa0b8...", "USDC", 6, "USD Coin");
        let amount = TokenAmount::from(1_250_000u64);
        assert_eq!(usdc.display_amount(amount).unwrap(), dec!(1.25));
    }

    #[test]
    fn test_display_amount_zero_decimals() {
        let t = Token::new("0x0", "RAW", 0, "Raw");
        let amount = TokenAmount::from(42u64);
        assert_eq!(t.display_amount(amount).unwrap(), dec!(42));
    }
}

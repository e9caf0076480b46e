use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configuration for a reposition attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RepositionConfig {
    /// Fractional slippage/impact tolerance. Pads the swap limit price and
    /// inflates the swap fraction so the new position lands inside its
    /// target range even if price moves between planning and execution.
    pub impact: Decimal,
    /// Percentage added on top of the gas estimate before submission.
    pub gas_headroom_pct: u64,
}

impl Default for RepositionConfig {
    fn default() -> Self {
        Self {
            impact: Decimal::new(2, 2), // 2%
            gas_headroom_pct: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = RepositionConfig::default();
        assert_eq!(config.impact, dec!(0.02));
        assert_eq!(config.gas_headroom_pct, 25);
    }
}

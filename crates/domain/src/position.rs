use crate::errors::MathError;
use crate::math::{MAX_TICK, MIN_TICK};
use serde::{Deserialize, Serialize};

/// Ordered pair of tick bounds, `lower < upper`. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRange {
    lower: i32,
    upper: i32,
}

impl TickRange {
    pub fn new(lower: i32, upper: i32) -> Result<Self, MathError> {
        if !(MIN_TICK..=MAX_TICK).contains(&lower) {
            return Err(MathError::TickOutOfBounds(lower));
        }
        if !(MIN_TICK..=MAX_TICK).contains(&upper) {
            return Err(MathError::TickOutOfBounds(upper));
        }
        if lower >= upper {
            return Err(MathError::InvalidTickRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> i32 {
        self.lower
    }

    pub fn upper(&self) -> i32 {
        self.upper
    }

    /// Half-open containment: `lower <= tick < upper`.
    pub fn contains_tick(&self, tick: i32) -> bool {
        tick >= self.lower && tick < self.upper
    }
}

/// Where the rebalanced liquidity goes: full-range or a concrete range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MintTarget {
    /// Full-range position, balanced 50/50 by value at any price.
    Ambient,
    /// Concentrated position over the given tick range.
    Range(TickRange),
}

/// One rebalance attempt: burn `liquidity` from `burn`, re-mint at `mint`.
///
/// The burn side is always a concrete range; an ambient position never
/// leaves range and therefore never needs rebalancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositionTarget {
    pub mint: MintTarget,
    pub burn: TickRange,
    pub liquidity: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_range_ordering() {
        assert!(TickRange::new(100, 200).is_ok());
        assert!(matches!(
            TickRange::new(200, 100),
            Err(MathError::InvalidTickRange { .. })
        ));
        assert!(matches!(
            TickRange::new(100, 100),
            Err(MathError::InvalidTickRange { .. })
        ));
    }

    #[test]
    fn test_tick_range_bounds() {
        assert!(matches!(
            TickRange::new(MIN_TICK - 1, 0),
            Err(MathError::TickOutOfBounds(_))
        ));
        assert!(matches!(
            TickRange::new(0, MAX_TICK + 1),
            Err(MathError::TickOutOfBounds(_))
        ));
    }

    #[test]
    fn test_contains_tick_half_open() {
        let range = TickRange::new(100, 200).unwrap();
        assert!(range.contains_tick(100));
        assert!(range.contains_tick(199));
        assert!(!range.contains_tick(200));
        assert!(!range.contains_tick(99));
    }
}

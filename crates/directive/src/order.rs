use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Leg quantity is the literal value carried in the directive.
pub const NO_ROLL: u8 = 0;
/// Leg quantity is a fraction of the rolled-up balance, in 1/10000 units.
pub const ROLL_FRACTION: u8 = 4;
/// Leg quantity resolves to the entire rolled-up balance at execution time.
pub const ROLL_BALANCE: u8 = 5;

/// Version byte prefixed to every encoded directive.
const SCHEMA_VERSION: u8 = 1;

/// Errors from directive construction and encoding.
#[derive(Debug, Error)]
pub enum DirectiveError {
    /// Builder was driven in an order the wire format cannot express.
    #[error("malformed directive: {0}")]
    Malformed(&'static str),
    /// Payload carries a schema version this crate does not understand.
    #[error("unsupported directive schema version {0}")]
    UnsupportedSchema(u8),
    /// Serialization failure.
    #[error("directive encoding failed: {0}")]
    Encode(#[from] std::io::Error),
}

/// Token settlement at a directive boundary.
///
/// `limit_qty` is the minimum net flow the caller will accept for this
/// token; the planner always leaves it at zero and relies on the swap
/// leg's limit price for protection.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct SettlementLeg {
    pub token: String,
    pub limit_qty: i128,
    pub dust_thresh: u128,
    pub use_surplus: bool,
}

impl SettlementLeg {
    /// Settlement leg for a token with no flow floor.
    pub fn for_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            limit_qty: 0,
            dust_thresh: 0,
            use_surplus: false,
        }
    }
}

/// Swap action inside a pool leg.
///
/// `is_buy = true` means the swap sends base and receives quote.
/// `limit_price` is the worst acceptable execution price in the pool's
/// native Q64.64 square-root representation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct SwapLeg {
    pub is_buy: bool,
    pub in_base_qty: bool,
    pub roll_type: u8,
    pub qty: u128,
    pub limit_price: u128,
}

/// Full-range liquidity action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct AmbientLeg {
    pub is_add: bool,
    pub roll_type: u8,
    pub liquidity: u128,
}

/// Concentrated liquidity action over a tick range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct RangeLeg {
    pub is_add: bool,
    pub roll_type: u8,
    pub low_tick: i32,
    pub high_tick: i32,
    pub liquidity: u128,
}

/// Passive (liquidity) action carried by a pool leg.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub enum PassiveLeg {
    Ambient(AmbientLeg),
    Range(RangeLeg),
}

/// One pool occurrence within a hop. The passive action precedes the swap
/// in the encoding, matching the execution order of the settlement contract.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct PoolLeg {
    pub pool_idx: u64,
    pub passive: Option<PassiveLeg>,
    pub swap: Option<SwapLeg>,
}

/// Hop to the next settlement token, with its pool legs.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct HopLeg {
    pub settlement: SettlementLeg,
    pub pools: Vec<PoolLeg>,
}

/// Complete directive: open-token settlement followed by ordered hops.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct OrderDirective {
    pub open: SettlementLeg,
    pub hops: Vec<HopLeg>,
}

impl OrderDirective {
    /// Canonical byte serialization: schema-version byte followed by the
    /// borsh encoding of the structure. Stable wire format.
    pub fn encode(&self) -> Result<Vec<u8>, DirectiveError> {
        let mut payload = vec![SCHEMA_VERSION];
        payload.extend(borsh::to_vec(self)?);
        Ok(payload)
    }

    /// Inverse of [`encode`](Self::encode). Intended for tests and debugging.
    pub fn decode(payload: &[u8]) -> Result<Self, DirectiveError> {
        let (version, rest) = payload
            .split_first()
            .ok_or(DirectiveError::Malformed("empty payload"))?;
        if *version != SCHEMA_VERSION {
            return Err(DirectiveError::UnsupportedSchema(*version));
        }
        Ok(Self::try_from_slice(rest)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderDirective {
        OrderDirective {
            open: SettlementLeg::for_token("0xbase"),
            hops: vec![HopLeg {
                settlement: SettlementLeg::for_token("0xquote"),
                pools: vec![PoolLeg {
                    pool_idx: 420,
                    passive: Some(PassiveLeg::Range(RangeLeg {
                        is_add: false,
                        roll_type: NO_ROLL,
                        low_tick: 100,
                        high_tick: 200,
                        liquidity: 1_000_000,
                    })),
                    swap: Some(SwapLeg {
                        is_buy: true,
                        in_base_qty: true,
                        roll_type: ROLL_FRACTION,
                        qty: 5200,
                        limit_price: 1 << 64,
                    }),
                }],
            }],
        }
    }

    #[test]
    fn test_encode_round_trip() {
        let directive = sample();
        let payload = directive.encode().unwrap();
        assert_eq!(payload[0], SCHEMA_VERSION);
        let decoded = OrderDirective::decode(&payload).unwrap();
        assert_eq!(decoded, directive);
    }

    #[test]
    fn test_encode_deterministic() {
        assert_eq!(sample().encode().unwrap(), sample().encode().unwrap());
    }

    #[test]
    fn test_decode_rejects_unknown_schema() {
        let mut payload = sample().encode().unwrap();
        payload[0] = 9;
        assert!(matches!(
            OrderDirective::decode(&payload),
            Err(DirectiveError::UnsupportedSchema(9))
        ));
        assert!(matches!(
            OrderDirective::decode(&[]),
            Err(DirectiveError::Malformed(_))
        ));
    }
}

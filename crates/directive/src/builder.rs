use crate::order::{
    AmbientLeg, DirectiveError, HopLeg, NO_ROLL, OrderDirective, PassiveLeg, PoolLeg,
    ROLL_BALANCE, RangeLeg, SettlementLeg, SwapLeg,
};

/// Append-only builder for [`OrderDirective`].
///
/// Legs are attached in call order and the finished directive is immutable;
/// a partially-built directive never crosses an API boundary. Structural
/// misuse (a pool leg before any hop, a swap before any pool leg) is
/// latched and reported by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct OrderDirectiveBuilder {
    open: SettlementLeg,
    hops: Vec<HopLeg>,
    malformed: Option<&'static str>,
}

impl OrderDirectiveBuilder {
    /// Starts a directive opening with the given settlement token.
    pub fn new(open_token: impl Into<String>) -> Self {
        Self {
            open: SettlementLeg::for_token(open_token),
            hops: Vec::new(),
            malformed: None,
        }
    }

    /// Appends a hop to the given settlement token.
    pub fn hop(mut self, token: impl Into<String>) -> Self {
        self.hops.push(HopLeg {
            settlement: SettlementLeg::for_token(token),
            pools: Vec::new(),
        });
        self
    }

    /// Appends a pool leg to the current hop.
    pub fn pool(mut self, pool_idx: u64) -> Self {
        let reason = match self.hops.last_mut() {
            Some(hop) => {
                hop.pools.push(PoolLeg {
                    pool_idx,
                    passive: None,
                    swap: None,
                });
                None
            }
            None => Some("pool leg before any hop"),
        };
        if let Some(reason) = reason {
            self.latch(reason);
        }
        self
    }

    /// Attaches a range burn (fixed liquidity) to the current pool leg.
    pub fn range_burn(mut self, low_tick: i32, high_tick: i32, liquidity: u128) -> Self {
        self.set_passive(PassiveLeg::Range(RangeLeg {
            is_add: false,
            roll_type: NO_ROLL,
            low_tick,
            high_tick,
            liquidity,
        }));
        self
    }

    /// Attaches a range mint whose size resolves to the entire rolled-up
    /// balance produced by the preceding legs.
    pub fn range_mint_rolled(mut self, low_tick: i32, high_tick: i32) -> Self {
        self.set_passive(PassiveLeg::Range(RangeLeg {
            is_add: true,
            roll_type: ROLL_BALANCE,
            low_tick,
            high_tick,
            liquidity: 0,
        }));
        self
    }

    /// Attaches a full-range mint sized from the rolled-up balance.
    pub fn ambient_mint_rolled(mut self) -> Self {
        self.set_passive(PassiveLeg::Ambient(AmbientLeg {
            is_add: true,
            roll_type: ROLL_BALANCE,
            liquidity: 0,
        }));
        self
    }

    /// Attaches a swap to the current pool leg.
    pub fn swap(mut self, swap: SwapLeg) -> Self {
        let reason = match self.current_pool() {
            Some(pool) => {
                if pool.swap.is_none() {
                    pool.swap = Some(swap);
                    None
                } else {
                    Some("pool leg already carries a swap")
                }
            }
            None => Some("swap before any pool leg"),
        };
        if let Some(reason) = reason {
            self.latch(reason);
        }
        self
    }

    /// Finishes the directive, surfacing any structural misuse.
    pub fn build(self) -> Result<OrderDirective, DirectiveError> {
        if let Some(reason) = self.malformed {
            return Err(DirectiveError::Malformed(reason));
        }
        if self.hops.is_empty() {
            return Err(DirectiveError::Malformed("directive has no hops"));
        }
        Ok(OrderDirective {
            open: self.open,
            hops: self.hops,
        })
    }

    fn set_passive(&mut self, passive: PassiveLeg) {
        let reason = match self.current_pool() {
            Some(pool) => {
                if pool.passive.is_none() {
                    pool.passive = Some(passive);
                    None
                } else {
                    Some("pool leg already carries a passive action")
                }
            }
            None => Some("passive action before any pool leg"),
        };
        if let Some(reason) = reason {
            self.latch(reason);
        }
    }

    fn current_pool(&mut self) -> Option<&mut PoolLeg> {
        self.hops.last_mut().and_then(|hop| hop.pools.last_mut())
    }

    fn latch(&mut self, reason: &'static str) {
        if self.malformed.is_none() {
            self.malformed = Some(reason);
        }
    }
}

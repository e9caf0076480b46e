use crate::collaborators::{PoolView, SettlementContract, SpotSnapshot, SwapPlanner, TxHandle};
use crate::config::RepositionConfig;
use crate::errors::PlanError;
use primitive_types::U256;
use rebal_directive::{OrderDirective, OrderDirectiveBuilder, ROLL_FRACTION, SwapLeg};
use rebal_domain::math::{
    base_token_for_conc_liq, conc_deposit_balance, price_to_sqrt_q64, quote_token_for_conc_liq,
    tick_to_price,
};
use rebal_domain::{MathError, MintTarget, RepositionTarget, Token, TokenAmount};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

/// Denominator of the swap-fraction encoding (1/10000 units).
pub const FRACTION_DENOM: u32 = 10_000;

/// Projected composition of the new position after burn + swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostBalance {
    /// Base-asset amount, display precision.
    pub base: Decimal,
    /// Quote-asset amount, display precision.
    pub quote: Decimal,
}

/// Plans one atomic burn → swap → mint reposition of a concentrated
/// position that has exited its range.
///
/// The spot snapshot is taken once, eagerly, at construction; every derived
/// stage is a pure function of that snapshot and the target, so concurrent
/// calls to the query methods are mutually consistent. A planner is used
/// for a single attempt and discarded once its directive is submitted.
pub struct RepositionPlanner {
    pool: Arc<dyn PoolView>,
    swaps: Arc<dyn SwapPlanner>,
    settlement: Arc<dyn SettlementContract>,
    target: RepositionTarget,
    config: RepositionConfig,
    snapshot: SpotSnapshot,
}

impl RepositionPlanner {
    /// Creates a planner, taking the spot snapshot up front.
    pub async fn new(
        pool: Arc<dyn PoolView>,
        swaps: Arc<dyn SwapPlanner>,
        settlement: Arc<dyn SettlementContract>,
        target: RepositionTarget,
        config: RepositionConfig,
    ) -> Result<Self, PlanError> {
        let snapshot = pool.spot_snapshot().await.map_err(PlanError::RemoteRead)?;
        debug!(
            price = %snapshot.price,
            tick = snapshot.tick,
            burn = format!("[{}, {})", target.burn.lower(), target.burn.upper()),
            "took spot snapshot"
        );
        Ok(Self {
            pool,
            swaps,
            settlement,
            target,
            config,
            snapshot,
        })
    }

    /// Spot snapshot this planner was built against.
    pub fn snapshot(&self) -> SpotSnapshot {
        self.snapshot
    }

    /// Which side of the burn range the market moved to: `true` when the
    /// market rose to or above the upper tick (value now all base),
    /// `false` when it fell below the lower tick (value now all quote).
    ///
    /// Fails with [`PlanError::PositionNotOutOfRange`] while the burn range
    /// still contains the spot tick.
    pub fn is_base_out_of_range(&self) -> Result<bool, PlanError> {
        let burn = self.target.burn;
        if self.snapshot.tick >= burn.upper() {
            Ok(true)
        } else if self.snapshot.tick < burn.lower() {
            Ok(false)
        } else {
            Err(PlanError::PositionNotOutOfRange {
                lower: burn.lower(),
                upper: burn.upper(),
                spot_tick: self.snapshot.tick,
            })
        }
    }

    /// Absolute amount of the single asset the burn frees, in smallest
    /// units of the exited side.
    pub fn current_collateral(&self) -> Result<TokenAmount, PlanError> {
        let lower = tick_to_price(self.target.burn.lower())?;
        let upper = tick_to_price(self.target.burn.upper())?;
        let amount = if self.is_base_out_of_range()? {
            base_token_for_conc_liq(self.snapshot.price, self.target.liquidity, lower, upper)?
        } else {
            quote_token_for_conc_liq(self.snapshot.price, self.target.liquidity, lower, upper)?
        };
        Ok(amount)
    }

    /// Fraction of value the new position holds as the base asset.
    /// Exactly `0.5` for an ambient mint target.
    pub fn balance_percent(&self) -> Result<Decimal, PlanError> {
        let base_out = self.is_base_out_of_range()?;
        match self.target.mint {
            MintTarget::Ambient => Ok(Decimal::new(5, 1)),
            MintTarget::Range(range) => {
                let lower = tick_to_price(range.lower())?;
                let upper = tick_to_price(range.upper())?;
                let raw = conc_deposit_balance(self.snapshot.price, lower, upper)?;
                // Inverted when the base side is out of range so the
                // fraction names the asset being swapped away from.
                Ok(if base_out { Decimal::ONE - raw } else { raw })
            }
        }
    }

    /// Fraction of the freed collateral to route through the swap, in
    /// 1/10000 units, clamped to [0, 10000]. The impact tolerance is added
    /// on top of the balance target to bias the swap slightly larger than
    /// the theoretical minimum.
    pub fn swap_fraction(&self) -> Result<u32, PlanError> {
        let padded = (self.balance_percent()? + self.config.impact).min(Decimal::ONE);
        let units = (padded * Decimal::from(FRACTION_DENOM))
            .to_u32()
            .ok_or(MathError::NumericOverflow)?;
        Ok(units.min(FRACTION_DENOM))
    }

    /// Collateral amount actually routed through the swap.
    pub fn convert_collateral(&self) -> Result<TokenAmount, PlanError> {
        let collateral = self.current_collateral()?;
        let scaled = collateral
            .0
            .checked_mul(U256::from(self.swap_fraction()?))
            .ok_or(MathError::NumericOverflow)?;
        Ok(TokenAmount(scaled / U256::from(FRACTION_DENOM)))
    }

    /// Un-swapped remainder that funds the new position directly, in
    /// smallest units. Always the exact complement of
    /// [`convert_collateral`](Self::convert_collateral).
    pub fn mint_input_units(&self) -> Result<TokenAmount, PlanError> {
        let collateral = self.current_collateral()?;
        let converted = self.convert_collateral()?;
        let remainder = collateral
            .0
            .checked_sub(converted.0)
            .ok_or(MathError::NumericOverflow)?;
        Ok(TokenAmount(remainder))
    }

    /// Un-swapped remainder as a display-precision amount of the exited
    /// asset.
    pub fn mint_input(&self) -> Result<Decimal, PlanError> {
        let token = self.exited_token()?;
        Ok(token.display_amount(self.mint_input_units()?)?)
    }

    /// Projected swap output as a display-precision amount of the entered
    /// asset.
    pub async fn swap_output(&self) -> Result<Decimal, PlanError> {
        let sell = self.exited_token()?;
        let buy = self.entered_token()?;
        let output = self
            .swaps
            .projected_output(sell, buy, self.convert_collateral()?, self.config.impact)
            .await
            .map_err(PlanError::RemoteRead)?;
        Ok(buy.display_amount(output)?)
    }

    /// Projected composition of the new position: the un-swapped remainder
    /// plus the swap output, ordered by out-of-range direction.
    pub async fn post_balance(&self) -> Result<PostBalance, PlanError> {
        let base_out = self.is_base_out_of_range()?;
        let (swap_out, remainder) =
            tokio::try_join!(self.swap_output(), async { self.mint_input() })?;
        Ok(if base_out {
            PostBalance {
                base: remainder,
                quote: swap_out,
            }
        } else {
            PostBalance {
                base: swap_out,
                quote: remainder,
            }
        })
    }

    /// Worst acceptable execution price for the swap: spot padded up by the
    /// impact tolerance when selling base, down when buying it.
    pub fn limit_price(&self) -> Result<Decimal, PlanError> {
        let padding = if self.is_base_out_of_range()? {
            Decimal::ONE + self.config.impact
        } else {
            Decimal::ONE - self.config.impact
        };
        Ok(self.snapshot.price * padding)
    }

    /// Assembles the burn + swap + mint directive.
    ///
    /// Leg order within the hop: a pool leg carrying the range burn and the
    /// swap, then a second leg on the same pool index whose mint resolves
    /// from the rolled-up balance. Settlement `limit_qty` fields stay zero;
    /// protection comes from the swap leg's limit price alone.
    pub fn build_directive(&self) -> Result<OrderDirective, PlanError> {
        let base_out = self.is_base_out_of_range()?;
        let fraction = self.swap_fraction()?;
        let limit_price = price_to_sqrt_q64(self.limit_price()?)?;
        let swap = SwapLeg {
            is_buy: base_out,
            in_base_qty: base_out,
            roll_type: ROLL_FRACTION,
            qty: u128::from(fraction),
            limit_price,
        };

        let context = self.pool.context();
        let burn = self.target.burn;
        let builder = OrderDirectiveBuilder::new(self.pool.base_token().address.as_str())
            .hop(self.pool.quote_token().address.as_str())
            .pool(context.pool_idx)
            .range_burn(burn.lower(), burn.upper(), self.target.liquidity)
            .swap(swap)
            .pool(context.pool_idx);
        let builder = match self.target.mint {
            MintTarget::Ambient => builder.ambient_mint_rolled(),
            MintTarget::Range(range) => builder.range_mint_rolled(range.lower(), range.upper()),
        };

        debug!(
            base_out,
            swap_fraction = fraction,
            limit_price,
            "assembled reposition directive"
        );
        Ok(builder.build()?)
    }

    /// Builds, encodes, estimates gas with headroom, and submits.
    pub async fn rebal(&self) -> Result<TxHandle, PlanError> {
        let payload = self.build_directive()?.encode()?;
        let context = self.pool.context();
        let estimate = self
            .settlement
            .estimate_gas(context.long_form_call_path, &payload)
            .await
            .map_err(PlanError::RemoteRead)?;
        let gas_limit =
            estimate.saturating_add(estimate.saturating_mul(self.config.gas_headroom_pct) / 100);
        let tx = self
            .settlement
            .send_cmd(context.long_form_call_path, &payload, gas_limit)
            .await
            .map_err(PlanError::Submission)?;
        info!(tx_hash = %tx.tx_hash, gas_limit, "reposition submitted");
        Ok(tx)
    }

    /// Simulates the directive without committing state.
    pub async fn sim_static(&self) -> Result<Vec<u8>, PlanError> {
        let payload = self.build_directive()?.encode()?;
        let context = self.pool.context();
        self.settlement
            .static_cmd(context.long_form_call_path, &payload)
            .await
            .map_err(PlanError::RemoteRead)
    }

    /// Asset the position exited into (the side the swap sells).
    fn exited_token(&self) -> Result<&Token, PlanError> {
        Ok(if self.is_base_out_of_range()? {
            self.pool.base_token()
        } else {
            self.pool.quote_token()
        })
    }

    /// Asset the swap buys.
    fn entered_token(&self) -> Result<&Token, PlanError> {
        Ok(if self.is_base_out_of_range()? {
            self.pool.quote_token()
        } else {
            self.pool.base_token()
        })
    }
}

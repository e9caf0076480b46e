//! Interfaces to the external collaborators the planner depends on.
//!
//! Everything that involves a network round-trip lives behind these traits:
//! spot price/tick reads, swap-impact projection, gas estimation, and
//! directive submission. Timeouts are the collaborator's responsibility.

use async_trait::async_trait;
use rebal_domain::{Token, TokenAmount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time pool state. Price and tick must reflect the same block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotSnapshot {
    pub price: Decimal,
    pub tick: i32,
}

/// Chain-level routing data for directive submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContext {
    /// Pool index referenced by the directive's pool legs.
    pub pool_idx: u64,
    /// Proxy call path for long-form directives on the settlement contract.
    pub long_form_call_path: u16,
}

/// Handle to a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxHandle {
    pub tx_hash: String,
}

/// Read-only view of the pool being rebalanced.
#[async_trait]
pub trait PoolView: Send + Sync {
    /// One atomic read of spot price and spot tick.
    async fn spot_snapshot(&self) -> anyhow::Result<SpotSnapshot>;

    fn base_token(&self) -> &Token;

    fn quote_token(&self) -> &Token;

    fn context(&self) -> &ChainContext;
}

/// Projects the output of a swap at a given impact tolerance.
#[async_trait]
pub trait SwapPlanner: Send + Sync {
    async fn projected_output(
        &self,
        sell: &Token,
        buy: &Token,
        sell_qty: TokenAmount,
        impact: Decimal,
    ) -> anyhow::Result<TokenAmount>;
}

/// Generic command entry point of the settlement contract.
#[async_trait]
pub trait SettlementContract: Send + Sync {
    /// Estimates gas for executing the payload on the given call path.
    async fn estimate_gas(&self, call_path: u16, payload: &[u8]) -> anyhow::Result<u64>;

    /// Submits the payload for execution.
    async fn send_cmd(
        &self,
        call_path: u16,
        payload: &[u8],
        gas_limit: u64,
    ) -> anyhow::Result<TxHandle>;

    /// Simulates the payload without committing state.
    async fn static_cmd(&self, call_path: u16, payload: &[u8]) -> anyhow::Result<Vec<u8>>;
}

//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring the frequently used
//! items into scope:
//!
//! ```rust
//! use hydra_pair::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, DepositSpec, FeeTier, LiquidityRecord,
    Rounding, Shares, SwapSpec, Timestamp, TradeRecord,
};
pub use crate::error::{AmmError, Result};
pub use crate::ledger::{InMemoryLedger, LedgerPort};
pub use crate::pool::{Pool, SharedPool};

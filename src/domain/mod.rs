//! Fundamental domain value types used throughout the pair engine.
//!
//! This module contains the core value types that model the domain:
//! assets, accounts, amounts, shares, fees, clock values, and the swap
//! and liquidity operation descriptors. All types are newtypes with
//! validated constructors to enforce invariants.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod basis_points;
mod deposit_spec;
mod fee_tier;
mod records;
mod rounding;
mod shares;
mod swap_spec;
mod timestamp;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use deposit_spec::DepositSpec;
pub use fee_tier::FeeTier;
pub use records::{LiquidityDirection, LiquidityRecord, TradeRecord};
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_spec::SwapSpec;
pub use timestamp::Timestamp;

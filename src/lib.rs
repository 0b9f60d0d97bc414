//! # Hydra Pair
//!
//! Constant-product pair engine: two pooled asset reserves, the
//! `x · y = k` invariant enforced net of fees across every trade,
//! proportional ownership shares for liquidity providers, and a protocol
//! fee skimmed from invariant growth.
//!
//! Asset custody is **not** this crate's business. The two pooled assets
//! live on external ledgers reached through the
//! [`LedgerPort`](ledger::LedgerPort) trait, and the port is untrusted:
//! realized trade amounts are always re-derived from balance deltas and
//! checked against the fee-adjusted invariant before anything commits.
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_pair::config::PoolConfig;
//! use hydra_pair::domain::{
//!     AccountId, Amount, AssetId, AssetPair, DepositSpec, FeeTier,
//!     SwapSpec, Timestamp,
//! };
//! use hydra_pair::ledger::InMemoryLedger;
//! use hydra_pair::pool::Pool;
//!
//! // 1. Two external assets and the accounts involved.
//! let asset_a = AssetId::from_bytes([1u8; 32]);
//! let asset_b = AssetId::from_bytes([2u8; 32]);
//! let pool_account = AccountId::from_bytes([100u8; 32]);
//! let admin = AccountId::from_bytes([101u8; 32]);
//! let alice = AccountId::from_bytes([10u8; 32]);
//!
//! // 2. Build the pool from its validated blueprint.
//! let pair = AssetPair::new(asset_a, asset_b).expect("distinct assets");
//! let config = PoolConfig::new(pair, FeeTier::TIER_0_30_PERCENT, pool_account, admin, None)
//!     .expect("valid config");
//! let ledger = InMemoryLedger::new();
//! let mut pool = Pool::new(&config, ledger.clone()).expect("pool created");
//!
//! // 3. Seed liquidity (the first deposit sets the price).
//! ledger.credit(asset_a, alice, Amount::new(1_000_000));
//! ledger.credit(asset_b, alice, Amount::new(1_000_000));
//! let deposit = DepositSpec::unbounded(Amount::new(1_000_000), Amount::new(1_000_000))
//!     .expect("non-zero");
//! pool.add_liquidity(deposit, alice, Timestamp::new(1), None)
//!     .expect("liquidity minted");
//!
//! // 4. Trade.
//! ledger.credit(asset_a, alice, Amount::new(1_000));
//! let spec = SwapSpec::exact_in(Amount::new(1_000), Amount::new(900)).expect("non-zero");
//! let trade = pool
//!     .swap(spec, asset_a, alice, alice, Timestamp::new(2), None)
//!     .expect("swap succeeded");
//! assert!(trade.amount_out().get() > 900);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Platform    │  authenticates callers, owns the clock
//! └──────┬───────┘
//!        │ swap / add_liquidity / remove_liquidity
//!        ▼
//! ┌──────────────┐     ┌──────────────┐
//! │     Pool      │────▶│  LedgerPort   │  untrusted external custody
//! │ (orchestrator)│     └──────────────┘
//! └──────┬───────┘
//!        │ owns
//!        ▼
//! ┌──────────────┐     ┌──────────────┐
//! │ ReserveState  │     │ ShareLedger   │  reserves, TWAP accumulators /
//! └──────┬───────┘     └──────────────┘  ownership shares
//!        │ pure functions
//!        ▼
//! ┌──────────────┐
//! │    engine     │  quotes, sizing, invariant check, fee accrual
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), … |
//! | [`engine`] | Pure pricing and accounting functions |
//! | [`ledger`] | The [`LedgerPort`](ledger::LedgerPort) seam and an in-memory double |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) validated blueprint |
//! | [`pool`] | [`Pool`](pool::Pool) orchestrator, [`SharedPool`](pool::SharedPool) critical section |
//! | [`math`] | 256-bit intermediates and the integer square root |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;

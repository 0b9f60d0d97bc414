//! The pool orchestrator and its state components.
//!
//! Decomposed per capability rather than inherited:
//!
//! | Component | Purpose |
//! |-----------|---------|
//! | [`ReserveState`] | Reserves, clock, price accumulators, `k` at the last liquidity event |
//! | [`ShareLedger`] | Mint/burn/transfer of ownership shares, locked-minimum sink |
//! | [`Pool`] | Orchestrates the engine, the ledger port, pause flag and admin gate |
//! | [`SharedPool`] | Per-pool exclusive critical section for concurrent callers |

#[allow(clippy::module_inception)]
mod pool;
mod reserve_state;
mod share_ledger;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use pool::Pool;
pub use reserve_state::{ReserveState, RESERVE_CEILING};
pub use share_ledger::ShareLedger;
pub use shared::SharedPool;

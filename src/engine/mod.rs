//! The pricing and accounting core.
//!
//! Everything in this module is a pure function over explicit inputs —
//! no pool state, no ledger access — which is what lets the read-only
//! quoting surface run concurrently with anything (the orchestrator in
//! [`pool`](crate::pool) owns all state).
//!
//! | Submodule | Purpose |
//! |-----------|---------|
//! | [`swap_math`] | Constant-product quotes and the post-trade invariant check |
//! | [`liquidity_math`] | Deposit sizing, share issuance and redemption |
//! | [`protocol_fee`] | Dilution-based protocol fee on invariant growth |

pub mod liquidity_math;
pub mod protocol_fee;
pub mod swap_math;

pub use liquidity_math::{
    initial_shares, proportional_shares, redemption_amounts, size_deposit, MINIMUM_LIQUIDITY,
};
pub use protocol_fee::accrued_fee_shares;
pub use swap_math::{check_fee_adjusted_invariant, quote_in, quote_out, quote_proportional};

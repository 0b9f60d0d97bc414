//! The external asset ledger port.
//!
//! Asset custody is not this crate's business: the two pooled assets
//! live on external ledgers reached only through the [`LedgerPort`]
//! trait. The port is **untrusted** — an implementation may skim its own
//! transfer fee, deliver less than requested, or attempt to re-enter the
//! pool. The engine therefore never assumes a transfer moved exactly the
//! requested amount; realized amounts are always re-derived from balance
//! deltas, and the pool's critical section is held across port calls.
//!
//! # Contract
//!
//! - [`LedgerPort::balance_of`] must report the settled balance; the
//!   engine reads it immediately before and after transfers.
//! - Transfer methods return `Ok(())` when the ledger *accepted* the
//!   transfer. Acceptance does not imply the nominal amount arrived.
//! - A returned error aborts the enclosing pool operation with no pool
//!   state change.

mod memory;

pub use memory::InMemoryLedger;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;

/// Abstract interface to the external ledgers of the two pooled assets.
///
/// Methods take `&self`; implementations that mutate balances use
/// interior mutability, mirroring a remote ledger that is shared by all
/// callers.
pub trait LedgerPort {
    /// Returns the balance of `owner` for `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if the ledger cannot be
    /// queried.
    fn balance_of(&self, asset: AssetId, owner: AccountId) -> Result<Amount, AmmError>;

    /// Pulls `amount` of `asset` from `owner` to `to`, on the strength
    /// of an authorization `owner` granted out of band.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if the ledger refuses.
    fn transfer_from(
        &self,
        asset: AssetId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Pushes `amount` of `asset` from the pool's custody account `from`
    /// to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if the ledger refuses.
    fn transfer(
        &self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError>;
}

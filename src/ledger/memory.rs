//! In-memory ledger double for tests and examples.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::LedgerPort;
use crate::domain::{AccountId, Amount, AssetId, BasisPoints, Rounding};
use crate::error::AmmError;

/// A shared in-memory asset ledger.
///
/// Clones share the same balance table, so a test can hold one handle
/// while the pool owns another. Two knobs model misbehaving external
/// assets:
///
/// - [`set_transfer_skim`](Self::set_transfer_skim) withholds a fraction
///   of every transfer (a fee-on-transfer asset): the sender is debited
///   the full amount but the recipient is credited less.
/// - [`refuse_transfers`](Self::refuse_transfers) makes every transfer
///   return [`AmmError::TransferFailed`].
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{AccountId, Amount, AssetId};
/// use hydra_pair::ledger::{InMemoryLedger, LedgerPort};
///
/// let ledger = InMemoryLedger::new();
/// let asset = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
///
/// ledger.credit(asset, alice, Amount::new(500));
/// assert_eq!(ledger.balance_of(asset, alice), Ok(Amount::new(500)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    inner: Arc<Mutex<LedgerState>>,
}

#[derive(Debug, Default)]
struct LedgerState {
    balances: HashMap<(AssetId, AccountId), u128>,
    transfer_skim: BasisPoints,
    refuse: bool,
}

impl InMemoryLedger {
    /// Creates an empty ledger with well-behaved transfers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `owner` out of thin air.
    ///
    /// Test setup helper; saturates rather than erroring because test
    /// fixtures never approach `u128::MAX`.
    pub fn credit(&self, asset: AssetId, owner: AccountId, amount: Amount) {
        let mut state = self.inner.lock();
        let balance = state.balances.entry((asset, owner)).or_insert(0);
        *balance = balance.saturating_add(amount.get());
    }

    /// Withholds `skim` of every subsequent transfer from the recipient.
    pub fn set_transfer_skim(&self, skim: BasisPoints) {
        self.inner.lock().transfer_skim = skim;
    }

    /// Makes every subsequent transfer fail when `refuse` is `true`.
    pub fn refuse_transfers(&self, refuse: bool) {
        self.inner.lock().refuse = refuse;
    }

    fn move_balance(
        &self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let mut state = self.inner.lock();
        if state.refuse {
            return Err(AmmError::TransferFailed("ledger refused the transfer"));
        }

        let withheld = state
            .transfer_skim
            .apply(amount, Rounding::Down)
            .map_err(|_| AmmError::TransferFailed("skim computation overflow"))?;
        let credited = amount.get().saturating_sub(withheld.get());

        let sender = state.balances.entry((asset, from)).or_insert(0);
        if *sender < amount.get() {
            return Err(AmmError::TransferFailed("insufficient sender balance"));
        }
        *sender -= amount.get();

        let recipient = state.balances.entry((asset, to)).or_insert(0);
        *recipient = recipient.saturating_add(credited);
        Ok(())
    }
}

impl LedgerPort for InMemoryLedger {
    fn balance_of(&self, asset: AssetId, owner: AccountId) -> Result<Amount, AmmError> {
        let state = self.inner.lock();
        Ok(Amount::new(
            state.balances.get(&(asset, owner)).copied().unwrap_or(0),
        ))
    }

    fn transfer_from(
        &self,
        asset: AssetId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.move_balance(asset, owner, to, amount)
    }

    fn transfer(
        &self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.move_balance(asset, from, to, amount)
    }
}

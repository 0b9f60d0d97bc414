//! Fungible ledger for pool ownership shares.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Shares};
use crate::error::AmmError;

/// Mint, burn, and transfer of liquidity shares.
///
/// A plain fungible-balance component, deliberately independent of the
/// pricing engine: the pool orchestrator decides *how many* shares an
/// operation is worth, this ledger only keeps the books.
///
/// [`ShareLedger::LOCKED`] is the sink holding the permanently
/// unredeemable minimum liquidity. No spending operation accepts it as a
/// source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareLedger {
    total: Shares,
    balances: BTreeMap<AccountId, Shares>,
}

impl ShareLedger {
    /// The unreachable sink account for locked minimum liquidity.
    pub const LOCKED: AccountId = AccountId::from_bytes([0u8; 32]);

    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total outstanding shares.
    #[must_use]
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Returns the balance of `owner`.
    #[must_use]
    pub fn balance_of(&self, owner: &AccountId) -> Shares {
        self.balances.get(owner).copied().unwrap_or(Shares::ZERO)
    }

    /// Verifies that minting `shares` would not overflow the total.
    ///
    /// Orchestrators call this in their precondition phase so the later
    /// [`mint`](Self::mint) cannot fail mid-commit.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on total-supply overflow.
    pub fn ensure_can_mint(&self, shares: Shares) -> crate::error::Result<()> {
        self.total
            .checked_add(&shares)
            .map(|_| ())
            .ok_or(AmmError::Overflow("share supply overflow"))
    }

    /// Mints `shares` to `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on total-supply overflow.
    pub fn mint(&mut self, owner: AccountId, shares: Shares) -> crate::error::Result<()> {
        let new_total = self
            .total
            .checked_add(&shares)
            .ok_or(AmmError::Overflow("share supply overflow"))?;
        let balance = self.balances.entry(owner).or_insert(Shares::ZERO);
        // Balance <= total, so the total check covers the balance too.
        *balance = Shares::new(balance.get() + shares.get());
        self.total = new_total;
        Ok(())
    }

    /// Burns `shares` from `owner`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `owner` is the locked sink.
    /// - [`AmmError::InsufficientShares`] if the balance is too low.
    pub fn burn(&mut self, owner: AccountId, shares: Shares) -> crate::error::Result<()> {
        if owner == Self::LOCKED {
            return Err(AmmError::Unauthorized);
        }
        let balance = self.balance_of(&owner);
        let remaining = balance
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        if remaining.is_zero() {
            self.balances.remove(&owner);
        } else {
            self.balances.insert(owner, remaining);
        }
        // balance <= total always, so this cannot underflow.
        self.total = Shares::new(self.total.get() - shares.get());
        Ok(())
    }

    /// Transfers `shares` between holders.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Unauthorized`] if `from` is the locked sink.
    /// - [`AmmError::InsufficientShares`] if `from`'s balance is too low.
    pub fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        shares: Shares,
    ) -> crate::error::Result<()> {
        if from == Self::LOCKED {
            return Err(AmmError::Unauthorized);
        }
        let balance = self.balance_of(&from);
        let remaining = balance
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares)?;
        if from == to || shares.is_zero() {
            return Ok(());
        }
        if remaining.is_zero() {
            self.balances.remove(&from);
        } else {
            self.balances.insert(from, remaining);
        }
        let target = self.balances.entry(to).or_insert(Shares::ZERO);
        *target = Shares::new(target.get() + shares.get());
        Ok(())
    }
}

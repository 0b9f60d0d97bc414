//! Configuration for a constant-product pool.

use crate::domain::{AccountId, AssetPair, FeeTier};
use crate::error::AmmError;

/// The immutable parameters of a pool.
///
/// A pool is created once per [`AssetPair`] by an external registry; this
/// struct is the blueprint the registry hands over. Reserves always start
/// at zero — the first liquidity deposit establishes the price.
///
/// # Validation
///
/// - The swap fee must be strictly below 100%.
/// - The pool's custody account and the admin must be distinct from the
///   locked-share sink account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pair: AssetPair,
    fee: FeeTier,
    pool_account: AccountId,
    admin: AccountId,
    protocol_fee_recipient: Option<AccountId>,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if validation fails.
    pub fn new(
        pair: AssetPair,
        fee: FeeTier,
        pool_account: AccountId,
        admin: AccountId,
        protocol_fee_recipient: Option<AccountId>,
    ) -> Result<Self, AmmError> {
        let config = Self {
            pair,
            fee,
            pool_account,
            admin,
            protocol_fee_recipient,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the fee is 100% or
    /// more, or if a configured account collides with the locked-share
    /// sink.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.fee.basis_points().is_valid_fee() {
            return Err(AmmError::InvalidConfiguration(
                "swap fee must be below 100%",
            ));
        }
        let sink = crate::pool::ShareLedger::LOCKED;
        if self.pool_account == sink || self.admin == sink {
            return Err(AmmError::InvalidConfiguration(
                "account collides with the locked-share sink",
            ));
        }
        if self.protocol_fee_recipient == Some(sink) {
            return Err(AmmError::InvalidConfiguration(
                "protocol fee recipient collides with the locked-share sink",
            ));
        }
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the swap fee tier.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    /// Returns the pool's custody account on the external ledger.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Returns the admin account.
    #[must_use]
    pub const fn admin(&self) -> AccountId {
        self.admin
    }

    /// Returns the protocol fee recipient, if configured.
    #[must_use]
    pub const fn protocol_fee_recipient(&self) -> Option<AccountId> {
        self.protocol_fee_recipient
    }
}

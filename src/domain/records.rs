//! Observability records emitted by pool operations.

use core::fmt;

use super::{AccountId, Amount, AssetId, Shares};
use crate::error::AmmError;

/// The outcome of an executed swap.
///
/// Amounts are the *realized* quantities derived from ledger balance
/// deltas, not the nominal request — with a fee-on-transfer asset the two
/// can differ.
///
/// # Invariants
///
/// Both realized amounts are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TradeRecord {
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
    recipient: AccountId,
}

impl TradeRecord {
    /// Creates a new `TradeRecord` with validated invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroInput`] / [`AmmError::ZeroOutput`] if a
    /// realized amount is zero.
    pub const fn new(
        asset_in: AssetId,
        asset_out: AssetId,
        amount_in: Amount,
        amount_out: Amount,
        recipient: AccountId,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroInput);
        }
        if amount_out.is_zero() {
            return Err(AmmError::ZeroOutput);
        }
        Ok(Self {
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            recipient,
        })
    }

    /// Returns the asset sold to the pool.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        self.asset_in
    }

    /// Returns the asset bought from the pool.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        self.asset_out
    }

    /// Returns the realized input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the realized output amount.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the account the output was delivered to.
    #[must_use]
    pub const fn recipient(&self) -> AccountId {
        self.recipient
    }
}

impl fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trade(in={} of {}, out={} of {}, to={})",
            self.amount_in, self.asset_in, self.amount_out, self.asset_out, self.recipient
        )
    }
}

/// The direction of a liquidity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiquidityDirection {
    /// Assets deposited, shares minted.
    Minted,
    /// Shares burned, assets withdrawn.
    Burned,
}

/// The outcome of a liquidity mint or burn.
///
/// Carries the realized asset amounts and the resulting share delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityRecord {
    direction: LiquidityDirection,
    amount_a: Amount,
    amount_b: Amount,
    share_delta: Shares,
    owner: AccountId,
}

impl LiquidityRecord {
    /// Creates a new `LiquidityRecord`.
    #[must_use]
    pub const fn new(
        direction: LiquidityDirection,
        amount_a: Amount,
        amount_b: Amount,
        share_delta: Shares,
        owner: AccountId,
    ) -> Self {
        Self {
            direction,
            amount_a,
            amount_b,
            share_delta,
            owner,
        }
    }

    /// Returns the change direction.
    #[must_use]
    pub const fn direction(&self) -> LiquidityDirection {
        self.direction
    }

    /// Returns the realized amount of asset A.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the realized amount of asset B.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the shares minted or burned.
    pub const fn share_delta(&self) -> Shares {
        self.share_delta
    }

    /// Returns the share owner involved.
    #[must_use]
    pub const fn owner(&self) -> AccountId {
        self.owner
    }
}

impl fmt::Display for LiquidityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.direction {
            LiquidityDirection::Minted => "minted",
            LiquidityDirection::Burned => "burned",
        };
        write!(
            f,
            "Liquidity({verb} {} shares for {}/{}, owner={})",
            self.share_delta, self.amount_a, self.amount_b, self.owner
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    fn acct(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    // -- TradeRecord --------------------------------------------------------

    #[test]
    fn trade_record_valid() {
        let Ok(record) = TradeRecord::new(
            asset(1),
            asset(2),
            Amount::new(1_000),
            Amount::new(990),
            acct(9),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(record.asset_in(), asset(1));
        assert_eq!(record.asset_out(), asset(2));
        assert_eq!(record.amount_in(), Amount::new(1_000));
        assert_eq!(record.amount_out(), Amount::new(990));
        assert_eq!(record.recipient(), acct(9));
    }

    #[test]
    fn trade_record_rejects_zero_amounts() {
        assert_eq!(
            TradeRecord::new(asset(1), asset(2), Amount::ZERO, Amount::new(1), acct(9)),
            Err(AmmError::ZeroInput)
        );
        assert_eq!(
            TradeRecord::new(asset(1), asset(2), Amount::new(1), Amount::ZERO, acct(9)),
            Err(AmmError::ZeroOutput)
        );
    }

    // -- LiquidityRecord ----------------------------------------------------

    #[test]
    fn liquidity_record_accessors() {
        let record = LiquidityRecord::new(
            LiquidityDirection::Minted,
            Amount::new(100),
            Amount::new(200),
            Shares::new(140),
            acct(3),
        );
        assert_eq!(record.direction(), LiquidityDirection::Minted);
        assert_eq!(record.amount_a(), Amount::new(100));
        assert_eq!(record.amount_b(), Amount::new(200));
        assert_eq!(record.share_delta(), Shares::new(140));
        assert_eq!(record.owner(), acct(3));
    }

    #[test]
    fn display_contains_verb() {
        let record = LiquidityRecord::new(
            LiquidityDirection::Burned,
            Amount::new(1),
            Amount::new(2),
            Shares::new(3),
            acct(3),
        );
        assert!(format!("{record}").contains("burned"));
    }
}

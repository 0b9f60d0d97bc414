//! Liquidity deposit specification.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// Describes a liquidity deposit: the amounts the depositor would like to
/// supply and the minimums they will accept after the pool sizes the
/// deposit to its current reserve ratio.
///
/// # Invariants
///
/// Both desired amounts are non-zero — a deposit always supplies both
/// assets.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, DepositSpec};
///
/// let spec = DepositSpec::new(
///     Amount::new(1_000),
///     Amount::new(4_000),
///     Amount::new(990),
///     Amount::new(3_900),
/// );
/// assert!(spec.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositSpec {
    desired_a: Amount,
    desired_b: Amount,
    min_a: Amount,
    min_b: Amount,
}

impl DepositSpec {
    /// Creates a new `DepositSpec`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroInput`] if either desired amount is zero.
    pub const fn new(
        desired_a: Amount,
        desired_b: Amount,
        min_a: Amount,
        min_b: Amount,
    ) -> crate::error::Result<Self> {
        if desired_a.is_zero() || desired_b.is_zero() {
            return Err(AmmError::ZeroInput);
        }
        Ok(Self {
            desired_a,
            desired_b,
            min_a,
            min_b,
        })
    }

    /// Creates a spec with no lower bounds (no slippage protection).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroInput`] if either desired amount is zero.
    pub const fn unbounded(desired_a: Amount, desired_b: Amount) -> crate::error::Result<Self> {
        Self::new(desired_a, desired_b, Amount::ZERO, Amount::ZERO)
    }

    /// Returns the desired amount of asset A.
    pub const fn desired_a(&self) -> Amount {
        self.desired_a
    }

    /// Returns the desired amount of asset B.
    pub const fn desired_b(&self) -> Amount {
        self.desired_b
    }

    /// Returns the minimum acceptable amount of asset A.
    pub const fn min_a(&self) -> Amount {
        self.min_a
    }

    /// Returns the minimum acceptable amount of asset B.
    pub const fn min_b(&self) -> Amount {
        self.min_b
    }
}

impl fmt::Display for DepositSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(desired={}/{}, min={}/{})",
            self.desired_a, self.desired_b, self.min_a, self.min_b
        )
    }
}

//! Basis-point representation for the swap fee.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// The fee denominator: 10 000 basis points = 100%.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A fraction expressed in basis points (1 bp = 0.01%).
///
/// The swap fee is `numerator / 10_000` with this type as the numerator.
/// Any `u32` value can be constructed, but a fee must satisfy
/// [`is_valid_fee`](Self::is_valid_fee) (strictly below 100%; a 100% fee
/// would make every swap impossible) — configuration validation enforces
/// this.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30); // 0.30%
/// assert!(fee.is_valid_fee());
/// assert_eq!(fee.complement(), 9_970);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is usable as a swap fee
    /// (`0..BPS_DENOMINATOR`).
    #[must_use]
    pub const fn is_valid_fee(&self) -> bool {
        self.0 < BPS_DENOMINATOR
    }

    /// Returns `BPS_DENOMINATOR - self`, the fee-retention numerator.
    ///
    /// Saturates at zero for nonsensical values above 100%; such values
    /// are rejected at configuration time.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        BPS_DENOMINATOR.saturating_sub(self.0)
    }

    /// Computes `amount * (self / 10_000)` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication
    /// overflows `u128`.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(AmmError::Overflow("basis points apply overflow")),
        };
        let divisor = BPS_DENOMINATOR as u128;
        let q = product / divisor;
        match rounding {
            Rounding::Down => Ok(Amount::new(q)),
            Rounding::Up => {
                if product % divisor != 0 {
                    Ok(Amount::new(q + 1))
                } else {
                    Ok(Amount::new(q))
                }
            }
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

//! Swap operation specification.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// Specifies what constraint drives a swap — an exact input amount or an
/// exact output amount — together with the caller's slippage bound.
///
/// The bound travels with the specification so that a swap request is a
/// single self-contained value: an exact-in swap carries the minimum
/// output the caller will accept, an exact-out swap carries the maximum
/// input the caller will pay.
///
/// # Invariants
///
/// The driving amount is always non-zero. The bound may be zero
/// (exact-in) or [`Amount::MAX`] (exact-out) to opt out of slippage
/// protection.
///
/// # Examples
///
/// ```
/// use hydra_pair::domain::{Amount, SwapSpec};
///
/// let spec = SwapSpec::exact_in(Amount::new(1_000), Amount::new(900));
/// assert!(spec.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapSpec {
    /// The caller provides an exact input amount.
    ExactIn {
        /// The fixed input amount (always non-zero).
        amount_in: Amount,
        /// The minimum acceptable output.
        min_amount_out: Amount,
    },
    /// The caller requests an exact output amount.
    ExactOut {
        /// The desired output amount (always non-zero).
        amount_out: Amount,
        /// The maximum acceptable input.
        max_amount_in: Amount,
    },
}

impl SwapSpec {
    /// Creates an exact-input swap specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroInput`] if `amount_in` is zero.
    pub const fn exact_in(amount_in: Amount, min_amount_out: Amount) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::ZeroInput);
        }
        Ok(Self::ExactIn {
            amount_in,
            min_amount_out,
        })
    }

    /// Creates an exact-output swap specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroOutput`] if `amount_out` is zero.
    pub const fn exact_out(amount_out: Amount, max_amount_in: Amount) -> crate::error::Result<Self> {
        if amount_out.is_zero() {
            return Err(AmmError::ZeroOutput);
        }
        Ok(Self::ExactOut {
            amount_out,
            max_amount_in,
        })
    }

    /// Returns `true` if this is an exact-input specification.
    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn { .. })
    }

    /// Returns the driving amount regardless of variant.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        match self {
            Self::ExactIn { amount_in, .. } => *amount_in,
            Self::ExactOut { amount_out, .. } => *amount_out,
        }
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn {
                amount_in,
                min_amount_out,
            } => write!(f, "ExactIn({amount_in}, min_out={min_amount_out})"),
            Self::ExactOut {
                amount_out,
                max_amount_in,
            } => write!(f, "ExactOut({amount_out}, max_in={max_amount_in})"),
        }
    }
}

//! 256-bit intermediates for overflow-safe products.
//!
//! Reserves are bounded by 112 bits, so the product of two reserves fits
//! in 224 bits and the fee-scaled forms used by the invariant check stay
//! comfortably inside 256 bits. Every multi-word computation in the
//! engine goes through this module and downcasts back to `u128` with an
//! explicit check.

use uint::construct_uint;

use crate::domain::{Amount, Rounding};
use crate::error::AmmError;

construct_uint! {
    /// 256-bit unsigned integer for intermediate calculations.
    pub struct U256(4);
}

/// Widening multiplication of two `u128` values. Cannot overflow.
#[must_use]
pub fn mul_wide(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Checked downcast from `U256` to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the value does not
/// fit.
pub fn to_u128(value: U256, context: &'static str) -> crate::error::Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.as_u128())
}

/// Division with explicit rounding direction.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `divisor` is zero.
pub fn div_round(
    numerator: U256,
    divisor: U256,
    rounding: Rounding,
) -> crate::error::Result<U256> {
    if divisor.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let q = numerator / divisor;
    match rounding {
        Rounding::Down => Ok(q),
        Rounding::Up => {
            if (numerator % divisor).is_zero() {
                Ok(q)
            } else {
                Ok(q + U256::one())
            }
        }
    }
}

/// Computes `a * b / divisor` entirely in 256 bits, downcasting the
/// quotient to an [`Amount`].
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `divisor` is zero.
/// - [`AmmError::Overflow`] with `context` if the quotient exceeds
///   `u128`.
pub fn mul_div(
    a: Amount,
    b: Amount,
    divisor: Amount,
    rounding: Rounding,
    context: &'static str,
) -> crate::error::Result<Amount> {
    let q = div_round(
        mul_wide(a.get(), b.get()),
        U256::from(divisor.get()),
        rounding,
    )?;
    Ok(Amount::new(to_u128(q, context)?))
}

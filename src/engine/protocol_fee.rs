//! Protocol fee accrual from invariant growth.
//!
//! Runs only at liquidity mint/burn boundaries, never per swap. Between
//! two liquidity events, trading fees grow the invariant `k = a·b`; the
//! protocol's cut is expressed as freshly minted shares that dilute
//! existing holders instead of moving any underlying assets:
//!
//! ```text
//! fee_shares = T·(√k_now − √k_last) / (5·√k_now + √k_last)
//! ```
//!
//! which grants roughly one sixth of the √k growth. With no growth the
//! formula yields zero, so accrual is idempotent.

use crate::domain::Shares;
use crate::error::AmmError;
use crate::math::{div_round, isqrt, to_u128, U256};

/// Computes the shares owed to the protocol for the invariant growth
/// between `k_last` and `k_now`.
///
/// Returns [`Shares::ZERO`] when `k_last` is zero (no prior liquidity
/// event) or when the invariant did not grow.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the computed share quantity does
/// not fit in `u128` (unreachable while reserves respect the 112-bit
/// ceiling).
pub fn accrued_fee_shares(
    k_last: U256,
    k_now: U256,
    total: Shares,
) -> crate::error::Result<Shares> {
    if k_last.is_zero() || total.is_zero() {
        return Ok(Shares::ZERO);
    }
    let root_last = isqrt(k_last);
    let root_now = isqrt(k_now);
    if root_now <= root_last {
        return Ok(Shares::ZERO);
    }

    let numerator = U256::from(total.get())
        .checked_mul(root_now - root_last)
        .ok_or(AmmError::Overflow("fee share numerator"))?;
    let denominator = root_now
        .checked_mul(U256::from(5u8))
        .and_then(|v| v.checked_add(root_last))
        .ok_or(AmmError::Overflow("fee share denominator"))?;

    let shares = div_round(numerator, denominator, crate::domain::Rounding::Down)?;
    Ok(Shares::new(to_u128(shares, "fee shares")?))
}

//! Pure constant-product pricing functions.
//!
//! The swap invariant is `x · y = k` where `x` and `y` are the two
//! reserves. The fee is charged on the input side: only
//! `amount_in × (10_000 − fee_bps) / 10_000` participates in pricing,
//! while the full input lands in the reserve, which is why `k` grows
//! with every trade.
//!
//! # Rounding policy
//!
//! Quoted outputs round down and required inputs round up (then add one
//! unit), so rounding always favours the pool:
//! `quote_in(quote_out(x)) >= x` for every valid `x`.
//!
//! All intermediates are computed in 256 bits; nothing here wraps.

use crate::domain::{Amount, BasisPoints, Rounding, BPS_DENOMINATOR};
use crate::error::AmmError;
use crate::math::{div_round, mul_wide, to_u128, U256};

/// Computes the output amount for an exact input.
///
/// ```text
/// out = ⌊ in·(D−n)·reserve_out / (reserve_in·D + in·(D−n)) ⌋
/// ```
///
/// where `D = 10_000` and `n` is the fee numerator.
///
/// # Errors
///
/// - [`AmmError::ZeroInput`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128` (cannot
///   happen while reserves respect the 112-bit ceiling).
pub fn quote_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: BasisPoints,
) -> crate::error::Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::ZeroInput);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let net_in = mul_wide(amount_in.get(), u128::from(fee.complement()));
    let numerator = net_in
        .checked_mul(U256::from(reserve_out.get()))
        .ok_or(AmmError::Overflow("quote_out numerator"))?;
    let denominator = mul_wide(reserve_in.get(), u128::from(BPS_DENOMINATOR))
        .checked_add(net_in)
        .ok_or(AmmError::Overflow("quote_out denominator"))?;

    let out = div_round(numerator, denominator, Rounding::Down)?;
    Ok(Amount::new(to_u128(out, "quote_out result")?))
}

/// Computes the input amount required for an exact output.
///
/// The exact inverse of [`quote_out`], rounded up by one unit so that
/// round-tripping never under-collects:
///
/// ```text
/// in = ⌊ reserve_in·out·D / ((reserve_out−out)·(D−n)) ⌋ + 1
/// ```
///
/// # Errors
///
/// - [`AmmError::ZeroOutput`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero, or
///   `amount_out >= reserve_out` (a reserve can never be drained to
///   zero).
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
pub fn quote_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: BasisPoints,
) -> crate::error::Result<Amount> {
    if amount_out.is_zero() {
        return Err(AmmError::ZeroOutput);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let numerator = mul_wide(reserve_in.get(), amount_out.get())
        .checked_mul(U256::from(BPS_DENOMINATOR))
        .ok_or(AmmError::Overflow("quote_in numerator"))?;
    // reserve_out > amount_out was checked above.
    let denominator = mul_wide(
        reserve_out.get() - amount_out.get(),
        u128::from(fee.complement()),
    );

    let quotient = div_round(numerator, denominator, Rounding::Down)? + U256::one();
    Ok(Amount::new(to_u128(quotient, "quote_in result")?))
}

/// Computes the linear proportion `amount_a · reserve_b / reserve_a`,
/// rounded down. Used by liquidity deposit sizing.
///
/// # Errors
///
/// - [`AmmError::ZeroInput`] if `amount_a` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
pub fn quote_proportional(
    amount_a: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
) -> crate::error::Result<Amount> {
    if amount_a.is_zero() {
        return Err(AmmError::ZeroInput);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    crate::math::mul_div(
        amount_a,
        reserve_b,
        reserve_a,
        Rounding::Down,
        "quote_proportional result",
    )
}

/// Verifies the fee-adjusted post-trade invariant:
///
/// ```text
/// (bal_in·D − in·n) · (bal_out·D) >= reserve_in·reserve_out·D²
/// ```
///
/// Balances are the pool's post-transfer holdings re-read from the
/// ledger, and `realized_in` is the balance delta actually received —
/// never the nominal request. The check therefore holds against assets
/// that take their own cut in transit.
///
/// # Errors
///
/// - [`AmmError::InvariantViolation`] if the product decreased net of
///   fees.
/// - [`AmmError::Overflow`] if an intermediate exceeds 256 bits (only
///   reachable with balances far beyond the reserve ceiling).
pub fn check_fee_adjusted_invariant(
    balance_in: Amount,
    balance_out: Amount,
    realized_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: BasisPoints,
) -> crate::error::Result<()> {
    let d = U256::from(BPS_DENOMINATOR);

    let adjusted_in = mul_wide(balance_in.get(), u128::from(BPS_DENOMINATOR))
        .checked_sub(mul_wide(realized_in.get(), u128::from(fee.get())))
        .ok_or(AmmError::InvariantViolation)?;
    let scaled_out = mul_wide(balance_out.get(), u128::from(BPS_DENOMINATOR));

    let lhs = adjusted_in
        .checked_mul(scaled_out)
        .ok_or(AmmError::Overflow("invariant lhs"))?;
    let rhs = mul_wide(reserve_in.get(), reserve_out.get())
        .checked_mul(d)
        .ok_or(AmmError::Overflow("invariant rhs"))?
        .checked_mul(d)
        .ok_or(AmmError::Overflow("invariant rhs"))?;

    if lhs < rhs {
        return Err(AmmError::InvariantViolation);
    }
    Ok(())
}

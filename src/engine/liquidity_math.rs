//! Share issuance and redemption math.
//!
//! The first deposit on an empty pool mints `√(a·b)` shares and locks
//! [`MINIMUM_LIQUIDITY`] of them in an unreachable sink, so a later
//! depositor cannot be priced out by someone donating dust before the
//! first real deposit. Subsequent deposits mint proportionally to the
//! smaller of the two contribution ratios; redemptions return the
//! proportional slice of each reserve, floored.

use super::swap_math::quote_proportional;
use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;
use crate::math::{isqrt_product, mul_div};

/// Shares permanently locked at the pool's first liquidity event.
pub const MINIMUM_LIQUIDITY: Shares = Shares::new(1_000);

/// Sizes a deposit against the current reserve ratio.
///
/// On an empty pool the desired amounts are accepted as-is — that call
/// establishes the initial price. Otherwise the engine pins one side to
/// its desired amount and solves the other from the reserve ratio,
/// preferring the full `desired_a` when the implied B fits within
/// `desired_b`, and solving for A from `desired_b` otherwise.
///
/// # Errors
///
/// - [`AmmError::SlippageExceeded`] if the sized amounts fall below the
///   caller's minimums.
/// - [`AmmError::ZeroInput`] if a desired amount needed for sizing is
///   zero.
pub fn size_deposit(
    desired_a: Amount,
    desired_b: Amount,
    min_a: Amount,
    min_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
) -> crate::error::Result<(Amount, Amount)> {
    if reserve_a.is_zero() && reserve_b.is_zero() {
        return Ok((desired_a, desired_b));
    }

    let optimal_b = quote_proportional(desired_a, reserve_a, reserve_b)?;
    if optimal_b <= desired_b {
        if optimal_b < min_b {
            return Err(AmmError::SlippageExceeded);
        }
        return Ok((desired_a, optimal_b));
    }

    let optimal_a = quote_proportional(desired_b, reserve_b, reserve_a)?;
    // optimal_b > desired_b implies optimal_a <= desired_a; only the
    // caller's lower bound can still reject.
    if optimal_a < min_a {
        return Err(AmmError::SlippageExceeded);
    }
    Ok((optimal_a, desired_b))
}

/// Shares minted by the first deposit on an empty pool:
/// `⌊√(amount_a·amount_b)⌋ − MINIMUM_LIQUIDITY`.
///
/// The caller mints the returned quantity to the depositor and
/// [`MINIMUM_LIQUIDITY`] to the locked sink.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientLiquidityMinted`] if the geometric
/// mean does not exceed the locked minimum.
pub fn initial_shares(amount_a: Amount, amount_b: Amount) -> crate::error::Result<Shares> {
    let root = isqrt_product(amount_a.get(), amount_b.get());
    if root <= MINIMUM_LIQUIDITY.get() {
        return Err(AmmError::InsufficientLiquidityMinted);
    }
    Ok(Shares::new(root - MINIMUM_LIQUIDITY.get()))
}

/// Shares minted by a deposit on a non-empty pool:
/// `min(⌊a·T/reserve_a⌋, ⌊b·T/reserve_b⌋)`.
///
/// Taking the minimum means an unbalanced deposit donates its excess to
/// existing holders instead of minting against it.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidityMinted`] if the computed quantity
///   is zero.
/// - [`AmmError::Overflow`] / [`AmmError::DivisionByZero`] from the
///   underlying wide math.
pub fn proportional_shares(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total: Shares,
) -> crate::error::Result<Shares> {
    let total_amount = Amount::new(total.get());
    let by_a = mul_div(
        amount_a,
        total_amount,
        reserve_a,
        Rounding::Down,
        "proportional shares by a",
    )?;
    let by_b = mul_div(
        amount_b,
        total_amount,
        reserve_b,
        Rounding::Down,
        "proportional shares by b",
    )?;
    let minted = by_a.min(by_b);
    if minted.is_zero() {
        return Err(AmmError::InsufficientLiquidityMinted);
    }
    Ok(Shares::new(minted.get()))
}

/// Asset amounts returned for burning `shares`:
/// `(⌊s·reserve_a/T⌋, ⌊s·reserve_b/T⌋)`.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidityBurned`] if either amount floors
///   to zero.
/// - [`AmmError::DivisionByZero`] if `total` is zero.
pub fn redemption_amounts(
    shares: Shares,
    reserve_a: Amount,
    reserve_b: Amount,
    total: Shares,
) -> crate::error::Result<(Amount, Amount)> {
    let shares_amount = Amount::new(shares.get());
    let total_amount = Amount::new(total.get());
    let amount_a = mul_div(
        shares_amount,
        reserve_a,
        total_amount,
        Rounding::Down,
        "redemption amount a",
    )?;
    let amount_b = mul_div(
        shares_amount,
        reserve_b,
        total_amount,
        Rounding::Down,
        "redemption amount b",
    )?;
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::InsufficientLiquidityBurned);
    }
    Ok((amount_a, amount_b))
}

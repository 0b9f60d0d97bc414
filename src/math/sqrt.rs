//! Integer square root.

use super::wide::U256;

/// Floor of the square root of a `U256`, via Newton's method.
///
/// Converges in at most a few hundred iterations for 256-bit inputs;
/// in practice far fewer because the initial guess halves the bit width.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    // Initial guess: 2^(ceil(bits/2)), guaranteed >= sqrt(n).
    let mut x = U256::one() << n.bits().div_ceil(2);
    let mut y = (x + n / x) >> 1;
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x
}

/// Floor of the square root of the product `a * b`.
///
/// The product is widened to 256 bits first, so the result always fits
/// in `u128` and no overflow is possible.
#[must_use]
pub fn isqrt_product(a: u128, b: u128) -> u128 {
    isqrt(super::wide::mul_wide(a, b)).as_u128()
}

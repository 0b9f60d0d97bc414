//! The pool's persistent numeric state.

use crate::domain::{Amount, Timestamp};
use crate::error::AmmError;
use crate::math::{mul_wide, U256};

/// Upper bound on either reserve: `2^112 - 1`.
///
/// Reserves are stored as `u128` but committed against this explicit
/// ceiling, so the 256-bit intermediates used elsewhere always have
/// headroom. Breaching the ceiling is [`AmmError::Overflow`], never a
/// wrap.
pub const RESERVE_CEILING: u128 = (1u128 << 112) - 1;

/// Reserves, clock, cumulative price accumulators, and the invariant
/// recorded at the last liquidity event.
///
/// The accumulators integrate the instantaneous price (a UQ112.112
/// fixed-point ratio of the reserves) over elapsed seconds. They are
/// written at the start of every state change — using the *pre-change*
/// reserves — and wrap on overflow; external TWAP consumers difference
/// two observations, so wrapping is harmless. The engine itself never
/// reads them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReserveState {
    reserve_a: Amount,
    reserve_b: Amount,
    last_update: Timestamp,
    cumulative_price_a: U256,
    cumulative_price_b: U256,
    k_last: U256,
}

impl ReserveState {
    /// Creates an all-zero state; the pool awaits its first deposit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the timestamp of the last reserve mutation.
    #[must_use]
    pub const fn last_update(&self) -> Timestamp {
        self.last_update
    }

    /// Returns the cumulative price accumulator for asset A
    /// (price of A quoted in B, integrated over time).
    #[must_use]
    pub const fn cumulative_price_a(&self) -> U256 {
        self.cumulative_price_a
    }

    /// Returns the cumulative price accumulator for asset B.
    #[must_use]
    pub const fn cumulative_price_b(&self) -> U256 {
        self.cumulative_price_b
    }

    /// Returns the invariant recorded at the last liquidity event.
    #[must_use]
    pub const fn k_last(&self) -> U256 {
        self.k_last
    }

    /// Returns the current invariant `reserve_a · reserve_b`.
    #[must_use]
    pub fn k(&self) -> U256 {
        mul_wide(self.reserve_a.get(), self.reserve_b.get())
    }

    /// Checks the candidate reserves against [`RESERVE_CEILING`].
    ///
    /// Run this before any state mutation so a ceiling breach aborts the
    /// operation with nothing applied.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if either value exceeds the
    /// ceiling.
    pub const fn ensure_within_ceiling(
        reserve_a: Amount,
        reserve_b: Amount,
    ) -> crate::error::Result<()> {
        if reserve_a.get() > RESERVE_CEILING || reserve_b.get() > RESERVE_CEILING {
            return Err(AmmError::Overflow("reserve exceeds the 112-bit ceiling"));
        }
        Ok(())
    }

    /// Commits new reserves at `now`, first folding
    /// `price × elapsed` into the accumulators using the pre-change
    /// reserves.
    ///
    /// Infallible by design: callers run
    /// [`ensure_within_ceiling`](Self::ensure_within_ceiling) and every
    /// other precondition beforehand, so nothing can fail once state
    /// starts changing.
    pub fn commit(&mut self, reserve_a: Amount, reserve_b: Amount, now: Timestamp) {
        debug_assert!(Self::ensure_within_ceiling(reserve_a, reserve_b).is_ok());

        let elapsed = now.elapsed_since(self.last_update);
        if elapsed > 0 && !self.reserve_a.is_zero() && !self.reserve_b.is_zero() {
            let dt = U256::from(elapsed);
            let price_a = uq112_ratio(self.reserve_b.get(), self.reserve_a.get());
            let price_b = uq112_ratio(self.reserve_a.get(), self.reserve_b.get());
            // Accumulators wrap; TWAP consumers difference observations.
            let term_a = price_a.overflowing_mul(dt).0;
            let term_b = price_b.overflowing_mul(dt).0;
            self.cumulative_price_a = self.cumulative_price_a.overflowing_add(term_a).0;
            self.cumulative_price_b = self.cumulative_price_b.overflowing_add(term_b).0;
        }

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.last_update = now;
    }

    /// Records the current invariant as the value at the latest
    /// liquidity event. Called after mint/burn commits.
    pub fn record_liquidity_event(&mut self) {
        self.k_last = self.k();
    }
}

/// UQ112.112 fixed-point ratio `numerator / denominator`.
///
/// Callers guarantee `denominator != 0`; with both values at or below
/// [`RESERVE_CEILING`] the shifted numerator fits in 224 bits.
fn uq112_ratio(numerator: u128, denominator: u128) -> U256 {
    (U256::from(numerator) << 112) / U256::from(denominator)
}

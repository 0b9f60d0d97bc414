//! Arithmetic utilities for the pair engine.
//!
//! This module provides the [`U256`] 256-bit integer used for every
//! intermediate product, explicit-rounding wide division, and the
//! integer square root used by share issuance and protocol fee accrual.
//!
//! The policy here mirrors the rest of the crate: no panics, no
//! saturation, no silent wraps — every narrowing is checked and every
//! division carries a [`Rounding`](crate::domain::Rounding).

mod sqrt;
mod wide;

pub use sqrt::{isqrt, isqrt_product};
pub use wide::{div_round, mul_div, mul_wide, to_u128, U256};

//! Unified error types for the pair engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for
//! consumers.
//!
//! # Severity
//!
//! Most variants describe ordinary caller mistakes (a zero amount, a
//! slippage bound that cannot be met). Two are security-relevant and are
//! additionally logged at `warn`/`error` level by the pool orchestrator:
//!
//! - [`AmmError::InvariantViolation`] — the post-trade product check
//!   failed; may indicate a misbehaving external asset or an attack.
//! - [`AmmError::Overflow`] — a reserve or intermediate product would
//!   exceed the representable bound.
//!
//! Neither is ever retried automatically.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Unified error enum for the pair engine.
///
/// Variants carrying a `&'static str` include a short context message
/// identifying the failing computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A swap was requested with a zero input amount.
    #[error("swap input amount is zero")]
    ZeroInput,

    /// A swap was requested with a zero output amount.
    #[error("swap output amount is zero")]
    ZeroOutput,

    /// A reserve is zero, or the requested output would drain a reserve.
    #[error("insufficient liquidity in the pool")]
    InsufficientLiquidity,

    /// The realized output fell below the caller's minimum.
    #[error("output amount below the caller's minimum")]
    InsufficientOutputAmount,

    /// The realized input exceeded the caller's maximum.
    #[error("input amount above the caller's maximum")]
    ExcessiveInputAmount,

    /// Deposit sizing could not satisfy the caller's minimum amounts.
    #[error("liquidity sizing violated the caller's minimum amounts")]
    SlippageExceeded,

    /// The deposit was too small to mint any shares.
    #[error("deposit too small to mint liquidity shares")]
    InsufficientLiquidityMinted,

    /// The redemption was too small to return any assets.
    #[error("redemption too small to return assets")]
    InsufficientLiquidityBurned,

    /// An owner tried to burn or transfer more shares than they hold.
    #[error("share balance too low for the requested operation")]
    InsufficientShares,

    /// The post-trade fee-adjusted product check failed. Security-relevant.
    #[error("post-trade invariant check failed")]
    InvariantViolation,

    /// A reserve or intermediate product would exceed the representable
    /// bound. Security-relevant.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero in a checked arithmetic operation.
    #[error("division by zero")]
    DivisionByZero,

    /// The caller-supplied validity window elapsed before execution.
    #[error("operation deadline expired")]
    DeadlineExpired,

    /// An asset identifier is not one of the pool's two assets.
    #[error("asset is not part of this pool")]
    InvalidAsset,

    /// The external ledger refused a transfer.
    #[error("ledger transfer failed: {0}")]
    TransferFailed(&'static str),

    /// The caller does not hold the admin capability.
    #[error("caller is not the pool admin")]
    Unauthorized,

    /// The pool is paused; mutating operations are rejected.
    #[error("pool is paused")]
    Paused,

    /// A configuration parameter is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl AmmError {
    /// Returns `true` for the variants that warrant security-relevant
    /// logging, as opposed to ordinary user-input errors.
    #[must_use]
    pub const fn is_security_relevant(&self) -> bool {
        matches!(self, Self::InvariantViolation | Self::Overflow(_))
    }
}

//! Unified error types for the rebase AMM pricing engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Each
//! variant maps to a stable string code (see [`AmmError::code`]) that a
//! caller can match on or forward across a process boundary unchanged.
//!
//! # Validation Order
//!
//! Engine operations validate their arguments in a fixed order so that the
//! reported error does not depend on which argument position holds the bad
//! value:
//!
//! 1. [`AmmError::NotANumber`] for any argument that cannot be read as a number.
//! 2. [`AmmError::NegativeInput`] for any negative argument.
//! 3. [`AmmError::InsufficientQty`] for a zero transacted quantity.
//! 4. [`AmmError::InsufficientLiquidity`] for a zero reserve or supply.

use thiserror::Error;

/// Code reported when an input is absent or not numeric.
pub const NAN_ERROR: &str = "NAN_ERROR";
/// Code reported when an input is negative.
pub const NEGATIVE_INPUT: &str = "NEGATIVE_INPUT";
/// Code reported when a transacted quantity is zero.
pub const INSUFFICIENT_QTY: &str = "INSUFFICIENT_QTY";
/// Code reported when a reserve or supply is zero.
pub const INSUFFICIENT_LIQUIDITY: &str = "INSUFFICIENT_LIQUIDITY";
/// Code reported when an intermediate result leaves the decimal range.
pub const OVERFLOW: &str = "OVERFLOW";
/// Code reported on an exact division by zero.
pub const DIVISION_BY_ZERO: &str = "DIVISION_BY_ZERO";
/// Code reported by configuration validation.
pub const INVALID_CONFIG: &str = "INVALID_CONFIG";

/// Errors raised by the pricing engine.
///
/// The `&'static str` payload names the offending argument or the
/// arithmetic step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// An argument was absent, `NaN`, infinite or unparsable.
    #[error("NAN_ERROR: {0} is not a number")]
    NotANumber(&'static str),

    /// An argument was numeric but negative.
    #[error("NEGATIVE_INPUT: {0} must not be negative")]
    NegativeInput(&'static str),

    /// A transacted quantity was zero where a positive amount is required.
    #[error("INSUFFICIENT_QTY: {0} must be positive")]
    InsufficientQty(&'static str),

    /// A reserve or supply was zero, leaving a ratio undefined.
    #[error("INSUFFICIENT_LIQUIDITY: {0}")]
    InsufficientLiquidity(&'static str),

    /// An intermediate value exceeded the decimal representation.
    #[error("OVERFLOW: {0}")]
    Overflow(&'static str),

    /// Exact division by zero.
    #[error("DIVISION_BY_ZERO: division by zero")]
    DivisionByZero,

    /// A configuration parameter is out of range.
    #[error("INVALID_CONFIG: {0}")]
    InvalidConfig(&'static str),
}

impl AmmError {
    /// Returns the stable error code for this variant.
    ///
    /// ```
    /// use rebase_amm::error::{AmmError, NEGATIVE_INPUT};
    ///
    /// assert_eq!(AmmError::NegativeInput("fee").code(), NEGATIVE_INPUT);
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotANumber(_) => NAN_ERROR,
            Self::NegativeInput(_) => NEGATIVE_INPUT,
            Self::InsufficientQty(_) => INSUFFICIENT_QTY,
            Self::InsufficientLiquidity(_) => INSUFFICIENT_LIQUIDITY,
            Self::Overflow(_) => OVERFLOW,
            Self::DivisionByZero => DIVISION_BY_ZERO,
            Self::InvalidConfig(_) => INVALID_CONFIG,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

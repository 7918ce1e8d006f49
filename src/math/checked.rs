//! Checked arithmetic over [`Decimal`].
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, AmmError>`](crate::error::AmmError) instead
//! of panicking on overflow or division by zero.  Every formula in the
//! engine is written in terms of these methods so that a failure surfaces
//! as an error rather than an abort.
//!
//! # Examples
//!
//! ```
//! use rebase_amm::math::CheckedArithmetic;
//! use rust_decimal_macros::dec;
//!
//! let a = dec!(100);
//! let b = dec!(200);
//! assert_eq!(a.safe_add(&b), Ok(dec!(300)));
//! assert!(a.safe_div(&dec!(0)).is_err());
//! ```

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::AmmError;

/// Fallible arithmetic for decimal quantities.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
/// - Implementations delegate to the inner type's checked operations.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked division.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `other` is zero.
    /// - [`AmmError::Overflow`] if the quotient is not representable.
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked square root.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NegativeInput`] for a negative radicand.
    fn safe_sqrt(&self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(*other)
            .ok_or(AmmError::Overflow("decimal addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(*other)
            .ok_or(AmmError::Overflow("decimal subtraction overflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_mul(*other)
            .ok_or(AmmError::Overflow("decimal multiplication overflow"))
    }

    fn safe_div(&self, other: &Self) -> Result<Self, AmmError> {
        if other.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        self.checked_div(*other)
            .ok_or(AmmError::Overflow("decimal division overflow"))
    }

    fn safe_sqrt(&self) -> Result<Self, AmmError> {
        self.sqrt().ok_or(AmmError::NegativeInput("square root radicand"))
    }
}

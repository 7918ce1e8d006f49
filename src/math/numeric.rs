//! Coercion of caller-supplied values into [`Decimal`].
//!
//! The [`Numeric`] trait is the single entry point through which engine
//! operations read their arguments.  It lets callers hand over whatever
//! numeric representation they already hold (a `Decimal`, an integer, a
//! float from a JSON payload, a string from an RPC response, or an
//! `Option` that may be absent) while the engine itself only ever computes
//! on `Decimal`.
//!
//! | Source | Failure |
//! |--------|---------|
//! | `Decimal`, `&Decimal`, `i8`..`i64`, `u8`..`u64` | never |
//! | `i128`, `u128` | [`AmmError::Overflow`] beyond 96 bits |
//! | `f64`, `f32` | [`AmmError::NotANumber`] for `NaN` / infinities |
//! | `&str`, `String` | [`AmmError::NotANumber`] if unparsable |
//! | `Option<T>` | [`AmmError::NotANumber`] for `None` |
//!
//! Floats are accepted only as an input format.  No arithmetic in this
//! crate runs in floating point.

use core::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::AmmError;

/// A value that can be read as a [`Decimal`].
///
/// `arg` names the argument for error reporting.
///
/// # Examples
///
/// ```
/// use rebase_amm::math::Numeric;
/// use rust_decimal_macros::dec;
///
/// assert_eq!("12.5".to_decimal("qty"), Ok(dec!(12.5)));
/// assert!(None::<u64>.to_decimal("qty").is_err());
/// assert!(f64::NAN.to_decimal("qty").is_err());
/// ```
pub trait Numeric {
    /// Converts `self` into a [`Decimal`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotANumber`] if the value is absent or not numeric.
    /// - [`AmmError::Overflow`] if the value is numeric but outside the
    ///   `Decimal` range.
    fn to_decimal(&self, arg: &'static str) -> Result<Decimal, AmmError>;
}

impl Numeric for Decimal {
    #[inline]
    fn to_decimal(&self, _arg: &'static str) -> Result<Decimal, AmmError> {
        Ok(*self)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    #[inline]
    fn to_decimal(&self, arg: &'static str) -> Result<Decimal, AmmError> {
        (**self).to_decimal(arg)
    }
}

impl<T: Numeric> Numeric for Option<T> {
    fn to_decimal(&self, arg: &'static str) -> Result<Decimal, AmmError> {
        match self {
            Some(value) => value.to_decimal(arg),
            None => Err(AmmError::NotANumber(arg)),
        }
    }
}

macro_rules! impl_numeric_lossless {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_decimal(&self, _arg: &'static str) -> Result<Decimal, AmmError> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_numeric_lossless!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Numeric for i128 {
    fn to_decimal(&self, arg: &'static str) -> Result<Decimal, AmmError> {
        Decimal::from_i128(*self).ok_or(AmmError::Overflow(arg))
    }
}

impl Numeric for u128 {
    fn to_decimal(&self, arg: &'static str) -> Result<Decimal, AmmError> {
        Decimal::from_u128(*self).ok_or(AmmError::Overflow(arg))
    }
}

impl Numeric for f64 {
    fn to_decimal(&self, arg: &'static str) -> Result<Decimal, AmmError> {
        if !self.is_finite() {
            return Err(AmmError::NotANumber(arg));
        }
        Decimal::from_f64(*self).ok_or(AmmError::Overflow(arg))
    }
}

impl Numeric for f32 {
    fn to_decimal(&self, arg: &'static str) -> Result<Decimal, AmmError> {
        if !self.is_finite() {
            return Err(AmmError::NotANumber(arg));
        }
        Decimal::from_f32(*self).ok_or(AmmError::Overflow(arg))
    }
}

impl Numeric for str {
    fn to_decimal(&self, arg: &'static str) -> Result<Decimal, AmmError> {
        let s = self.trim();
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| AmmError::NotANumber(arg))
    }
}

impl Numeric for String {
    #[inline]
    fn to_decimal(&self, arg: &'static str) -> Result<Decimal, AmmError> {
        self.as_str().to_decimal(arg)
    }
}

/// Fails with [`AmmError::NegativeInput`] on the first negative value.
///
/// Arguments are checked in slice order.
///
/// # Errors
///
/// Returns [`AmmError::NegativeInput`] naming the offending argument.
pub fn ensure_non_negative(values: &[(Decimal, &'static str)]) -> Result<(), AmmError> {
    match values.iter().find(|(value, _)| value.is_sign_negative() && !value.is_zero()) {
        Some(&(_, arg)) => Err(AmmError::NegativeInput(arg)),
        None => Ok(()),
    }
}

//! Basis-point representation for fee rates.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AmmError;
use crate::math::{CheckedArithmetic, Numeric};

/// Basis-point denominator: 10 000 bp = 100%.
pub const BASIS_POINTS: Decimal = dec!(10000);

/// A fee rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Backed by a [`Decimal`] so that fractional rates read from a contract
/// survive unchanged.  Negative rates are rejected at construction.
///
/// # Examples
///
/// ```
/// use rebase_amm::domain::BasisPoints;
/// use rust_decimal_macros::dec;
///
/// let bp = BasisPoints::from_u32(30);
/// assert_eq!(bp.get(), dec!(30));
/// assert_eq!(bp.apply(dec!(50)), Ok(dec!(0.15)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct BasisPoints(Decimal);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a `BasisPoints` from a decimal rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NegativeInput`] if `value` is negative.
    pub fn new(value: Decimal) -> Result<Self, AmmError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmmError::NegativeInput("feeInBasisPoints"));
        }
        Ok(Self(value))
    }

    /// Creates a `BasisPoints` from a whole number of basis points.
    #[must_use]
    pub const fn from_u32(bps: u32) -> Self {
        Self(Decimal::from_parts(bps, 0, 0, false, 0))
    }

    /// Returns the underlying rate.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a fraction of one (30 bp → 0.003).
    ///
    /// # Errors
    ///
    /// Propagates arithmetic errors from the division.
    pub fn fraction(&self) -> Result<Decimal, AmmError> {
        self.0.safe_div(&BASIS_POINTS)
    }

    /// Computes the fee charged on `amount`: `amount × (self / 10 000)`.
    ///
    /// The result is exact; no rounding is applied.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product is not representable.
    pub fn apply(&self, amount: Decimal) -> Result<Decimal, AmmError> {
        amount.safe_mul(&self.fraction()?)
    }
}

impl Numeric for BasisPoints {
    #[inline]
    fn to_decimal(&self, _arg: &'static str) -> Result<Decimal, AmmError> {
        Ok(self.0)
    }
}

impl<'de> Deserialize<'de> for BasisPoints {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

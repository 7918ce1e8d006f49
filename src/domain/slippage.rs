//! Slippage tolerance expressed as a percentage.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AmmError;
use crate::math::{CheckedArithmetic, Numeric};

/// A slippage tolerance in percent (`5` = 5%).
///
/// The tolerance turns a quoted amount into the lower bound a caller
/// passes on-chain: `amount × (1 − slippage / 100)`.
///
/// # Examples
///
/// ```
/// use rebase_amm::domain::SlippagePercent;
/// use rust_decimal_macros::dec;
///
/// let Ok(s) = SlippagePercent::new(dec!(5)) else { unreachable!() };
/// assert_eq!(s.tolerance(), Ok(dec!(0.95)));
/// assert_eq!(s.apply(dec!(1663)), Ok(dec!(1579.85)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct SlippagePercent(Decimal);

impl SlippagePercent {
    /// No slippage tolerance.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// 100% tolerance; every guarded amount becomes zero.
    pub const MAX: Self = Self(dec!(100));

    /// Creates a slippage tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NegativeInput`] if `percent` is negative, or if it
    /// exceeds 100 and would leave a negative tolerance.
    pub fn new(percent: Decimal) -> Result<Self, AmmError> {
        if (percent.is_sign_negative() && !percent.is_zero()) || percent > Self::MAX.0 {
            return Err(AmmError::NegativeInput("slippagePercent"));
        }
        Ok(Self(percent))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// The multiplier `1 − slippage / 100`.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic errors.
    pub fn tolerance(&self) -> Result<Decimal, AmmError> {
        Decimal::ONE.safe_sub(&self.0.safe_div(&dec!(100))?)
    }

    /// Scales `amount` by [`tolerance`](Self::tolerance).  Not rounded.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product is not representable.
    pub fn apply(&self, amount: Decimal) -> Result<Decimal, AmmError> {
        amount.safe_mul(&self.tolerance()?)
    }
}

impl Numeric for SlippagePercent {
    #[inline]
    fn to_decimal(&self, _arg: &'static str) -> Result<Decimal, AmmError> {
        Ok(self.0)
    }
}

impl<'de> Deserialize<'de> for SlippagePercent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SlippagePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

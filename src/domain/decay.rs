//! Reserve decay left behind by a rebase of the base token.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{InternalBalances, ReservePair};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Divergence between the actual base reserve and the internally tracked one.
///
/// Only the base token rebases, so decay is detected by comparing base
/// reserves.  It is never stored: every liquidity computation derives it
/// again from the snapshot it is given.
///
/// | Variant | Cause | Measured in | Removed by contributing |
/// |---------|-------|-------------|-------------------------|
/// | `Alpha` | rebase up (actual base > internal base) | base token | quote token |
/// | `Beta`  | rebase down (actual base < internal base) | quote token | base token |
///
/// # Examples
///
/// ```
/// use rebase_amm::domain::{Decay, InternalBalances, ReservePair};
/// use rust_decimal_macros::dec;
///
/// let Ok(internal) = InternalBalances::from_reserves(dec!(100), dec!(100)) else { unreachable!() };
/// let Ok(actual) = ReservePair::new(dec!(150), dec!(100)) else { unreachable!() };
/// assert_eq!(Decay::detect(&actual, &internal), Ok(Decay::Alpha(dec!(50))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Decay {
    /// Actual reserves agree with the internal balances.
    #[default]
    None,
    /// Surplus of base tokens: `actualBase − internalBase`.
    Alpha(Decimal),
    /// Quote-side deficit: `(internalBase − actualBase) × iOmega`.
    Beta(Decimal),
}

impl Decay {
    /// Derives the decay of `actual` against `internal`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if decay is present but an
    ///   internal reserve is zero.
    /// - [`AmmError::Overflow`] on arithmetic overflow.
    pub fn detect(actual: &ReservePair, internal: &InternalBalances) -> Result<Self, AmmError> {
        let internal_base = internal.base_token_reserve_qty();
        let actual_base = actual.base();
        if actual_base == internal_base {
            return Ok(Self::None);
        }
        let omega = internal.omega()?;
        if actual_base > internal_base {
            Ok(Self::Alpha(actual_base.safe_sub(&internal_base)?))
        } else {
            let base_shortfall = internal_base.safe_sub(&actual_base)?;
            Ok(Self::Beta(base_shortfall.safe_mul(&omega)?))
        }
    }

    /// The decay magnitude, zero for [`Decay::None`].
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Alpha(d) | Self::Beta(d) => *d,
        }
    }

    /// Largest contribution on the decayed side that goes to decay removal.
    ///
    /// Alpha decay is cancelled with quote tokens (`alphaDecay × iOmega`),
    /// beta decay with base tokens (`betaDecay / iOmega`, which is the
    /// base shortfall).
    ///
    /// # Errors
    ///
    /// Propagates arithmetic errors; `omega` must be non-zero.
    pub fn removal_cap(&self, omega: Decimal) -> Result<Decimal, AmmError> {
        match self {
            Self::None => Ok(Decimal::ZERO),
            Self::Alpha(d) => d.safe_mul(&omega),
            Self::Beta(d) => d.safe_div(&omega),
        }
    }

    /// How much of the decay a contribution of `used` tokens cancels,
    /// measured in the same unit as the decay.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic errors; `omega` must be non-zero.
    pub fn decay_change(&self, used: Decimal, omega: Decimal) -> Result<Decimal, AmmError> {
        match self {
            Self::None => Ok(Decimal::ZERO),
            Self::Alpha(_) => used.safe_div(&omega),
            Self::Beta(_) => used.safe_mul(&omega),
        }
    }
}

impl fmt::Display for Decay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Alpha(d) => write!(f, "alpha({d})"),
            Self::Beta(d) => write!(f, "beta({d})"),
        }
    }
}

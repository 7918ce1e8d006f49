//! Reserve snapshots: the pool's actual balances and its internal bookkeeping.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmmError;
use crate::math::{ensure_non_negative, CheckedArithmetic};

/// The pool's actual token balances as read from the chain at call time.
///
/// Supplied fresh per call; the engine never mutates or caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReservePair {
    #[serde(rename = "baseTokenReserveQty")]
    base: Decimal,
    #[serde(rename = "quoteTokenReserveQty")]
    quote: Decimal,
}

impl ReservePair {
    /// Creates a reserve pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NegativeInput`] if either reserve is negative.
    pub fn new(base: Decimal, quote: Decimal) -> Result<Self, AmmError> {
        ensure_non_negative(&[(base, "baseTokenReserveQty"), (quote, "quoteTokenReserveQty")])?;
        Ok(Self { base, quote })
    }

    /// Base-token reserve.
    #[must_use]
    pub const fn base(&self) -> Decimal {
        self.base
    }

    /// Quote-token reserve.
    #[must_use]
    pub const fn quote(&self) -> Decimal {
        self.quote
    }
}

/// The AMM's own record of its reserves and invariant product.
///
/// Updated by the pool's swap and liquidity bookkeeping only, so an
/// external rebase of the base token leaves it untouched.  Comparing it
/// with a [`ReservePair`] reveals [`Decay`](super::Decay).
///
/// # Examples
///
/// ```
/// use rebase_amm::domain::InternalBalances;
/// use rust_decimal_macros::dec;
///
/// let Ok(ib) = InternalBalances::from_reserves(dec!(100), dec!(100)) else {
///     unreachable!()
/// };
/// assert_eq!(ib.k_last(), dec!(10000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalBalances {
    base_token_reserve_qty: Decimal,
    quote_token_reserve_qty: Decimal,
    k_last: Decimal,
}

impl InternalBalances {
    /// Creates an internal-balance snapshot with an explicit `kLast`.
    ///
    /// `kLast` is taken as given: the contract only refreshes it on
    /// specific events, so it may lag `base × quote`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NegativeInput`] if any field is negative.
    pub fn new(base: Decimal, quote: Decimal, k_last: Decimal) -> Result<Self, AmmError> {
        ensure_non_negative(&[
            (base, "internalBalances.baseTokenReserveQty"),
            (quote, "internalBalances.quoteTokenReserveQty"),
            (k_last, "internalBalances.kLast"),
        ])?;
        Ok(Self {
            base_token_reserve_qty: base,
            quote_token_reserve_qty: quote,
            k_last,
        })
    }

    /// Creates a snapshot with `kLast = base × quote`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NegativeInput`] if either reserve is negative.
    /// - [`AmmError::Overflow`] if the product is not representable.
    pub fn from_reserves(base: Decimal, quote: Decimal) -> Result<Self, AmmError> {
        let k_last = base.safe_mul(&quote)?;
        Self::new(base, quote, k_last)
    }

    /// Internally tracked base-token reserve.
    #[must_use]
    pub const fn base_token_reserve_qty(&self) -> Decimal {
        self.base_token_reserve_qty
    }

    /// Internally tracked quote-token reserve.
    #[must_use]
    pub const fn quote_token_reserve_qty(&self) -> Decimal {
        self.quote_token_reserve_qty
    }

    /// Invariant product recorded at the last update.
    #[must_use]
    pub const fn k_last(&self) -> Decimal {
        self.k_last
    }

    /// Exchange ratio `quote / base` of the internal reserves (`iOmega`).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLiquidity`] if either internal
    /// reserve is zero.
    pub fn omega(&self) -> Result<Decimal, AmmError> {
        if self.base_token_reserve_qty.is_zero() || self.quote_token_reserve_qty.is_zero() {
            return Err(AmmError::InsufficientLiquidity(
                "internal balances are empty",
            ));
        }
        self.quote_token_reserve_qty
            .safe_div(&self.base_token_reserve_qty)
    }

    /// Re-checks the sign of every field.
    ///
    /// Needed for snapshots that bypassed [`new`](Self::new), e.g. by
    /// deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NegativeInput`] if any field is negative.
    pub fn validate(&self) -> Result<(), AmmError> {
        Self::new(
            self.base_token_reserve_qty,
            self.quote_token_reserve_qty,
            self.k_last,
        )
        .map(|_| ())
    }
}

//! Quoted outcome of a swap against one reserve snapshot.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Everything a caller needs to submit a swap: the expected output, the
/// guarded minimum, the fee taken and the price impact.
///
/// # Invariants
///
/// - `min_amount_out ≤ amount_out` for any slippage in `0..=100`.
/// - `fee ≤ amount_in` for fee rates up to 10 000 bp.
///
/// # Examples
///
/// ```
/// use rebase_amm::domain::SwapQuote;
/// use rust_decimal_macros::dec;
///
/// let q = SwapQuote::new(dec!(50), dec!(0.15), dec!(1663), dec!(1579.85), dec!(51.3));
/// assert_eq!(q.amount_out(), dec!(1663));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    amount_in: Decimal,
    fee: Decimal,
    amount_out: Decimal,
    min_amount_out: Decimal,
    price_impact: Decimal,
}

impl SwapQuote {
    /// Creates a new `SwapQuote`.
    #[must_use]
    pub const fn new(
        amount_in: Decimal,
        fee: Decimal,
        amount_out: Decimal,
        min_amount_out: Decimal,
        price_impact: Decimal,
    ) -> Self {
        Self {
            amount_in,
            fee,
            amount_out,
            min_amount_out,
            price_impact,
        }
    }

    /// Returns the input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Decimal {
        self.amount_in
    }

    /// Returns the fee deducted from the input.
    #[must_use]
    pub const fn fee(&self) -> Decimal {
        self.fee
    }

    /// Returns the output the pool pays at the quoted reserves.
    #[must_use]
    pub const fn amount_out(&self) -> Decimal {
        self.amount_out
    }

    /// Returns the minimum output to pass on-chain.
    #[must_use]
    pub const fn min_amount_out(&self) -> Decimal {
        self.min_amount_out
    }

    /// Returns the price impact in percent.
    #[must_use]
    pub const fn price_impact(&self) -> Decimal {
        self.price_impact
    }

    /// Realized price `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] for a zero input.
    pub fn effective_price(&self) -> Result<Decimal, AmmError> {
        self.amount_out.safe_div(&self.amount_in)
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote(in={}, fee={}, out={}, min_out={}, impact={}%)",
            self.amount_in, self.fee, self.amount_out, self.min_amount_out, self.price_impact
        )
    }
}

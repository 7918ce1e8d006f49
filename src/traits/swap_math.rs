//! Swap and exchange-rate pricing over a constant-product pool.
//!
//! [`SwapMath`] covers every swap-side quantity a client needs before it
//! submits a trade:
//!
//! 1. **Proportion** ([`SwapMath::calculate_qty`]): the counter-amount at
//!    the current ratio, ignoring price movement.
//! 2. **Fee** ([`SwapMath::calculate_fees`]).
//! 3. **Output** ([`SwapMath::calculate_qty_to_return_after_fees`]): what
//!    the pool pays.
//! 4. **Guard** ([`SwapMath::calculate_output_amount_less_fees`]): the
//!    minimum output to pass on-chain.
//! 5. **Rate and impact** ([`SwapMath::calculate_exchange_rate`],
//!    [`SwapMath::calculate_price_impact`]).
//!
//! # Fee Deduction Invariant
//!
//! Fees are deducted from the input amount before the pricing formula is
//! applied:
//!
//! ```text
//! fee            = amount_in × fee_bps / 10_000
//! reserve_a_post = reserve_a + amount_in − fee
//! reserve_b_post = reserve_a × reserve_b / reserve_a_post
//! amount_out     = floor(reserve_b − reserve_b_post)
//! ```
//!
//! Every argument is taken as `impl Numeric` and validated in the order
//! documented on [`AmmError`].

use rust_decimal::Decimal;

use crate::domain::SwapQuote;
use crate::error::AmmError;
use crate::math::Numeric;

/// Pricing of swaps against a reserve snapshot.
///
/// # Errors
///
/// Every method validates its arguments and can return:
///
/// - [`AmmError::NotANumber`] for an absent or non-numeric argument.
/// - [`AmmError::NegativeInput`] for a negative argument.
/// - [`AmmError::InsufficientQty`] for a zero quantity where one is required.
/// - [`AmmError::InsufficientLiquidity`] for a zero reserve.
/// - [`AmmError::Overflow`] if an intermediate value is not representable.
pub trait SwapMath {
    /// `tokenAQty × tokenBReserveQty / tokenAReserveQty`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientQty`] if `token_a_qty` is zero,
    /// [`AmmError::InsufficientLiquidity`] if either reserve is zero.
    fn calculate_qty(
        &self,
        token_a_qty: impl Numeric,
        token_a_reserve_qty: impl Numeric,
        token_b_reserve_qty: impl Numeric,
    ) -> Result<Decimal, AmmError>;

    /// `swapAmount × feeInBasisPoints / 10 000`, exact.
    ///
    /// # Errors
    ///
    /// [`AmmError::NegativeInput`] / [`AmmError::NotANumber`] only.
    fn calculate_fees(
        &self,
        fee_in_basis_points: impl Numeric,
        swap_amount: impl Numeric,
    ) -> Result<Decimal, AmmError>;

    /// Output of swapping `token_swap_qty` of token A into the pool,
    /// truncated to the configured swap-output scale.
    ///
    /// A zero swap quantity returns zero.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientLiquidity`] if either reserve is zero or
    /// the fee consumes the whole post-trade reserve.
    fn calculate_qty_to_return_after_fees(
        &self,
        token_swap_qty: impl Numeric,
        reserve_a_before: impl Numeric,
        reserve_b_before: impl Numeric,
        fee_in_basis_points: impl Numeric,
    ) -> Result<Decimal, AmmError>;

    /// The after-fees output scaled by `1 − slippagePercent / 100`.
    ///
    /// The product is not rounded.
    ///
    /// # Errors
    ///
    /// Same as [`calculate_qty_to_return_after_fees`](Self::calculate_qty_to_return_after_fees).
    fn calculate_output_amount_less_fees(
        &self,
        token_swap_qty: impl Numeric,
        reserve_a_before: impl Numeric,
        reserve_b_before: impl Numeric,
        slippage_percent: impl Numeric,
        fee_in_basis_points: impl Numeric,
    ) -> Result<Decimal, AmmError>;

    /// `reserveA / reserveB`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientLiquidity`] if either reserve is zero.
    fn calculate_exchange_rate(
        &self,
        reserve_a: impl Numeric,
        reserve_b: impl Numeric,
    ) -> Result<Decimal, AmmError>;

    /// Relative change of the A-per-B rate caused by the swap, in percent.
    ///
    /// The post-trade rate is `(reserve_a + qty) / (reserve_b − out)`, where
    /// `out` is the zero-slippage output of `qty` priced against
    /// `reserve_a + qty`.  `slippage_percent` is validated but does not move
    /// the result.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientLiquidity`] if either reserve is zero.
    fn calculate_price_impact(
        &self,
        token_swap_qty: impl Numeric,
        reserve_a_before: impl Numeric,
        reserve_b_before: impl Numeric,
        slippage_percent: impl Numeric,
        fee_in_basis_points: impl Numeric,
    ) -> Result<Decimal, AmmError>;

    /// All of the above for one snapshot, bundled in a [`SwapQuote`].
    ///
    /// # Errors
    ///
    /// Same as [`calculate_price_impact`](Self::calculate_price_impact).
    fn quote_swap(
        &self,
        token_swap_qty: impl Numeric,
        reserve_a_before: impl Numeric,
        reserve_b_before: impl Numeric,
        slippage_percent: impl Numeric,
        fee_in_basis_points: impl Numeric,
    ) -> Result<SwapQuote, AmmError>;
}

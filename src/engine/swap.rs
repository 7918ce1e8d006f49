//! Constant-product swap pricing.
//!
//! # Swap Algorithm (token A in, token B out)
//!
//! 1. `fee = amount_in × fee_bps / 10 000`
//! 2. `reserve_a_post = reserve_a + amount_in − fee`
//! 3. `reserve_b_post = reserve_a × reserve_b / reserve_a_post`
//! 4. `amount_out = trunc(reserve_b − reserve_b_post)`
//!
//! The fee stays in the pool, so `reserve_a_post × reserve_b_post = k`
//! while the pool actually holds `reserve_a + amount_in`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::trace;

use super::{ensure_liquidity, PricingEngine};
use crate::domain::{BasisPoints, SlippagePercent, SwapQuote};
use crate::error::AmmError;
use crate::math::{ensure_non_negative, truncate, CheckedArithmetic, Numeric};
use crate::traits::SwapMath;

/// Validated arguments shared by the swap-output family.
#[derive(Debug, Clone, Copy)]
struct SwapInputs {
    qty: Decimal,
    reserve_a: Decimal,
    reserve_b: Decimal,
    slippage: SlippagePercent,
    fee: BasisPoints,
}

impl SwapInputs {
    fn read(
        token_swap_qty: impl Numeric,
        reserve_a_before: impl Numeric,
        reserve_b_before: impl Numeric,
        slippage_percent: Option<impl Numeric>,
        fee_in_basis_points: impl Numeric,
    ) -> Result<Self, AmmError> {
        let qty = token_swap_qty.to_decimal("tokenSwapQty")?;
        let reserve_a = reserve_a_before.to_decimal("reserveABefore")?;
        let reserve_b = reserve_b_before.to_decimal("reserveBBefore")?;
        let slippage = match slippage_percent {
            Some(s) => s.to_decimal("slippagePercent")?,
            None => Decimal::ZERO,
        };
        let fee = fee_in_basis_points.to_decimal("feeInBasisPoints")?;

        ensure_non_negative(&[
            (qty, "tokenSwapQty"),
            (reserve_a, "reserveABefore"),
            (reserve_b, "reserveBBefore"),
            (slippage, "slippagePercent"),
            (fee, "feeInBasisPoints"),
        ])?;
        ensure_liquidity(&[(reserve_a, "reserveABefore"), (reserve_b, "reserveBBefore")])?;

        Ok(Self {
            qty,
            reserve_a,
            reserve_b,
            slippage: SlippagePercent::new(slippage)?,
            fee: BasisPoints::new(fee)?,
        })
    }
}

impl PricingEngine {
    /// Core constant-product output on validated inputs.
    fn output_after_fees(&self, inputs: &SwapInputs) -> Result<Decimal, AmmError> {
        if inputs.qty.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let fee = inputs.fee.apply(inputs.qty)?;
        let reserve_a_post = inputs.reserve_a.safe_add(&inputs.qty)?.safe_sub(&fee)?;
        if reserve_a_post <= Decimal::ZERO {
            return Err(AmmError::InsufficientLiquidity(
                "fee exceeds the post-trade reserve",
            ));
        }
        let k = inputs.reserve_a.safe_mul(&inputs.reserve_b)?;
        let reserve_b_post = k.safe_div(&reserve_a_post)?;
        let out = inputs.reserve_b.safe_sub(&reserve_b_post)?;
        trace!(%fee, %reserve_a_post, %reserve_b_post, %out, "constant-product output");
        Ok(truncate(out, self.config.swap_output_decimals()))
    }

    /// Price impact in percent on validated inputs.
    ///
    /// The post-trade estimate prices `qty` against `reserve_a + qty` at
    /// zero slippage, then compares `(reserve_a + qty) / (reserve_b − out)`
    /// with the pre-trade rate.
    fn price_impact_for(&self, inputs: &SwapInputs) -> Result<Decimal, AmmError> {
        let rate_before = inputs.reserve_a.safe_div(&inputs.reserve_b)?;
        let reserve_a_after = inputs.reserve_a.safe_add(&inputs.qty)?;
        let estimate = SwapInputs {
            reserve_a: reserve_a_after,
            slippage: SlippagePercent::ZERO,
            ..*inputs
        };
        let amount_out = self.output_after_fees(&estimate)?;
        let reserve_b_after = inputs.reserve_b.safe_sub(&amount_out)?;
        if reserve_b_after <= Decimal::ZERO {
            return Err(AmmError::InsufficientLiquidity("swap drains reserve B"));
        }
        let rate_after = reserve_a_after.safe_div(&reserve_b_after)?;
        rate_after
            .safe_sub(&rate_before)?
            .safe_div(&rate_before)?
            .safe_mul(&dec!(100))
    }
}

impl SwapMath for PricingEngine {
    fn calculate_qty(
        &self,
        token_a_qty: impl Numeric,
        token_a_reserve_qty: impl Numeric,
        token_b_reserve_qty: impl Numeric,
    ) -> Result<Decimal, AmmError> {
        let qty = token_a_qty.to_decimal("tokenAQty")?;
        let reserve_a = token_a_reserve_qty.to_decimal("tokenAReserveQty")?;
        let reserve_b = token_b_reserve_qty.to_decimal("tokenBReserveQty")?;

        ensure_non_negative(&[
            (qty, "tokenAQty"),
            (reserve_a, "tokenAReserveQty"),
            (reserve_b, "tokenBReserveQty"),
        ])?;
        if qty.is_zero() {
            return Err(AmmError::InsufficientQty("tokenAQty"));
        }
        ensure_liquidity(&[(reserve_a, "tokenAReserveQty"), (reserve_b, "tokenBReserveQty")])?;

        qty.safe_mul(&reserve_b)?.safe_div(&reserve_a)
    }

    fn calculate_fees(
        &self,
        fee_in_basis_points: impl Numeric,
        swap_amount: impl Numeric,
    ) -> Result<Decimal, AmmError> {
        let fee = fee_in_basis_points.to_decimal("feeInBasisPoints")?;
        let amount = swap_amount.to_decimal("swapAmount")?;
        ensure_non_negative(&[(fee, "feeInBasisPoints"), (amount, "swapAmount")])?;
        BasisPoints::new(fee)?.apply(amount)
    }

    fn calculate_qty_to_return_after_fees(
        &self,
        token_swap_qty: impl Numeric,
        reserve_a_before: impl Numeric,
        reserve_b_before: impl Numeric,
        fee_in_basis_points: impl Numeric,
    ) -> Result<Decimal, AmmError> {
        let inputs = SwapInputs::read(
            token_swap_qty,
            reserve_a_before,
            reserve_b_before,
            None::<Decimal>,
            fee_in_basis_points,
        )?;
        self.output_after_fees(&inputs)
    }

    fn calculate_output_amount_less_fees(
        &self,
        token_swap_qty: impl Numeric,
        reserve_a_before: impl Numeric,
        reserve_b_before: impl Numeric,
        slippage_percent: impl Numeric,
        fee_in_basis_points: impl Numeric,
    ) -> Result<Decimal, AmmError> {
        let inputs = SwapInputs::read(
            token_swap_qty,
            reserve_a_before,
            reserve_b_before,
            Some(slippage_percent),
            fee_in_basis_points,
        )?;
        let out = self.output_after_fees(&inputs)?;
        inputs.slippage.apply(out)
    }

    fn calculate_exchange_rate(
        &self,
        reserve_a: impl Numeric,
        reserve_b: impl Numeric,
    ) -> Result<Decimal, AmmError> {
        let a = reserve_a.to_decimal("reserveA")?;
        let b = reserve_b.to_decimal("reserveB")?;
        ensure_non_negative(&[(a, "reserveA"), (b, "reserveB")])?;
        ensure_liquidity(&[(a, "reserveA"), (b, "reserveB")])?;
        a.safe_div(&b)
    }

    fn calculate_price_impact(
        &self,
        token_swap_qty: impl Numeric,
        reserve_a_before: impl Numeric,
        reserve_b_before: impl Numeric,
        slippage_percent: impl Numeric,
        fee_in_basis_points: impl Numeric,
    ) -> Result<Decimal, AmmError> {
        let inputs = SwapInputs::read(
            token_swap_qty,
            reserve_a_before,
            reserve_b_before,
            Some(slippage_percent),
            fee_in_basis_points,
        )?;
        self.price_impact_for(&inputs)
    }

    fn quote_swap(
        &self,
        token_swap_qty: impl Numeric,
        reserve_a_before: impl Numeric,
        reserve_b_before: impl Numeric,
        slippage_percent: impl Numeric,
        fee_in_basis_points: impl Numeric,
    ) -> Result<SwapQuote, AmmError> {
        let inputs = SwapInputs::read(
            token_swap_qty,
            reserve_a_before,
            reserve_b_before,
            Some(slippage_percent),
            fee_in_basis_points,
        )?;
        let fee = inputs.fee.apply(inputs.qty)?;
        let out = self.output_after_fees(&inputs)?;
        let min_out = inputs.slippage.apply(out)?;
        let impact = self.price_impact_for(&inputs)?;
        trace!(qty = %inputs.qty, %out, %min_out, %impact, "swap quoted");
        Ok(SwapQuote::new(inputs.qty, fee, out, min_out, impact))
    }
}

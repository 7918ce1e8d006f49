//! The pricing engine and its free-function surface.
//!
//! [`PricingEngine`] implements [`SwapMath`] and [`LiquidityMath`].  It
//! carries only its [`PricingConfig`]; every call works on the snapshot
//! passed in and nothing is cached between calls, so one engine can be
//! shared freely across threads.
//!
//! For callers that are happy with the default rounding scales, each
//! operation is also available as a free function in this module.
//!
//! ```
//! use rebase_amm::engine;
//! use rust_decimal_macros::dec;
//!
//! let out = engine::calculate_qty_to_return_after_fees(dec!(50), dec!(100), dec!(5000), 30u32);
//! assert_eq!(out, Ok(dec!(1663)));
//! ```

mod liquidity;
mod redemption;
mod swap;

#[cfg(test)]
mod proptest_properties;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingConfig;
use crate::domain::{InternalBalances, LiquidityQuote, SwapQuote, TokenAmounts};
use crate::error::AmmError;
use crate::math::Numeric;
use crate::traits::{FromConfig, LiquidityMath, SwapMath};

/// Stateless pricing engine for a rebasing constant-product pool.
///
/// Created from a [`PricingConfig`] via [`FromConfig`], or with
/// [`Default`] for the standard 18-decimal scales.
///
/// # Example
///
/// ```rust
/// use rebase_amm::config::PricingConfig;
/// use rebase_amm::domain::InternalBalances;
/// use rebase_amm::engine::PricingEngine;
/// use rebase_amm::traits::{FromConfig, LiquidityMath};
/// use rust_decimal_macros::dec;
///
/// let Ok(engine) = PricingEngine::from_config(&PricingConfig::default()) else { unreachable!() };
/// let Ok(internal) = InternalBalances::from_reserves(dec!(100), dec!(100)) else { unreachable!() };
///
/// // Base token rebased from 100 to 150: cancel the decay with 50 quote tokens.
/// let minted = engine.calculate_lp_token_amount(
///     dec!(50), dec!(0), dec!(100), dec!(150), dec!(0), dec!(100), &internal,
/// );
/// assert_eq!(minted, Ok(dec!(19)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }
}

impl FromConfig<PricingConfig> for PricingEngine {
    /// Creates an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if any rounding scale is out of
    /// range.
    fn from_config(config: &PricingConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self { config: *config })
    }
}

/// Fails with [`AmmError::InsufficientLiquidity`] on the first zero value.
pub(crate) fn ensure_liquidity(values: &[(Decimal, &'static str)]) -> Result<(), AmmError> {
    match values.iter().find(|(value, _)| value.is_zero()) {
        Some(&(_, arg)) => {
            debug!(argument = arg, "rejected empty reserve");
            Err(AmmError::InsufficientLiquidity(arg))
        }
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Free functions over the default engine
// ---------------------------------------------------------------------------

/// See [`SwapMath::calculate_qty`].
///
/// # Errors
///
/// See [`SwapMath::calculate_qty`].
pub fn calculate_qty(
    token_a_qty: impl Numeric,
    token_a_reserve_qty: impl Numeric,
    token_b_reserve_qty: impl Numeric,
) -> Result<Decimal, AmmError> {
    PricingEngine::default().calculate_qty(token_a_qty, token_a_reserve_qty, token_b_reserve_qty)
}

/// See [`SwapMath::calculate_fees`].
///
/// # Errors
///
/// See [`SwapMath::calculate_fees`].
pub fn calculate_fees(
    fee_in_basis_points: impl Numeric,
    swap_amount: impl Numeric,
) -> Result<Decimal, AmmError> {
    PricingEngine::default().calculate_fees(fee_in_basis_points, swap_amount)
}

/// See [`SwapMath::calculate_qty_to_return_after_fees`].
///
/// # Errors
///
/// See [`SwapMath::calculate_qty_to_return_after_fees`].
pub fn calculate_qty_to_return_after_fees(
    token_swap_qty: impl Numeric,
    reserve_a_before: impl Numeric,
    reserve_b_before: impl Numeric,
    fee_in_basis_points: impl Numeric,
) -> Result<Decimal, AmmError> {
    PricingEngine::default().calculate_qty_to_return_after_fees(
        token_swap_qty,
        reserve_a_before,
        reserve_b_before,
        fee_in_basis_points,
    )
}

/// See [`SwapMath::calculate_output_amount_less_fees`].
///
/// # Errors
///
/// See [`SwapMath::calculate_output_amount_less_fees`].
pub fn calculate_output_amount_less_fees(
    token_swap_qty: impl Numeric,
    reserve_a_before: impl Numeric,
    reserve_b_before: impl Numeric,
    slippage_percent: impl Numeric,
    fee_in_basis_points: impl Numeric,
) -> Result<Decimal, AmmError> {
    PricingEngine::default().calculate_output_amount_less_fees(
        token_swap_qty,
        reserve_a_before,
        reserve_b_before,
        slippage_percent,
        fee_in_basis_points,
    )
}

/// See [`SwapMath::calculate_exchange_rate`].
///
/// # Errors
///
/// See [`SwapMath::calculate_exchange_rate`].
pub fn calculate_exchange_rate(
    reserve_a: impl Numeric,
    reserve_b: impl Numeric,
) -> Result<Decimal, AmmError> {
    PricingEngine::default().calculate_exchange_rate(reserve_a, reserve_b)
}

/// See [`SwapMath::calculate_price_impact`].
///
/// # Errors
///
/// See [`SwapMath::calculate_price_impact`].
pub fn calculate_price_impact(
    token_swap_qty: impl Numeric,
    reserve_a_before: impl Numeric,
    reserve_b_before: impl Numeric,
    slippage_percent: impl Numeric,
    fee_in_basis_points: impl Numeric,
) -> Result<Decimal, AmmError> {
    PricingEngine::default().calculate_price_impact(
        token_swap_qty,
        reserve_a_before,
        reserve_b_before,
        slippage_percent,
        fee_in_basis_points,
    )
}

/// See [`SwapMath::quote_swap`].
///
/// # Errors
///
/// See [`SwapMath::quote_swap`].
pub fn quote_swap(
    token_swap_qty: impl Numeric,
    reserve_a_before: impl Numeric,
    reserve_b_before: impl Numeric,
    slippage_percent: impl Numeric,
    fee_in_basis_points: impl Numeric,
) -> Result<SwapQuote, AmmError> {
    PricingEngine::default().quote_swap(
        token_swap_qty,
        reserve_a_before,
        reserve_b_before,
        slippage_percent,
        fee_in_basis_points,
    )
}

/// See [`LiquidityMath::calculate_lp_token_amount`].
///
/// # Errors
///
/// See [`LiquidityMath::quote_liquidity`].
pub fn calculate_lp_token_amount(
    quote_token_amount: impl Numeric,
    base_token_amount: impl Numeric,
    quote_token_reserve_qty: impl Numeric,
    base_token_reserve_qty: impl Numeric,
    slippage_percent: impl Numeric,
    total_supply_of_liquidity_tokens: impl Numeric,
    internal_balances: &InternalBalances,
) -> Result<Decimal, AmmError> {
    PricingEngine::default().calculate_lp_token_amount(
        quote_token_amount,
        base_token_amount,
        quote_token_reserve_qty,
        base_token_reserve_qty,
        slippage_percent,
        total_supply_of_liquidity_tokens,
        internal_balances,
    )
}

/// See [`LiquidityMath::quote_liquidity`].
///
/// # Errors
///
/// See [`LiquidityMath::quote_liquidity`].
pub fn quote_liquidity(
    quote_token_amount: impl Numeric,
    base_token_amount: impl Numeric,
    quote_token_reserve_qty: impl Numeric,
    base_token_reserve_qty: impl Numeric,
    slippage_percent: impl Numeric,
    total_supply_of_liquidity_tokens: impl Numeric,
    internal_balances: &InternalBalances,
) -> Result<LiquidityQuote, AmmError> {
    PricingEngine::default().quote_liquidity(
        quote_token_amount,
        base_token_amount,
        quote_token_reserve_qty,
        base_token_reserve_qty,
        slippage_percent,
        total_supply_of_liquidity_tokens,
        internal_balances,
    )
}

/// See [`LiquidityMath::calculate_liquidity_token_qty_for_double_asset_entry`].
///
/// # Errors
///
/// See [`LiquidityMath::calculate_liquidity_token_qty_for_double_asset_entry`].
pub fn calculate_liquidity_token_qty_for_double_asset_entry(
    total_supply_of_liquidity_tokens: impl Numeric,
    quote_token_qty: impl Numeric,
    quote_token_reserve_qty: impl Numeric,
) -> Result<Decimal, AmmError> {
    PricingEngine::default().calculate_liquidity_token_qty_for_double_asset_entry(
        total_supply_of_liquidity_tokens,
        quote_token_qty,
        quote_token_reserve_qty,
    )
}

/// See [`LiquidityMath::calculate_liquidity_token_qty_for_single_asset_entry`].
///
/// # Errors
///
/// See [`LiquidityMath::calculate_liquidity_token_qty_for_single_asset_entry`].
pub fn calculate_liquidity_token_qty_for_single_asset_entry(
    total_supply_of_liquidity_tokens: impl Numeric,
    token_qty_a_to_add: impl Numeric,
    token_a_reserve_qty_after_transaction: impl Numeric,
    token_b_decay_change: impl Numeric,
    token_b_decay: impl Numeric,
) -> Result<Decimal, AmmError> {
    PricingEngine::default().calculate_liquidity_token_qty_for_single_asset_entry(
        total_supply_of_liquidity_tokens,
        token_qty_a_to_add,
        token_a_reserve_qty_after_transaction,
        token_b_decay_change,
        token_b_decay,
    )
}

/// See [`LiquidityMath::calculate_token_amounts_from_lp_tokens`].
///
/// # Errors
///
/// See [`LiquidityMath::calculate_token_amounts_from_lp_tokens`].
pub fn calculate_token_amounts_from_lp_tokens(
    lp_token_qty_to_redeem: impl Numeric,
    slippage_percent: impl Numeric,
    base_token_reserve_qty: impl Numeric,
    quote_token_reserve_qty: impl Numeric,
    total_lp_token_supply: impl Numeric,
) -> Result<TokenAmounts, AmmError> {
    PricingEngine::default().calculate_token_amounts_from_lp_tokens(
        lp_token_qty_to_redeem,
        slippage_percent,
        base_token_reserve_qty,
        quote_token_reserve_qty,
        total_lp_token_supply,
    )
}

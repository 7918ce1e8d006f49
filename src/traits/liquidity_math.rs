//! Liquidity-token issuance and redemption for a rebasing pool.
//!
//! [`LiquidityMath`] prices both directions of a liquidity position:
//!
//! - **Issue**: [`LiquidityMath::calculate_lp_token_amount`] classifies a
//!   deposit (bootstrap, double-asset, single-asset or partial) against
//!   the decay between the actual reserves and the internal balances, and
//!   returns the amount the contract mints.
//! - **Redeem**: [`LiquidityMath::calculate_token_amounts_from_lp_tokens`]
//!   returns the pro-rata share of both reserves.
//!
//! The two entry primitives are exposed as well so a caller can price a
//! leg on its own.

use rust_decimal::Decimal;

use crate::domain::{InternalBalances, LiquidityQuote, TokenAmounts};
use crate::error::AmmError;
use crate::math::Numeric;

/// Pricing of liquidity deposits and redemptions.
///
/// # Errors
///
/// Every method validates its arguments and can return:
///
/// - [`AmmError::NotANumber`] for an absent or non-numeric argument.
/// - [`AmmError::NegativeInput`] for a negative argument.
/// - [`AmmError::InsufficientQty`] for a zero contribution where one is required.
/// - [`AmmError::InsufficientLiquidity`] for a zero reserve or supply.
/// - [`AmmError::Overflow`] if an intermediate value is not representable.
pub trait LiquidityMath {
    /// Liquidity tokens minted for a deposit.
    ///
    /// Equivalent to `quote_liquidity(..)?.minted()`.
    ///
    /// # Errors
    ///
    /// See [`quote_liquidity`](Self::quote_liquidity).
    #[allow(clippy::too_many_arguments)]
    fn calculate_lp_token_amount(
        &self,
        quote_token_amount: impl Numeric,
        base_token_amount: impl Numeric,
        quote_token_reserve_qty: impl Numeric,
        base_token_reserve_qty: impl Numeric,
        slippage_percent: impl Numeric,
        total_supply_of_liquidity_tokens: impl Numeric,
        internal_balances: &InternalBalances,
    ) -> Result<Decimal, AmmError>;

    /// Classifies a deposit and prices every leg of it.
    ///
    /// `slippage_percent` is validated but does not scale the result.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientQty`] for a bootstrap missing one side, or
    ///   a decayed pool receiving nothing on the decayed side.
    /// - [`AmmError::InsufficientLiquidity`] if a ratio needs a zero
    ///   reserve or internal balance.
    #[allow(clippy::too_many_arguments)]
    fn quote_liquidity(
        &self,
        quote_token_amount: impl Numeric,
        base_token_amount: impl Numeric,
        quote_token_reserve_qty: impl Numeric,
        base_token_reserve_qty: impl Numeric,
        slippage_percent: impl Numeric,
        total_supply_of_liquidity_tokens: impl Numeric,
        internal_balances: &InternalBalances,
    ) -> Result<LiquidityQuote, AmmError>;

    /// `quoteTokenQty / quoteTokenReserveQty × totalSupply`, unrounded.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientLiquidity`] if the reserve is zero.
    fn calculate_liquidity_token_qty_for_double_asset_entry(
        &self,
        total_supply_of_liquidity_tokens: impl Numeric,
        quote_token_qty: impl Numeric,
        quote_token_reserve_qty: impl Numeric,
    ) -> Result<Decimal, AmmError>;

    /// `floor(totalSupply × γ / (1 − γ))` with
    /// `γ = trunc(tokenQtyAToAdd / reserveAfterTx × decayChange / decay / 2)`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientLiquidity`] if the post-transaction reserve
    /// or the decay is zero, or if `γ` reaches one.
    fn calculate_liquidity_token_qty_for_single_asset_entry(
        &self,
        total_supply_of_liquidity_tokens: impl Numeric,
        token_qty_a_to_add: impl Numeric,
        token_a_reserve_qty_after_transaction: impl Numeric,
        token_b_decay_change: impl Numeric,
        token_b_decay: impl Numeric,
    ) -> Result<Decimal, AmmError>;

    /// Pro-rata reserves paid for burning `lp_token_qty_to_redeem`, scaled
    /// by `1 − slippagePercent / 100`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientLiquidity`] if the supply is zero or
    /// smaller than the amount redeemed.
    fn calculate_token_amounts_from_lp_tokens(
        &self,
        lp_token_qty_to_redeem: impl Numeric,
        slippage_percent: impl Numeric,
        base_token_reserve_qty: impl Numeric,
        quote_token_reserve_qty: impl Numeric,
        total_lp_token_supply: impl Numeric,
    ) -> Result<TokenAmounts, AmmError>;
}

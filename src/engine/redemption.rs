//! Pro-rata redemption of liquidity tokens.

use tracing::debug;

use super::ensure_liquidity;
use crate::domain::{SlippagePercent, TokenAmounts};
use crate::error::AmmError;
use crate::math::{ensure_non_negative, CheckedArithmetic, Numeric};

/// `reserve × lp / supply × (1 − slippage / 100)` for each side.
///
/// Reserves are multiplied before dividing so that a zero-slippage
/// redemption of the whole supply returns the reserves exactly.
pub(super) fn token_amounts_from_lp_tokens(
    lp_token_qty_to_redeem: impl Numeric,
    slippage_percent: impl Numeric,
    base_token_reserve_qty: impl Numeric,
    quote_token_reserve_qty: impl Numeric,
    total_lp_token_supply: impl Numeric,
) -> Result<TokenAmounts, AmmError> {
    let lp = lp_token_qty_to_redeem.to_decimal("lpTokenQtyToRedeem")?;
    let slippage = slippage_percent.to_decimal("slippagePercent")?;
    let base_reserve = base_token_reserve_qty.to_decimal("baseTokenReserveQty")?;
    let quote_reserve = quote_token_reserve_qty.to_decimal("quoteTokenReserveQty")?;
    let supply = total_lp_token_supply.to_decimal("totalLPTokenSupply")?;

    ensure_non_negative(&[
        (lp, "lpTokenQtyToRedeem"),
        (slippage, "slippagePercent"),
        (base_reserve, "baseTokenReserveQty"),
        (quote_reserve, "quoteTokenReserveQty"),
        (supply, "totalLPTokenSupply"),
    ])?;
    ensure_liquidity(&[(supply, "totalLPTokenSupply")])?;
    if lp > supply {
        debug!(%lp, %supply, "redemption exceeds supply");
        return Err(AmmError::InsufficientLiquidity("lpTokenQtyToRedeem"));
    }

    let slippage = SlippagePercent::new(slippage)?;
    let base = slippage.apply(base_reserve.safe_mul(&lp)?.safe_div(&supply)?)?;
    let quote = slippage.apply(quote_reserve.safe_mul(&lp)?.safe_div(&supply)?)?;
    Ok(TokenAmounts::new(base, quote))
}

//! Decay-aware liquidity-token issuance.
//!
//! A deposit is classified against the snapshot it is priced on:
//!
//! ```text
//!                      total supply == 0 ──▶ Bootstrap        √(quote × base)
//!                             │
//!                      Decay::detect
//!                 ┌───────────┴────────────┐
//!             Decay::None           Alpha / Beta
//!                 │                        │
//!           DoubleAsset      contribution on decayed side
//!                                 ≤ cap ─┴─ > cap
//!                                   │         │
//!                             SingleAsset   PartialSingleAsset
//! ```
//!
//! The single-asset leg mints `S × γ / (1 − γ)`; the double-asset leg mints
//! `min(quote / quoteReserve, base / baseReserve) × S`.  A partial entry runs
//! the single-asset leg on the capped contribution, then the double-asset
//! leg on what is left against the supply and reserves the first leg
//! produced.  Excess on the decayed side with nothing left to pair it is
//! not used.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::{ensure_liquidity, redemption, PricingEngine};
use crate::domain::{Decay, EntryKind, InternalBalances, LiquidityQuote, ReservePair, TokenAmounts};
use crate::error::AmmError;
use crate::math::{ensure_non_negative, truncate, CheckedArithmetic, Numeric};
use crate::traits::LiquidityMath;

/// Validated deposit arguments.
#[derive(Debug, Clone, Copy)]
struct Deposit {
    quote_amount: Decimal,
    base_amount: Decimal,
    reserves: ReservePair,
    total_supply: Decimal,
}

/// Pro-rata leg of a deposit.
///
/// Mints against whichever offered side covers the smaller share of the
/// pool; the other side is matched at the reserve ratio.
#[derive(Debug, Clone, Copy)]
struct ProRataLeg {
    quote_used: Decimal,
    base_used: Decimal,
    lp: Decimal,
}

impl ProRataLeg {
    /// `quote_reserve` must be non-zero.
    fn price(
        quote_offered: Decimal,
        base_offered: Decimal,
        quote_reserve: Decimal,
        base_reserve: Decimal,
        total_supply: Decimal,
    ) -> Result<Self, AmmError> {
        let quote_lp = PricingEngine::double_asset_lp(total_supply, quote_offered, quote_reserve)?;
        if base_reserve.is_zero() {
            return Ok(Self {
                quote_used: quote_offered,
                base_used: Decimal::ZERO,
                lp: quote_lp,
            });
        }
        let base_lp = base_offered.safe_div(&base_reserve)?.safe_mul(&total_supply)?;
        if quote_lp <= base_lp {
            let base_used = quote_offered
                .safe_mul(&base_reserve)?
                .safe_div(&quote_reserve)?
                .min(base_offered);
            Ok(Self {
                quote_used: quote_offered,
                base_used,
                lp: quote_lp,
            })
        } else {
            let quote_used = base_offered
                .safe_mul(&quote_reserve)?
                .safe_div(&base_reserve)?
                .min(quote_offered);
            Ok(Self {
                quote_used,
                base_used: base_offered,
                lp: base_lp,
            })
        }
    }
}

impl PricingEngine {
    /// `quote / quote_reserve × supply` on validated inputs.
    fn double_asset_lp(
        total_supply: Decimal,
        quote: Decimal,
        quote_reserve: Decimal,
    ) -> Result<Decimal, AmmError> {
        quote.safe_div(&quote_reserve)?.safe_mul(&total_supply)
    }

    /// `floor(supply × γ / (1 − γ))` on validated inputs.
    fn single_asset_lp(
        &self,
        total_supply: Decimal,
        qty_to_add: Decimal,
        reserve_after: Decimal,
        decay_change: Decimal,
        decay: Decimal,
    ) -> Result<Decimal, AmmError> {
        let raw_gamma = qty_to_add
            .safe_div(&reserve_after)?
            .safe_mul(&decay_change)?
            .safe_div(&decay)?
            .safe_div(&dec!(2))?;
        let gamma = truncate(raw_gamma, self.config.gamma_decimals());
        if gamma >= Decimal::ONE {
            return Err(AmmError::InsufficientLiquidity(
                "decay change exceeds the decay it removes",
            ));
        }
        let lp = total_supply
            .safe_mul(&gamma)?
            .safe_div(&Decimal::ONE.safe_sub(&gamma)?)?;
        Ok(truncate(lp, 0))
    }

    fn bootstrap(&self, deposit: &Deposit) -> Result<LiquidityQuote, AmmError> {
        if deposit.quote_amount.is_zero() {
            return Err(AmmError::InsufficientQty("quoteTokenAmount"));
        }
        if deposit.base_amount.is_zero() {
            return Err(AmmError::InsufficientQty("baseTokenAmount"));
        }
        let root = deposit
            .quote_amount
            .safe_mul(&deposit.base_amount)?
            .safe_sqrt()?;
        let minted = truncate(root, self.config.lp_token_decimals());
        debug!(entry = %EntryKind::Bootstrap, %minted, "liquidity priced");
        Ok(LiquidityQuote::new(
            EntryKind::Bootstrap,
            Decay::None,
            deposit.base_amount,
            deposit.quote_amount,
            Decimal::ZERO,
            Decimal::ZERO,
            minted,
        ))
    }

    fn double_asset_entry(&self, deposit: &Deposit) -> Result<LiquidityQuote, AmmError> {
        let quote_reserve = deposit.reserves.quote();
        let base_reserve = deposit.reserves.base();
        if deposit.quote_amount.is_zero() {
            return Err(AmmError::InsufficientQty("quoteTokenAmount"));
        }
        ensure_liquidity(&[(quote_reserve, "quoteTokenReserveQty")])?;
        if deposit.base_amount.is_zero() && !base_reserve.is_zero() {
            return Err(AmmError::InsufficientQty("baseTokenAmount"));
        }

        let leg = ProRataLeg::price(
            deposit.quote_amount,
            deposit.base_amount,
            quote_reserve,
            base_reserve,
            deposit.total_supply,
        )?;
        let minted = truncate(leg.lp, self.config.lp_token_decimals());
        debug!(entry = %EntryKind::DoubleAsset, %minted, "liquidity priced");
        Ok(LiquidityQuote::new(
            EntryKind::DoubleAsset,
            Decay::None,
            leg.base_used,
            leg.quote_used,
            Decimal::ZERO,
            leg.lp,
            minted,
        ))
    }

    fn decay_entry(
        &self,
        deposit: &Deposit,
        decay: Decay,
        internal: &InternalBalances,
    ) -> Result<LiquidityQuote, AmmError> {
        let omega = internal.omega()?;
        let cap = decay.removal_cap(omega)?;
        let is_alpha = matches!(decay, Decay::Alpha(_));

        let (contribution, reserve_on_side, arg) = if is_alpha {
            (deposit.quote_amount, deposit.reserves.quote(), "quoteTokenAmount")
        } else {
            (deposit.base_amount, deposit.reserves.base(), "baseTokenAmount")
        };
        if contribution.is_zero() {
            debug!(%decay, "decayed pool received nothing on the decayed side");
            return Err(AmmError::InsufficientQty(arg));
        }

        let used = contribution.min(cap);
        let reserve_after = reserve_on_side.safe_add(&used)?;
        let decay_change = decay.decay_change(used, omega)?;
        let sae = self.single_asset_lp(
            deposit.total_supply,
            used,
            reserve_after,
            decay_change,
            decay.amount(),
        )?;
        let (quote_in_sae, base_in_sae) = if is_alpha {
            (used, Decimal::ZERO)
        } else {
            (Decimal::ZERO, used)
        };

        let single_asset = || {
            debug!(entry = %EntryKind::SingleAsset, %decay, %used, %cap, minted = %sae, "liquidity priced");
            LiquidityQuote::new(
                EntryKind::SingleAsset,
                decay,
                base_in_sae,
                quote_in_sae,
                sae,
                Decimal::ZERO,
                sae,
            )
        };
        if contribution <= cap {
            return Ok(single_asset());
        }

        let supply_after_sae = deposit.total_supply.safe_add(&sae)?;
        let quote_reserve_after_sae = deposit.reserves.quote().safe_add(&quote_in_sae)?;
        let base_reserve_after_sae = deposit.reserves.base().safe_add(&base_in_sae)?;
        let remaining_quote = deposit.quote_amount.safe_sub(&quote_in_sae)?;
        let remaining_base = deposit.base_amount.safe_sub(&base_in_sae)?;
        ensure_liquidity(&[(quote_reserve_after_sae, "quoteTokenReserveQty")])?;

        let leg = ProRataLeg::price(
            remaining_quote,
            remaining_base,
            quote_reserve_after_sae,
            base_reserve_after_sae,
            supply_after_sae,
        )?;
        if leg.lp.is_zero() {
            // excess on the decayed side with nothing to pair it against
            return Ok(single_asset());
        }
        let dae = leg.lp;
        let minted = truncate(
            dae.safe_add(&supply_after_sae)?,
            self.config.lp_token_decimals(),
        )
        .safe_sub(&deposit.total_supply)?;

        debug!(
            entry = %EntryKind::PartialSingleAsset,
            %decay,
            %used,
            %cap,
            %sae,
            %dae,
            %minted,
            "liquidity priced"
        );
        Ok(LiquidityQuote::new(
            EntryKind::PartialSingleAsset,
            decay,
            base_in_sae.safe_add(&leg.base_used)?,
            quote_in_sae.safe_add(&leg.quote_used)?,
            sae,
            dae,
            minted,
        ))
    }
}

impl LiquidityMath for PricingEngine {
    fn calculate_lp_token_amount(
        &self,
        quote_token_amount: impl Numeric,
        base_token_amount: impl Numeric,
        quote_token_reserve_qty: impl Numeric,
        base_token_reserve_qty: impl Numeric,
        slippage_percent: impl Numeric,
        total_supply_of_liquidity_tokens: impl Numeric,
        internal_balances: &InternalBalances,
    ) -> Result<Decimal, AmmError> {
        self.quote_liquidity(
            quote_token_amount,
            base_token_amount,
            quote_token_reserve_qty,
            base_token_reserve_qty,
            slippage_percent,
            total_supply_of_liquidity_tokens,
            internal_balances,
        )
        .map(|quote| quote.minted())
    }

    fn quote_liquidity(
        &self,
        quote_token_amount: impl Numeric,
        base_token_amount: impl Numeric,
        quote_token_reserve_qty: impl Numeric,
        base_token_reserve_qty: impl Numeric,
        slippage_percent: impl Numeric,
        total_supply_of_liquidity_tokens: impl Numeric,
        internal_balances: &InternalBalances,
    ) -> Result<LiquidityQuote, AmmError> {
        let quote_amount = quote_token_amount.to_decimal("quoteTokenAmount")?;
        let base_amount = base_token_amount.to_decimal("baseTokenAmount")?;
        let quote_reserve = quote_token_reserve_qty.to_decimal("quoteTokenReserveQty")?;
        let base_reserve = base_token_reserve_qty.to_decimal("baseTokenReserveQty")?;
        let slippage = slippage_percent.to_decimal("slippagePercent")?;
        let total_supply =
            total_supply_of_liquidity_tokens.to_decimal("totalSupplyOfLiquidityTokens")?;

        ensure_non_negative(&[
            (quote_amount, "quoteTokenAmount"),
            (base_amount, "baseTokenAmount"),
            (quote_reserve, "quoteTokenReserveQty"),
            (base_reserve, "baseTokenReserveQty"),
            (slippage, "slippagePercent"),
            (total_supply, "totalSupplyOfLiquidityTokens"),
        ])?;
        internal_balances.validate()?;

        let deposit = Deposit {
            quote_amount,
            base_amount,
            reserves: ReservePair::new(base_reserve, quote_reserve)?,
            total_supply,
        };

        if total_supply.is_zero() {
            return self.bootstrap(&deposit);
        }
        match Decay::detect(&deposit.reserves, internal_balances)? {
            Decay::None => self.double_asset_entry(&deposit),
            decay => self.decay_entry(&deposit, decay, internal_balances),
        }
    }

    fn calculate_liquidity_token_qty_for_double_asset_entry(
        &self,
        total_supply_of_liquidity_tokens: impl Numeric,
        quote_token_qty: impl Numeric,
        quote_token_reserve_qty: impl Numeric,
    ) -> Result<Decimal, AmmError> {
        let supply = total_supply_of_liquidity_tokens.to_decimal("totalSupplyOfLiquidityTokens")?;
        let quote = quote_token_qty.to_decimal("quoteTokenQty")?;
        let reserve = quote_token_reserve_qty.to_decimal("quoteTokenReserveQty")?;
        ensure_non_negative(&[
            (supply, "totalSupplyOfLiquidityTokens"),
            (quote, "quoteTokenQty"),
            (reserve, "quoteTokenReserveQty"),
        ])?;
        ensure_liquidity(&[(reserve, "quoteTokenReserveQty")])?;
        Self::double_asset_lp(supply, quote, reserve)
    }

    fn calculate_liquidity_token_qty_for_single_asset_entry(
        &self,
        total_supply_of_liquidity_tokens: impl Numeric,
        token_qty_a_to_add: impl Numeric,
        token_a_reserve_qty_after_transaction: impl Numeric,
        token_b_decay_change: impl Numeric,
        token_b_decay: impl Numeric,
    ) -> Result<Decimal, AmmError> {
        let supply = total_supply_of_liquidity_tokens.to_decimal("totalSupplyOfLiquidityTokens")?;
        let qty = token_qty_a_to_add.to_decimal("tokenQtyAToAdd")?;
        let reserve_after =
            token_a_reserve_qty_after_transaction.to_decimal("tokenAReserveQtyAfterTransaction")?;
        let decay_change = token_b_decay_change.to_decimal("tokenBDecayChange")?;
        let decay = token_b_decay.to_decimal("tokenBDecay")?;
        ensure_non_negative(&[
            (supply, "totalSupplyOfLiquidityTokens"),
            (qty, "tokenQtyAToAdd"),
            (reserve_after, "tokenAReserveQtyAfterTransaction"),
            (decay_change, "tokenBDecayChange"),
            (decay, "tokenBDecay"),
        ])?;
        ensure_liquidity(&[
            (reserve_after, "tokenAReserveQtyAfterTransaction"),
            (decay, "tokenBDecay"),
        ])?;
        self.single_asset_lp(supply, qty, reserve_after, decay_change, decay)
    }

    fn calculate_token_amounts_from_lp_tokens(
        &self,
        lp_token_qty_to_redeem: impl Numeric,
        slippage_percent: impl Numeric,
        base_token_reserve_qty: impl Numeric,
        quote_token_reserve_qty: impl Numeric,
        total_lp_token_supply: impl Numeric,
    ) -> Result<TokenAmounts, AmmError> {
        redemption::token_amounts_from_lp_tokens(
            lp_token_qty_to_redeem,
            slippage_percent,
            base_token_reserve_qty,
            quote_token_reserve_qty,
            total_lp_token_supply,
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;
    use crate::traits::FromConfig;

    fn engine() -> PricingEngine {
        PricingEngine::default()
    }

    fn internal(base: Decimal, quote: Decimal) -> InternalBalances {
        let Ok(ib) = InternalBalances::from_reserves(base, quote) else {
            panic!("valid internal balances");
        };
        ib
    }

    // -- Bootstrap ----------------------------------------------------------

    #[test]
    fn bootstrap_is_geometric_mean() {
        let ib = InternalBalances::default();
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(100),
                dec!(100),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                &ib
            ),
            Ok(dec!(100))
        );
    }

    #[test]
    fn bootstrap_ignores_slippage() {
        let ib = InternalBalances::default();
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(100),
                dec!(100),
                dec!(0),
                dec!(0),
                dec!(2),
                dec!(0),
                &ib
            ),
            Ok(dec!(100))
        );
    }

    #[test]
    fn bootstrap_uneven_amounts_truncated() {
        let ib = InternalBalances::default();
        let Ok(minted) = engine().calculate_lp_token_amount(
            dec!(2),
            dec!(1),
            dec!(0),
            dec!(0),
            dec!(0),
            dec!(0),
            &ib,
        ) else {
            panic!("bootstrap priced");
        };
        // √2 = 1.41421356237309504880...
        assert_eq!(minted, dec!(1.414213562373095048));
    }

    #[test]
    fn bootstrap_requires_both_sides() {
        let ib = InternalBalances::default();
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(0),
                dec!(100),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                &ib
            ),
            Err(AmmError::InsufficientQty("quoteTokenAmount"))
        );
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(100),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                &ib
            ),
            Err(AmmError::InsufficientQty("baseTokenAmount"))
        );
    }

    // -- Double asset entry -------------------------------------------------

    #[test]
    fn dae_without_decay() {
        let ib = internal(dec!(100), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(100),
            dec!(100),
            dec!(100),
            dec!(100),
            dec!(0),
            dec!(100),
            &ib,
        ) else {
            panic!("dae priced");
        };
        assert_eq!(q.entry(), EntryKind::DoubleAsset);
        assert_eq!(q.decay(), Decay::None);
        assert_eq!(q.minted(), dec!(100));
        assert_eq!(q.base_token_used(), dec!(100));
    }

    #[test]
    fn dae_slippage_has_no_effect() {
        let ib = internal(dec!(100), dec!(100));
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(100),
                dec!(5),
                dec!(100),
                &ib
            ),
            Ok(dec!(100))
        );
    }

    #[test]
    fn dae_limited_by_base_offer() {
        let ib = internal(dec!(200), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(10),
            dec!(5),
            dec!(100),
            dec!(200),
            dec!(0),
            dec!(50),
            &ib,
        ) else {
            panic!("dae priced");
        };
        // 10 quote needs 20 base; 5 base covers 5 / 200 of the pool
        assert_eq!(q.minted(), dec!(1.25));
        assert_eq!(q.base_token_used(), dec!(5));
        assert_eq!(q.quote_token_used(), dec!(2.5));
    }

    #[test]
    fn dae_limited_by_quote_offer() {
        let ib = internal(dec!(200), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(10),
            dec!(50),
            dec!(100),
            dec!(200),
            dec!(0),
            dec!(50),
            &ib,
        ) else {
            panic!("dae priced");
        };
        assert_eq!(q.minted(), dec!(5));
        assert_eq!(q.base_token_used(), dec!(20));
        assert_eq!(q.quote_token_used(), dec!(10));
    }

    #[test]
    fn dae_zero_base_contribution() {
        let ib = internal(dec!(100), dec!(100));
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(10),
                dec!(0),
                dec!(100),
                dec!(100),
                dec!(0),
                dec!(100),
                &ib
            ),
            Err(AmmError::InsufficientQty("baseTokenAmount"))
        );
    }

    #[test]
    fn dae_zero_quote_reserve() {
        let ib = internal(dec!(0), dec!(0));
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(10),
                dec!(10),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(100),
                &ib
            ),
            Err(AmmError::InsufficientLiquidity("quoteTokenReserveQty"))
        );
    }

    #[test]
    fn dae_zero_quote_contribution() {
        let ib = internal(dec!(100), dec!(100));
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(0),
                dec!(10),
                dec!(100),
                dec!(100),
                dec!(0),
                dec!(100),
                &ib
            ),
            Err(AmmError::InsufficientQty("quoteTokenAmount"))
        );
    }

    #[test]
    fn dae_primitive() {
        assert_eq!(
            engine().calculate_liquidity_token_qty_for_double_asset_entry(
                dec!(50),
                dec!(15),
                dec!(50)
            ),
            Ok(dec!(15))
        );
        assert_eq!(
            engine().calculate_liquidity_token_qty_for_double_asset_entry(
                dec!(50),
                dec!(15),
                dec!(0)
            ),
            Err(AmmError::InsufficientLiquidity("quoteTokenReserveQty"))
        );
    }

    // -- Single asset entry: alpha decay -------------------------------------

    #[test]
    fn alpha_sae() {
        let ib = internal(dec!(100), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(50),
            dec!(0),
            dec!(100),
            dec!(150),
            dec!(0),
            dec!(100),
            &ib,
        ) else {
            panic!("sae priced");
        };
        // gamma = trunc18(50 / 150 * 50 / 50 / 2) = 0.166666666666666666
        // floor(100 * gamma / (1 - gamma)) = 19
        assert_eq!(q.entry(), EntryKind::SingleAsset);
        assert_eq!(q.decay(), Decay::Alpha(dec!(50)));
        assert_eq!(q.quote_token_used(), dec!(50));
        assert_eq!(q.base_token_used(), dec!(0));
        assert_eq!(q.minted(), dec!(19));
    }

    #[test]
    fn alpha_sae_below_cap() {
        let ib = internal(dec!(100), dec!(100));
        // used 25, post reserve 125, decay change 25
        // gamma = trunc18(25 / 125 * 25 / 50 / 2) = 0.05
        // floor(100 * 0.05 / 0.95) = 5
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(25),
                dec!(0),
                dec!(100),
                dec!(150),
                dec!(0),
                dec!(100),
                &ib
            ),
            Ok(dec!(5))
        );
    }

    #[test]
    fn alpha_cap_follows_internal_ratio() {
        // iOmega = 200 / 100 = 2, alpha decay 50 base ⇒ quote cap 100
        let ib = internal(dec!(100), dec!(200));
        let Ok(q) = engine().quote_liquidity(
            dec!(100),
            dec!(0),
            dec!(200),
            dec!(150),
            dec!(0),
            dec!(1000),
            &ib,
        ) else {
            panic!("sae priced");
        };
        // decay change = 100 / 2 = 50, gamma = trunc18(100 / 300 * 50 / 50 / 2)
        assert_eq!(q.entry(), EntryKind::SingleAsset);
        assert_eq!(q.quote_token_used(), dec!(100));
        assert_eq!(q.minted(), dec!(199));
    }

    #[test]
    fn alpha_requires_quote() {
        let ib = internal(dec!(100), dec!(100));
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(0),
                dec!(50),
                dec!(100),
                dec!(150),
                dec!(0),
                dec!(100),
                &ib
            ),
            Err(AmmError::InsufficientQty("quoteTokenAmount"))
        );
    }

    // -- Single asset entry: beta decay --------------------------------------

    #[test]
    fn beta_sae() {
        let ib = internal(dec!(100), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(0),
            dec!(50),
            dec!(100),
            dec!(50),
            dec!(0),
            dec!(100),
            &ib,
        ) else {
            panic!("sae priced");
        };
        // gamma = 50 / 100 * 50 / 50 / 2 = 0.25, floor(100 * 0.25 / 0.75) = 33
        assert_eq!(q.entry(), EntryKind::SingleAsset);
        assert_eq!(q.decay(), Decay::Beta(dec!(50)));
        assert_eq!(q.base_token_used(), dec!(50));
        assert_eq!(q.minted(), dec!(33));
    }

    #[test]
    fn beta_requires_base() {
        let ib = internal(dec!(100), dec!(100));
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(50),
                dec!(0),
                dec!(100),
                dec!(50),
                dec!(0),
                dec!(100),
                &ib
            ),
            Err(AmmError::InsufficientQty("baseTokenAmount"))
        );
    }

    // -- Partial single asset entry -----------------------------------------

    #[test]
    fn alpha_partial() {
        let ib = internal(dec!(100), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(75),
            dec!(25),
            dec!(100),
            dec!(150),
            dec!(0),
            dec!(100),
            &ib,
        ) else {
            panic!("partial priced");
        };
        // sae 19 → supply 119, quote reserve 150
        // dae = 25 / 150 * 119, minted = trunc18(dae + 119) - 100
        assert_eq!(q.entry(), EntryKind::PartialSingleAsset);
        assert_eq!(q.sae_lp(), dec!(19));
        assert_eq!(q.minted(), dec!(38.833333333333333333));
        assert_eq!(q.quote_token_used(), dec!(75));
    }

    #[test]
    fn beta_partial() {
        let ib = internal(dec!(100), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(100),
            dec!(150),
            dec!(100),
            dec!(50),
            dec!(0),
            dec!(100),
            &ib,
        ) else {
            panic!("partial priced");
        };
        // sae 33 → supply 133; dae = 100 / 100 * 133 = 133; minted = 266 - 100
        assert_eq!(q.entry(), EntryKind::PartialSingleAsset);
        assert_eq!(q.sae_lp(), dec!(33));
        assert_eq!(q.dae_lp(), dec!(133));
        assert_eq!(q.minted(), dec!(166));
        assert_eq!(q.base_token_used(), dec!(150));
    }

    #[test]
    fn partial_with_slippage_matches_zero_slippage() {
        let ib = internal(dec!(100), dec!(100));
        let a = engine().calculate_lp_token_amount(
            dec!(75),
            dec!(25),
            dec!(100),
            dec!(150),
            dec!(0),
            dec!(100),
            &ib,
        );
        let b = engine().calculate_lp_token_amount(
            dec!(75),
            dec!(25),
            dec!(100),
            dec!(150),
            dec!(3),
            dec!(100),
            &ib,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn alpha_excess_without_base_is_not_minted() {
        let ib = internal(dec!(100), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(75),
            dec!(0),
            dec!(100),
            dec!(150),
            dec!(0),
            dec!(100),
            &ib,
        ) else {
            panic!("deposit priced");
        };
        assert_eq!(q.entry(), EntryKind::SingleAsset);
        assert_eq!(q.quote_token_used(), dec!(50));
        assert_eq!(q.dae_lp(), dec!(0));
        assert_eq!(q.minted(), dec!(19));
    }

    #[test]
    fn alpha_partial_limited_by_base() {
        let ib = internal(dec!(100), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(75),
            dec!(15),
            dec!(100),
            dec!(150),
            dec!(0),
            dec!(100),
            &ib,
        ) else {
            panic!("partial priced");
        };
        // after the 19 LP single-asset leg: supply 119, reserves 150 / 150
        // 15 base covers 15 / 150 of the pool, pairing 15 of the 25 quote left
        assert_eq!(q.entry(), EntryKind::PartialSingleAsset);
        assert_eq!(q.dae_lp(), dec!(15) / dec!(150) * dec!(119));
        assert_eq!(q.minted(), dec!(30.9));
        assert_eq!(q.base_token_used(), dec!(15));
        assert_eq!(q.quote_token_used(), dec!(65));
    }

    #[test]
    fn beta_excess_without_quote_is_not_minted() {
        let ib = internal(dec!(100), dec!(100));
        let Ok(q) = engine().quote_liquidity(
            dec!(0),
            dec!(150),
            dec!(100),
            dec!(50),
            dec!(0),
            dec!(100),
            &ib,
        ) else {
            panic!("deposit priced");
        };
        assert_eq!(q.entry(), EntryKind::SingleAsset);
        assert_eq!(q.base_token_used(), dec!(50));
        assert_eq!(q.minted(), dec!(33));
    }

    // -- SAE primitive ------------------------------------------------------

    #[test]
    fn sae_primitive_matches_state_machine() {
        assert_eq!(
            engine().calculate_liquidity_token_qty_for_single_asset_entry(
                dec!(100),
                dec!(50),
                dec!(150),
                dec!(50),
                dec!(50)
            ),
            Ok(dec!(19))
        );
    }

    #[test]
    fn sae_primitive_zero_decay() {
        assert_eq!(
            engine().calculate_liquidity_token_qty_for_single_asset_entry(
                dec!(100),
                dec!(50),
                dec!(150),
                dec!(50),
                dec!(0)
            ),
            Err(AmmError::InsufficientLiquidity("tokenBDecay"))
        );
    }

    #[test]
    fn sae_primitive_gamma_at_one() {
        assert!(matches!(
            engine().calculate_liquidity_token_qty_for_single_asset_entry(
                dec!(100),
                dec!(10),
                dec!(10),
                dec!(20),
                dec!(10)
            ),
            Err(AmmError::InsufficientLiquidity(_))
        ));
    }

    #[test]
    fn gamma_scale_from_config() {
        let Ok(cfg) = PricingConfig::new(18, 1, 0) else {
            panic!("valid config");
        };
        let Ok(engine) = PricingEngine::from_config(&cfg) else {
            panic!("engine created");
        };
        // gamma = trunc1(0.1666…) = 0.1, floor(100 * 0.1 / 0.9) = 11
        assert_eq!(
            engine.calculate_liquidity_token_qty_for_single_asset_entry(
                dec!(100),
                dec!(50),
                dec!(150),
                dec!(50),
                dec!(50)
            ),
            Ok(dec!(11))
        );
    }

    // -- Validation ---------------------------------------------------------

    #[test]
    fn negative_and_nan_inputs() {
        let ib = InternalBalances::default();
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(-1),
                dec!(100),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                &ib
            ),
            Err(AmmError::NegativeInput("quoteTokenAmount"))
        );
        assert_eq!(
            engine().calculate_lp_token_amount(
                None::<Decimal>,
                dec!(100),
                dec!(0),
                dec!(0),
                dec!(0),
                dec!(0),
                &ib
            ),
            Err(AmmError::NotANumber("quoteTokenAmount"))
        );
        assert_eq!(
            engine().calculate_lp_token_amount(
                dec!(1),
                dec!(100),
                dec!(0),
                dec!(0),
                dec!(-0.1),
                dec!(0),
                &ib
            ),
            Err(AmmError::NegativeInput("slippagePercent"))
        );
    }

    #[test]
    fn decayed_pool_with_empty_internal_balances() {
        let ib = InternalBalances::default();
        assert!(matches!(
            engine().calculate_lp_token_amount(
                dec!(10),
                dec!(10),
                dec!(100),
                dec!(100),
                dec!(0),
                dec!(100),
                &ib
            ),
            Err(AmmError::InsufficientLiquidity(_))
        ));
    }
}

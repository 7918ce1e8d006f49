//! Property-based tests using `proptest` for pricing invariants.
//!
//! 1. **Slippage monotonicity**: more tolerance never raises the guard.
//! 2. **Ratio exactness**: `calculate_qty` is `a × c / b`.
//! 3. **Swap bound**: a swap never pays out the whole opposite reserve.
//! 4. **Redemption inverse**: zero-slippage redemption is pro rata.
//! 5. **No over-minting**: a double-asset deposit mints at most its share.
//! 6. **Decay entry monotonicity**: a larger single-sided deposit mints at
//!    least as much.
//! 7. **Error position independence**: a bad value is reported by name
//!    wherever it sits.

#![allow(clippy::panic)]

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::PricingEngine;
use crate::domain::InternalBalances;
use crate::error::AmmError;
use crate::traits::{LiquidityMath, SwapMath};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn reserve_strategy() -> impl Strategy<Value = Decimal> {
    (1_000u64..=10_000_000u64).prop_map(Decimal::from)
}

fn qty_strategy() -> impl Strategy<Value = Decimal> {
    (1u64..=100_000u64).prop_map(Decimal::from)
}

/// Fees up to 10%.
fn fee_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=1_000u32).prop_map(Decimal::from)
}

/// Slippage in tenths of a percent, up to 50%.
fn slippage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=500i64).prop_map(|v| Decimal::new(v, 1))
}

fn engine() -> PricingEngine {
    PricingEngine::default()
}

// ---------------------------------------------------------------------------
// Swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_slippage_monotonic(
        qty in qty_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        s1 in slippage_strategy(),
        s2 in slippage_strategy(),
    ) {
        let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        let Ok(loose) = engine().calculate_output_amount_less_fees(qty, ra, rb, hi, fee) else {
            return Ok(());
        };
        let Ok(tight) = engine().calculate_output_amount_less_fees(qty, ra, rb, lo, fee) else {
            return Ok(());
        };
        prop_assert!(loose <= tight, "slippage {} gave {} > {} at {}", hi, loose, tight, lo);
    }

    #[test]
    fn prop_calculate_qty_is_ratio(
        a in qty_strategy(),
        b in reserve_strategy(),
        c in reserve_strategy(),
    ) {
        prop_assert_eq!(engine().calculate_qty(a, b, c), Ok(a * c / b));
    }

    #[test]
    fn prop_swap_output_below_reserve(
        qty in (1u64..=1_000_000_000u64).prop_map(Decimal::from),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let Ok(out) = engine().calculate_qty_to_return_after_fees(qty, ra, rb, fee) else {
            return Ok(());
        };
        prop_assert!(out >= Decimal::ZERO);
        prop_assert!(out < rb, "output {} reached reserve {}", out, rb);
    }
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_redemption_is_pro_rata(
        base in reserve_strategy(),
        quote in reserve_strategy(),
        supply in reserve_strategy(),
        share in 0u32..=100u32,
    ) {
        let lp = supply * Decimal::from(share) / Decimal::from(100u32);
        let Ok(amounts) =
            engine().calculate_token_amounts_from_lp_tokens(lp, Decimal::ZERO, base, quote, supply)
        else {
            panic!("redemption within supply is priced");
        };
        prop_assert_eq!(amounts.base_token_received(), base * lp / supply);
        prop_assert_eq!(amounts.quote_token_received(), quote * lp / supply);
    }

    #[test]
    fn prop_full_redemption_returns_reserves(
        base in reserve_strategy(),
        quote in reserve_strategy(),
        supply in reserve_strategy(),
    ) {
        let Ok(amounts) = engine()
            .calculate_token_amounts_from_lp_tokens(supply, Decimal::ZERO, base, quote, supply)
        else {
            panic!("full redemption is priced");
        };
        prop_assert_eq!(amounts.base_token_received(), base);
        prop_assert_eq!(amounts.quote_token_received(), quote);
    }

    #[test]
    fn prop_no_decay_deposit_never_over_mints(
        base in reserve_strategy(),
        quote in reserve_strategy(),
        supply in reserve_strategy(),
        quote_in in qty_strategy(),
        base_in in qty_strategy(),
    ) {
        let Ok(internal) = InternalBalances::from_reserves(base, quote) else {
            panic!("valid internal balances");
        };
        let Ok(minted) = engine().calculate_lp_token_amount(
            quote_in, base_in, quote, base, Decimal::ZERO, supply, &internal,
        ) else {
            panic!("double-asset deposit is priced");
        };
        prop_assert!(minted <= quote_in / quote * supply);
        prop_assert!(minted <= base_in / base * supply);
    }

    #[test]
    fn prop_alpha_entry_monotonic(
        reserve in reserve_strategy(),
        rebase_pct in 1u32..=100u32,
        q1 in qty_strategy(),
        q2 in qty_strategy(),
    ) {
        let Ok(internal) = InternalBalances::from_reserves(reserve, reserve) else {
            panic!("valid internal balances");
        };
        let actual_base = reserve + reserve * Decimal::from(rebase_pct) / Decimal::from(100u32);
        let (small, large) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
        let mint = |q: Decimal| {
            engine().calculate_lp_token_amount(
                q, Decimal::ZERO, reserve, actual_base, Decimal::ZERO, reserve, &internal,
            )
        };
        let (Ok(a), Ok(b)) = (mint(small), mint(large)) else {
            return Ok(());
        };
        prop_assert!(a <= b, "{} quote minted {} but {} minted {}", small, a, large, b);
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

const SWAP_ARGS: [&str; 5] = [
    "tokenSwapQty",
    "reserveABefore",
    "reserveBBefore",
    "slippagePercent",
    "feeInBasisPoints",
];
const QTY_ARGS: [&str; 3] = ["tokenAQty", "tokenAReserveQty", "tokenBReserveQty"];
const RATE_ARGS: [&str; 2] = ["reserveA", "reserveB"];
const FEE_ARGS: [&str; 2] = ["feeInBasisPoints", "swapAmount"];
const REDEEM_ARGS: [&str; 5] = [
    "lpTokenQtyToRedeem",
    "slippagePercent",
    "baseTokenReserveQty",
    "quoteTokenReserveQty",
    "totalLPTokenSupply",
];

/// Valid arguments with the one at `position` replaced by `bad`.
fn args_with<const N: usize>(
    valid: [u32; N],
    position: usize,
    bad: Option<Decimal>,
) -> [Option<Decimal>; N] {
    let mut args = valid.map(|v| Some(Decimal::from(v)));
    args[position] = bad;
    args
}

fn swap_args_with(position: usize, bad: Option<Decimal>) -> [Option<Decimal>; 5] {
    args_with([10, 1_000, 1_000, 1, 30], position, bad)
}

fn redeem_args_with(position: usize, bad: Option<Decimal>) -> [Option<Decimal>; 5] {
    args_with([10, 1, 1_000, 1_000, 100], position, bad)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_nan_reported_at_any_position(position in 0usize..5) {
        let [q, ra, rb, s, f] = swap_args_with(position, None);
        prop_assert_eq!(
            engine().calculate_output_amount_less_fees(q, ra, rb, s, f),
            Err(AmmError::NotANumber(SWAP_ARGS[position]))
        );
    }

    #[test]
    fn prop_negative_reported_at_any_position(
        position in 0usize..5,
        magnitude in 1u32..=1_000u32,
    ) {
        let [q, ra, rb, s, f] = swap_args_with(position, Some(-Decimal::from(magnitude)));
        prop_assert_eq!(
            engine().calculate_output_amount_less_fees(q, ra, rb, s, f),
            Err(AmmError::NegativeInput(SWAP_ARGS[position]))
        );
    }

    #[test]
    fn prop_qty_errors_at_any_position(
        position in 0usize..3,
        magnitude in 1u32..=1_000u32,
    ) {
        let [a, ra, rb] = args_with([10, 1_000, 2_000], position, None);
        prop_assert_eq!(
            engine().calculate_qty(a, ra, rb),
            Err(AmmError::NotANumber(QTY_ARGS[position]))
        );
        let [a, ra, rb] = args_with([10, 1_000, 2_000], position, Some(-Decimal::from(magnitude)));
        prop_assert_eq!(
            engine().calculate_qty(a, ra, rb),
            Err(AmmError::NegativeInput(QTY_ARGS[position]))
        );
    }

    #[test]
    fn prop_exchange_rate_errors_at_any_position(
        position in 0usize..2,
        magnitude in 1u32..=1_000u32,
    ) {
        let [a, b] = args_with([1_000, 2_000], position, None);
        prop_assert_eq!(
            engine().calculate_exchange_rate(a, b),
            Err(AmmError::NotANumber(RATE_ARGS[position]))
        );
        let [a, b] = args_with([1_000, 2_000], position, Some(-Decimal::from(magnitude)));
        prop_assert_eq!(
            engine().calculate_exchange_rate(a, b),
            Err(AmmError::NegativeInput(RATE_ARGS[position]))
        );
    }

    #[test]
    fn prop_fee_errors_at_any_position(
        position in 0usize..2,
        magnitude in 1u32..=1_000u32,
    ) {
        let [f, amount] = args_with([30, 5_000], position, None);
        prop_assert_eq!(
            engine().calculate_fees(f, amount),
            Err(AmmError::NotANumber(FEE_ARGS[position]))
        );
        let [f, amount] = args_with([30, 5_000], position, Some(-Decimal::from(magnitude)));
        prop_assert_eq!(
            engine().calculate_fees(f, amount),
            Err(AmmError::NegativeInput(FEE_ARGS[position]))
        );
    }

    #[test]
    fn prop_redemption_errors_at_any_position(
        position in 0usize..5,
        magnitude in 1u32..=1_000u32,
    ) {
        let [lp, s, br, qr, t] = redeem_args_with(position, None);
        prop_assert_eq!(
            engine().calculate_token_amounts_from_lp_tokens(lp, s, br, qr, t),
            Err(AmmError::NotANumber(REDEEM_ARGS[position]))
        );
        let [lp, s, br, qr, t] = redeem_args_with(position, Some(-Decimal::from(magnitude)));
        prop_assert_eq!(
            engine().calculate_token_amounts_from_lp_tokens(lp, s, br, qr, t),
            Err(AmmError::NegativeInput(REDEEM_ARGS[position]))
        );
    }

    #[test]
    fn prop_nan_outranks_negative_in_redemption(
        nan_at in 0usize..5,
        negative_at in 0usize..5,
    ) {
        if nan_at == negative_at {
            return Ok(());
        }
        let mut args = redeem_args_with(nan_at, None);
        args[negative_at] = Some(-Decimal::ONE);
        let [lp, s, br, qr, t] = args;
        prop_assert_eq!(
            engine().calculate_token_amounts_from_lp_tokens(lp, s, br, qr, t),
            Err(AmmError::NotANumber(REDEEM_ARGS[nan_at]))
        );
    }
}

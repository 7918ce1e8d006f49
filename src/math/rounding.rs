//! Truncation of decimal results to a fixed scale.
//!
//! [`truncate`] is the single place where the engine discards precision.
//! Every cut goes toward zero, against the caller:
//!
//! | Quantity | Scale |
//! |----------|-------|
//! | Swap output | `swap_output_decimals` |
//! | Liquidity tokens minted | `lp_token_decimals`, 0 for a single-asset leg |
//! | Gamma | `gamma_decimals` |
//!
//! # Examples
//!
//! ```
//! use rebase_amm::math::truncate;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(truncate(dec!(1663.33), 0), dec!(1663));
//! assert_eq!(truncate(dec!(0.123456789), 4), dec!(0.1234));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Largest scale a [`Decimal`] can carry.
pub const MAX_SCALE: u32 = 28;

/// Truncates `value` to `dp` fractional digits.
///
/// Values that already have `dp` or fewer fractional digits are returned
/// unchanged.  `dp` above [`MAX_SCALE`] is clamped.
#[inline]
#[must_use]
pub fn truncate(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp.min(MAX_SCALE), RoundingStrategy::ToZero)
}

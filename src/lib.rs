//! # Rebase AMM
//!
//! Off-chain pricing engine for a constant-product AMM whose tokens may
//! rebase: change total supply outside of any swap or liquidity action.
//!
//! The engine reproduces, to the last rounding step, the amounts a matching
//! on-chain contract produces for swaps, liquidity deposits and liquidity
//! redemptions, so a caller can set minimum-output guards before submitting
//! a transaction.  Every function is pure: reserves, supply and the pool's
//! internal balances are passed in on each call and nothing is cached.
//!
//! All arithmetic runs on [`rust_decimal::Decimal`] with checked
//! operations.  Arguments are accepted as any [`Numeric`](math::Numeric)
//! value (`Decimal`, integers, floats, strings, `Option`s) and rejected
//! with a coded [`AmmError`](error::AmmError) when absent, non-numeric or
//! negative.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rebase-amm = "0.1"
//! ```
//!
//! ## Price a swap
//!
//! ```rust
//! use rebase_amm::engine;
//! use rust_decimal_macros::dec;
//!
//! // Sell 50 A into a 100 A / 5000 B pool at 30 bp, accepting 1% slippage.
//! let Ok(quote) = engine::quote_swap(dec!(50), dec!(100), dec!(5000), dec!(1), 30u32) else {
//!     unreachable!()
//! };
//! assert_eq!(quote.amount_out(), dec!(1663));
//! assert_eq!(quote.min_amount_out(), dec!(1646.37));
//! ```
//!
//! ## Price a deposit into a rebased pool
//!
//! ```rust
//! use rebase_amm::domain::{Decay, EntryKind, InternalBalances};
//! use rebase_amm::engine;
//! use rust_decimal_macros::dec;
//!
//! // Internal balances last saw 100 / 100; the base token rebased to 150.
//! let Ok(internal) = InternalBalances::from_reserves(dec!(100), dec!(100)) else {
//!     unreachable!()
//! };
//! let Ok(quote) = engine::quote_liquidity(
//!     dec!(75), dec!(25), dec!(100), dec!(150), dec!(0), dec!(100), &internal,
//! ) else {
//!     unreachable!()
//! };
//! assert_eq!(quote.decay(), Decay::Alpha(dec!(50)));
//! assert_eq!(quote.entry(), EntryKind::PartialSingleAsset);
//! assert_eq!(quote.minted(), dec!(38.833333333333333333));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  free functions in `engine`, or a configured PricingEngine
//! └──────┬───────┘
//!        │ impl Numeric arguments
//!        ▼
//! ┌──────────────┐
//! │ PricingEngine │  SwapMath + LiquidityMath, rounding scales from PricingConfig
//! └──────┬───────┘
//!        │ validate → classify → price
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  ReservePair, InternalBalances, Decay, SwapQuote, LiquidityQuote, …
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │     Math      │  Numeric coercion, checked Decimal arithmetic, truncation
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`engine`] | [`PricingEngine`](engine::PricingEngine) and a free function per operation |
//! | [`traits`] | [`SwapMath`](traits::SwapMath), [`LiquidityMath`](traits::LiquidityMath), [`FromConfig`](traits::FromConfig) |
//! | [`domain`] | Value types: [`BasisPoints`](domain::BasisPoints), [`Decay`](domain::Decay), [`InternalBalances`](domain::InternalBalances), quotes |
//! | [`config`] | [`PricingConfig`](config::PricingConfig) rounding scales |
//! | [`math`]   | [`Numeric`](math::Numeric) coercion, checked arithmetic, rounding |
//! | [`error`]  | [`AmmError`](error::AmmError) with stable error codes |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod traits;

//! Core trait abstractions for the pricing engine.
//!
//! [`SwapMath`] prices trades, [`LiquidityMath`] prices deposits and
//! redemptions, and [`FromConfig`] builds an engine from its configuration.

mod from_config;
mod liquidity_math;
mod swap_math;

pub use from_config::FromConfig;
pub use liquidity_math::LiquidityMath;
pub use swap_math::SwapMath;

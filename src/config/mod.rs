//! Engine configuration.
//!
//! [`PricingConfig`] is the declarative blueprint for a
//! [`PricingEngine`](crate::engine::PricingEngine): the rounding scales the
//! engine applies when it cuts results.  It deserializes with `serde` so it
//! can live in whatever configuration file the host application reads.

mod pricing;

pub use pricing::{
    PricingConfig, DEFAULT_GAMMA_DECIMALS, DEFAULT_LP_TOKEN_DECIMALS,
    DEFAULT_SWAP_OUTPUT_DECIMALS,
};

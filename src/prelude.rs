//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use rebase_amm::prelude::*;
//! ```

pub use crate::config::PricingConfig;
pub use crate::domain::{
    BasisPoints, Decay, EntryKind, InternalBalances, LiquidityQuote, ReservePair,
    SlippagePercent, SwapQuote, TokenAmounts,
};
pub use crate::engine::PricingEngine;
pub use crate::error::{AmmError, Result};
pub use crate::math::{CheckedArithmetic, Numeric};
pub use crate::traits::{FromConfig, LiquidityMath, SwapMath};

//! Domain value types used throughout the pricing engine.
//!
//! This module contains the value types that model a rebasing AMM:
//! fee rates, slippage tolerances, reserve snapshots, decay, and the
//! quotes the engine produces.  Constructors validate their invariants.

mod basis_points;
mod decay;
mod liquidity_quote;
mod reserves;
mod slippage;
mod swap_quote;
mod token_amounts;

pub use basis_points::{BasisPoints, BASIS_POINTS};
pub use decay::Decay;
pub use liquidity_quote::{EntryKind, LiquidityQuote};
pub use reserves::{InternalBalances, ReservePair};
pub use slippage::SlippagePercent;
pub use swap_quote::SwapQuote;
pub use token_amounts::TokenAmounts;

//! Arithmetic utilities for the pricing engine.
//!
//! This module provides the [`Numeric`] coercion trait through which every
//! engine argument is read, [`CheckedArithmetic`] for overflow-safe
//! decimal operations, and [`truncate`] for fixed-scale rounding.

mod checked;
mod numeric;
mod rounding;

pub use checked::CheckedArithmetic;
pub use numeric::{ensure_non_negative, Numeric};
pub use rounding::{truncate, MAX_SCALE};

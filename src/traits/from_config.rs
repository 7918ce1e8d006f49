//! Generic construction trait for building engine components from configuration.
//!
//! [`FromConfig`] provides a uniform way to turn a declarative config
//! struct into a ready-to-use component.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed component never fails later
//! because of its configuration.
//!
//! ```text
//! PricingConfig ──from_config──▶ PricingEngine
//! ```

use crate::error::AmmError;

/// Generic construction trait for building a component from a configuration.
///
/// # Type Parameters
///
/// - `C`: the configuration type describing the component's immutable
///   parameters.
///
/// # Implementors
///
/// - `impl FromConfig<PricingConfig> for PricingEngine`
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfig`] if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is taken by reference because it may be reused.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidConfig`] if any parameter is out of range.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}

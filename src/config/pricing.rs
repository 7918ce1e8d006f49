//! Configuration for the pricing engine's rounding scales.

use serde::{Deserialize, Serialize};

use crate::error::AmmError;
use crate::math::MAX_SCALE;

/// Fractional digits kept on liquidity-token amounts by default.
pub const DEFAULT_LP_TOKEN_DECIMALS: u32 = 18;
/// Fractional digits kept on gamma by default.
pub const DEFAULT_GAMMA_DECIMALS: u32 = 18;
/// Fractional digits kept on swap outputs by default.
pub const DEFAULT_SWAP_OUTPUT_DECIMALS: u32 = 0;

/// Rounding scales applied by [`PricingEngine`](crate::engine::PricingEngine).
///
/// The defaults mirror an 18-decimal liquidity token and a pool contract
/// that pays whole swap outputs.  All cuts truncate toward zero.
///
/// # Validation
///
/// - Every scale must be at most 28, the largest `Decimal` scale.
///
/// # Examples
///
/// ```
/// use rebase_amm::config::PricingConfig;
///
/// let cfg: PricingConfig = serde_json::from_str(r#"{"lp_token_decimals": 6}"#).unwrap_or_default();
/// assert_eq!(cfg.lp_token_decimals(), 6);
/// assert_eq!(cfg.gamma_decimals(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    lp_token_decimals: u32,
    gamma_decimals: u32,
    swap_output_decimals: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            lp_token_decimals: DEFAULT_LP_TOKEN_DECIMALS,
            gamma_decimals: DEFAULT_GAMMA_DECIMALS,
            swap_output_decimals: DEFAULT_SWAP_OUTPUT_DECIMALS,
        }
    }
}

impl PricingConfig {
    /// Creates a new `PricingConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if any scale exceeds 28.
    pub fn new(
        lp_token_decimals: u32,
        gamma_decimals: u32,
        swap_output_decimals: u32,
    ) -> Result<Self, AmmError> {
        let config = Self {
            lp_token_decimals,
            gamma_decimals,
            swap_output_decimals,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfig`] if any scale exceeds 28.
    pub const fn validate(&self) -> Result<(), AmmError> {
        if self.lp_token_decimals > MAX_SCALE {
            return Err(AmmError::InvalidConfig("lp_token_decimals exceeds 28"));
        }
        if self.gamma_decimals > MAX_SCALE {
            return Err(AmmError::InvalidConfig("gamma_decimals exceeds 28"));
        }
        if self.swap_output_decimals > MAX_SCALE {
            return Err(AmmError::InvalidConfig("swap_output_decimals exceeds 28"));
        }
        Ok(())
    }

    /// Fractional digits kept on minted liquidity tokens.
    #[must_use]
    pub const fn lp_token_decimals(&self) -> u32 {
        self.lp_token_decimals
    }

    /// Fractional digits kept on gamma.
    #[must_use]
    pub const fn gamma_decimals(&self) -> u32 {
        self.gamma_decimals
    }

    /// Fractional digits kept on swap outputs.
    #[must_use]
    pub const fn swap_output_decimals(&self) -> u32 {
        self.swap_output_decimals
    }
}

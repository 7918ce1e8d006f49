//! Token amounts paid out by a liquidity redemption.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Base and quote tokens received for burning liquidity tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmounts {
    base_token_received: Decimal,
    quote_token_received: Decimal,
}

impl TokenAmounts {
    /// Creates a new `TokenAmounts`.
    #[must_use]
    pub const fn new(base_token_received: Decimal, quote_token_received: Decimal) -> Self {
        Self {
            base_token_received,
            quote_token_received,
        }
    }

    /// Base tokens received.
    #[must_use]
    pub const fn base_token_received(&self) -> Decimal {
        self.base_token_received
    }

    /// Quote tokens received.
    #[must_use]
    pub const fn quote_token_received(&self) -> Decimal {
        self.quote_token_received
    }
}

impl fmt::Display for TokenAmounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base={}, quote={}",
            self.base_token_received, self.quote_token_received
        )
    }
}

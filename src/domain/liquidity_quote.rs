//! Breakdown of a liquidity-token issuance.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Decay;

/// How a deposit is classified against the current reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// First deposit into an empty pool; sets the initial price.
    Bootstrap,
    /// Both tokens in the current ratio, no decay present.
    DoubleAsset,
    /// Only the decayed side, at most the amount that cancels the decay.
    SingleAsset,
    /// Decay removal followed by a double-asset entry for the remainder.
    PartialSingleAsset,
}

impl EntryKind {
    /// Returns `true` if the deposit removes decay.
    #[must_use]
    pub const fn removes_decay(&self) -> bool {
        matches!(self, Self::SingleAsset | Self::PartialSingleAsset)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bootstrap => "bootstrap",
            Self::DoubleAsset => "double-asset",
            Self::SingleAsset => "single-asset",
            Self::PartialSingleAsset => "partial single-asset",
        };
        f.write_str(name)
    }
}

/// The full result of pricing a liquidity deposit.
///
/// `minted` is the amount the contract mints; the other fields show how
/// it was reached.  For a [`EntryKind::PartialSingleAsset`] entry,
/// `minted` is `trunc(sae + dae + supply) − supply` and may differ from
/// `sae + dae` in the last fractional digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityQuote {
    entry: EntryKind,
    decay: Decay,
    base_token_used: Decimal,
    quote_token_used: Decimal,
    sae_lp: Decimal,
    dae_lp: Decimal,
    minted: Decimal,
}

impl LiquidityQuote {
    /// Assembles a quote.  Called by the engine once every part is known.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub(crate) const fn new(
        entry: EntryKind,
        decay: Decay,
        base_token_used: Decimal,
        quote_token_used: Decimal,
        sae_lp: Decimal,
        dae_lp: Decimal,
        minted: Decimal,
    ) -> Self {
        Self {
            entry,
            decay,
            base_token_used,
            quote_token_used,
            sae_lp,
            dae_lp,
            minted,
        }
    }

    /// Deposit classification.
    #[must_use]
    pub const fn entry(&self) -> EntryKind {
        self.entry
    }

    /// Decay found in the snapshot.
    #[must_use]
    pub const fn decay(&self) -> Decay {
        self.decay
    }

    /// Base tokens the formula consumed.
    #[must_use]
    pub const fn base_token_used(&self) -> Decimal {
        self.base_token_used
    }

    /// Quote tokens the formula consumed.
    #[must_use]
    pub const fn quote_token_used(&self) -> Decimal {
        self.quote_token_used
    }

    /// Liquidity tokens attributed to decay removal.
    #[must_use]
    pub const fn sae_lp(&self) -> Decimal {
        self.sae_lp
    }

    /// Liquidity tokens attributed to the pro-rata entry.
    #[must_use]
    pub const fn dae_lp(&self) -> Decimal {
        self.dae_lp
    }

    /// Liquidity tokens minted.
    #[must_use]
    pub const fn minted(&self) -> Decimal {
        self.minted
    }
}

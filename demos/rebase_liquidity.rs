//! Walks a pool through a base-token rebase and prices the deposits that
//! bring it back in line with its internal balances.
//!
//! ```text
//! RUST_LOG=rebase_amm=debug cargo run --example rebase_liquidity
//! ```

use rebase_amm::prelude::*;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rebase_liquidity=info,rebase_amm=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let engine = PricingEngine::from_config(&PricingConfig::default())?;
    let internal = InternalBalances::from_reserves(dec!(100), dec!(100))?;
    let supply = dec!(100);

    // Swap against the balanced pool first.
    let swap = engine.quote_swap(dec!(10), dec!(100), dec!(100), dec!(0.5), 30u32)?;
    info!(%swap, "balanced pool swap");

    // Base rebases up 100 → 150: alpha decay, cancelled with quote tokens.
    for quote_in in [dec!(25), dec!(50), dec!(75)] {
        let quote = engine.quote_liquidity(
            quote_in,
            dec!(25),
            dec!(100),
            dec!(150),
            dec!(0),
            supply,
            &internal,
        )?;
        info!(
            decay = %quote.decay(),
            entry = %quote.entry(),
            %quote_in,
            minted = %quote.minted(),
            "alpha decay deposit"
        );
    }

    // Base rebases down 100 → 50: beta decay, cancelled with base tokens.
    for base_in in [dec!(25), dec!(50), dec!(150)] {
        let quote = engine.quote_liquidity(
            dec!(100),
            base_in,
            dec!(100),
            dec!(50),
            dec!(0),
            supply,
            &internal,
        )?;
        info!(
            decay = %quote.decay(),
            entry = %quote.entry(),
            %base_in,
            minted = %quote.minted(),
            "beta decay deposit"
        );
    }

    let amounts =
        engine.calculate_token_amounts_from_lp_tokens(dec!(10), dec!(1), dec!(150), dec!(100), supply)?;
    info!(%amounts, "redeemed 10 liquidity tokens");

    Ok(())
}

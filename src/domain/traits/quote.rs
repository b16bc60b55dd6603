use async_trait::async_trait;

use crate::application::errors::AwakenError;
use crate::domain::entities::{MintAddress, SwapQuote};

/// Quote service trait - abstraction over the swap aggregator API
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Fetch the best-route quote for swapping `amount` (smallest unit) of
    /// the input mint into the output mint.
    ///
    /// An empty route list surfaces as `AwakenError::NoLiquidity`; transport
    /// failures and malformed responses as `AwakenError::QuoteServiceUnavailable`.
    async fn quote(
        &self,
        input_mint: &str,
        output_mint: &MintAddress,
        amount: u64,
        slippage_percent: u32,
    ) -> Result<SwapQuote, AwakenError>;
}

//! The /awaken pipeline - validates a mint, checks it on chain, quotes a swap

use std::sync::Arc;

use crate::application::errors::{AwakenError, BotError};
use crate::application::format::{format_ack, format_quote_reply};
use crate::domain::entities::{FormattedReply, MintAddress};
use crate::domain::traits::{Bot, ChainLookup, QuoteService};

/// Wrapped SOL mint, the fixed input side of every simulated swap.
pub const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

/// Fixed parameters of the simulated buy order.
#[derive(Debug, Clone)]
pub struct SwapSettings {
    /// Input mint for the swap (wrapped SOL).
    pub input_mint: String,
    /// Input amount in lamports. 1_000_000 = 0.001 SOL.
    pub amount_lamports: u64,
    /// Slippage tolerance in percent.
    pub slippage_percent: u32,
}

impl Default for SwapSettings {
    fn default() -> Self {
        Self {
            input_mint: WRAPPED_SOL_MINT.to_string(),
            amount_lamports: 1_000_000,
            slippage_percent: 1,
        }
    }
}

/// Orchestrates one /awaken invocation from raw command text to reply.
///
/// The flow is strictly linear: parse args, validate the address format,
/// confirm the account on chain, send the acknowledgement, fetch a quote,
/// format and send the result. Every failure short-circuits into exactly
/// one user-visible message and nothing is retried. Invocations share no
/// mutable state, so concurrent commands are independent.
pub struct AwakenPipeline {
    chain: Arc<dyn ChainLookup>,
    quotes: Arc<dyn QuoteService>,
    swap: SwapSettings,
}

impl AwakenPipeline {
    pub fn new(
        chain: Arc<dyn ChainLookup>,
        quotes: Arc<dyn QuoteService>,
        swap: SwapSettings,
    ) -> Self {
        Self {
            chain,
            quotes,
            swap,
        }
    }

    /// Handle one command invocation, always leaving the user with a reply.
    ///
    /// Pipeline errors are converted to their user-facing message here; only
    /// a failure to deliver that message itself propagates.
    pub async fn handle(
        &self,
        bot: &dyn Bot,
        chat_id: &str,
        raw_text: &str,
    ) -> Result<(), BotError> {
        match self.run(bot, chat_id, raw_text).await {
            Ok(()) => Ok(()),
            Err(err) => {
                match &err {
                    AwakenError::RpcUnavailable(reason) => {
                        tracing::warn!("Existence check failed: {}", reason);
                    }
                    AwakenError::QuoteServiceUnavailable(reason) => {
                        tracing::error!("Quote lookup failed: {}", reason);
                    }
                    _ => {
                        tracing::debug!("Pipeline rejected command: {}", err);
                    }
                }
                bot.send_reply(chat_id, &FormattedReply::plain(err.user_reply()))
                    .await?;
                Ok(())
            }
        }
    }

    async fn run(&self, bot: &dyn Bot, chat_id: &str, raw_text: &str) -> Result<(), AwakenError> {
        let address = parse_args(raw_text)?;

        if !self.chain.account_exists(&address).await? {
            return Err(AwakenError::AccountNotFound);
        }

        // Best-effort acknowledgement: a failed send is logged, never fatal
        if let Err(e) = bot.send_reply(chat_id, &format_ack(&address)).await {
            tracing::warn!("Failed to send acknowledgement: {}", e);
        }

        let quote = self
            .quotes
            .quote(
                &self.swap.input_mint,
                &address,
                self.swap.amount_lamports,
                self.swap.slippage_percent,
            )
            .await?;

        let reply = format_quote_reply(&quote, self.swap.amount_lamports);
        bot.send_reply(chat_id, &reply)
            .await
            .map_err(|e| AwakenError::QuoteServiceUnavailable(e.to_string()))?;

        Ok(())
    }
}

/// Split the raw command text and pull out the single mint argument.
///
/// Exactly two whitespace-delimited tokens are required: the command name
/// and the candidate address.
fn parse_args(raw: &str) -> Result<MintAddress, AwakenError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(AwakenError::InvalidUsage);
    }
    MintAddress::parse(tokens[1])
}

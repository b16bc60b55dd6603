//! Application layer errors

use thiserror::Error;

/// Errors the /awaken pipeline can hit on its way to a reply.
///
/// Six internal kinds collapse to three user-facing messages (see
/// [`AwakenError::user_reply`]): the user is deliberately not told whether an
/// address failed to decode or simply has no account, nor whether a quote
/// failed for lack of liquidity or because the service was down.
#[derive(Error, Debug)]
pub enum AwakenError {
    #[error("wrong argument count")]
    InvalidUsage,

    #[error("address is not a valid Base58-encoded 32-byte public key")]
    InvalidAddressFormat,

    #[error("RPC endpoint unavailable: {0}")]
    RpcUnavailable(String),

    #[error("no account found on chain")]
    AccountNotFound,

    #[error("no route with liquidity for the requested pair")]
    NoLiquidity,

    #[error("quote service unavailable: {0}")]
    QuoteServiceUnavailable(String),
}

impl AwakenError {
    /// The single user-visible message for this error.
    pub fn user_reply(&self) -> &'static str {
        match self {
            AwakenError::InvalidUsage => "⚠️ Usage: /awaken <TOKEN_MINT_ADDRESS>",
            AwakenError::InvalidAddressFormat
            | AwakenError::RpcUnavailable(_)
            | AwakenError::AccountNotFound => "❌ Invalid or non-existent SPL token address.",
            AwakenError::NoLiquidity | AwakenError::QuoteServiceUnavailable(_) => {
                "⚠️ Failed to simulate swap. Token may lack liquidity on devnet."
            }
        }
    }
}

/// General bot/adapter errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    NotFound(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_kinds_collapse_to_three_messages() {
        let usage = AwakenError::InvalidUsage.user_reply();
        let invalid = AwakenError::InvalidAddressFormat.user_reply();
        let failed = AwakenError::NoLiquidity.user_reply();

        assert_eq!(
            AwakenError::RpcUnavailable("timeout".into()).user_reply(),
            invalid
        );
        assert_eq!(AwakenError::AccountNotFound.user_reply(), invalid);
        assert_eq!(
            AwakenError::QuoteServiceUnavailable("503".into()).user_reply(),
            failed
        );

        assert_ne!(usage, invalid);
        assert_ne!(invalid, failed);
        assert_ne!(usage, failed);
    }

    #[test]
    fn unknown_command_message_names_the_command() {
        let err = CommandError::NotFound("awoken".to_string());
        assert_eq!(err.to_string(), "Command not found: awoken");
    }
}

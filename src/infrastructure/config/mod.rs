//! Configuration management

use serde::{Deserialize, Serialize};

use crate::application::errors::ConfigError;
use crate::application::pipeline::{SwapSettings, WRAPPED_SOL_MINT};

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub adapters: AdaptersConfig,
    pub solana: SolanaConfig,
    pub jupiter: JupiterConfig,
    pub swap: SwapConfig,
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub telegram: Option<TelegramConfig>,
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelegramConfig {
    pub enabled: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SolanaConfig {
    pub rpc_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct JupiterConfig {
    pub quote_url: String,
}

/// Fixed simulated-swap parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SwapConfig {
    pub input_mint: String,
    pub amount_lamports: u64,
    pub slippage_percent: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// Upper bound for each outbound RPC/quote round trip.
    pub request_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "awaken-bot".to_string(),
                prefix: "/".to_string(),
            },
            adapters: AdaptersConfig {
                telegram: Some(TelegramConfig {
                    enabled: false,
                    token: None,
                }),
                console: Some(ConsoleConfig { enabled: true }),
            },
            solana: SolanaConfig {
                rpc_url: "https://api.devnet.solana.com".to_string(),
            },
            jupiter: JupiterConfig {
                quote_url: "https://quote-api.jup.ag/v6/quote".to_string(),
            },
            swap: SwapConfig {
                input_mint: WRAPPED_SOL_MINT.to_string(),
                amount_lamports: 1_000_000,
                slippage_percent: 1,
            },
            network: NetworkConfig {
                request_timeout_seconds: 10,
            },
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Parse(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build a configuration from environment variables, falling back to
    /// defaults (BOT_TOKEN for Telegram, SOLANA_RPC for the node endpoint).
    pub fn load_env() -> Self {
        let mut config = Self::default();

        if let Ok(token) = std::env::var("BOT_TOKEN") {
            config.adapters.telegram = Some(TelegramConfig {
                enabled: true,
                token: Some(token),
            });
        }
        if let Ok(rpc_url) = std::env::var("SOLANA_RPC") {
            config.solana.rpc_url = rpc_url;
        }

        config
    }

    /// Serialize the default configuration for `init-config`
    pub fn default_yaml() -> String {
        serde_yaml::to_string(&Self::default()).unwrap_or_default()
    }

    /// The swap parameters in the form the pipeline consumes
    pub fn swap_settings(&self) -> SwapSettings {
        SwapSettings {
            input_mint: self.swap.input_mint.clone(),
            amount_lamports: self.swap.amount_lamports,
            slippage_percent: self.swap.slippage_percent,
        }
    }

    /// Telegram token, if the adapter is enabled and configured
    pub fn telegram_token(&self) -> Option<String> {
        self.adapters
            .telegram
            .as_ref()
            .filter(|t| t.enabled)
            .and_then(|t| t.token.clone())
    }
}

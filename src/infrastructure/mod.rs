//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Platform integrations (Telegram, console)
//! - Solana: JSON-RPC client for the devnet node
//! - Jupiter: HTTP client for the quote aggregator

pub mod adapters;
pub mod config;
pub mod jupiter;
pub mod solana;

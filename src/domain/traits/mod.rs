//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod chain;
pub mod quote;

pub use bot::{Bot, BotInfo};
pub use chain::ChainLookup;
pub use quote::QuoteService;

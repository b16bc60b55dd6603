//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (MintAddress, SwapQuote, Message, Command)
//! - Traits: Abstractions for infrastructure (Bot, ChainLookup, QuoteService)

pub mod entities;
pub mod traits;

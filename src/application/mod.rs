//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Pipeline and adapter error taxonomy
//! - Format: Quote-to-reply rendering
//! - Pipeline: The /awaken validation-and-quote flow

pub mod errors;
pub mod format;
pub mod pipeline;

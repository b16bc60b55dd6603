//! Swap quote entities

/// Raw best-route quote for a simulated swap, as reported by the aggregator.
///
/// Amounts stay in the chain's smallest unit here; scaling to display units
/// is the formatter's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapQuote {
    /// Estimated output amount in the token's smallest unit.
    pub out_amount: u64,
    /// Estimated price impact as a fraction (0.0123 = 1.23%).
    pub price_impact_pct: f64,
}

/// Markup mode for an outgoing reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Plain,
    Markdown,
}

/// A user-facing reply ready to hand to a platform adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedReply {
    pub text: String,
    pub markup: Markup,
}

impl FormattedReply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Markup::Plain,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Markup::Markdown,
        }
    }
}

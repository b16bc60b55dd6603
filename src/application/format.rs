//! Quote formatting - Renders raw quote data into user-facing replies

use crate::domain::entities::{FormattedReply, MintAddress, SwapQuote};

/// Lamports per SOL (and per whole token at 9-decimal precision).
///
/// The output amount is scaled by this constant too. That is only correct
/// when the output token also uses 9 decimals; the original bot hard-codes
/// this and the approximation is kept as-is rather than silently fixed.
const LAMPORTS_PER_UNIT: f64 = 1_000_000_000.0;

/// Render the "awakening" acknowledgement for a validated mint.
pub fn format_ack(address: &MintAddress) -> FormattedReply {
    FormattedReply::markdown(format!(
        "⚡ Awakening token `{}` on devnet...",
        address.short()
    ))
}

/// Render a simulated buy quote into the reply template.
///
/// Output amount is shown with 6 decimal places, price impact with 2.
/// Pure and total: any well-formed quote formats without failure.
pub fn format_quote_reply(quote: &SwapQuote, input_lamports: u64) -> FormattedReply {
    let input_sol = input_lamports as f64 / LAMPORTS_PER_UNIT;
    let out_tokens = quote.out_amount as f64 / LAMPORTS_PER_UNIT;
    let impact_percent = quote.price_impact_pct * 100.0;

    FormattedReply::markdown(format!(
        "✅ *Simulated Buy Order:*\n\
         • Input: `{} SOL`\n\
         • Output: `{:.6} tokens`\n\
         📈 Estimated Price Impact: *{:.2}%*",
        input_sol, out_tokens, impact_percent
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Markup;

    #[test]
    fn scales_out_amount_to_six_decimals() {
        let quote = SwapQuote {
            out_amount: 2_000_000_000,
            price_impact_pct: 0.0123,
        };
        let reply = format_quote_reply(&quote, 1_000_000);

        assert!(reply.text.contains("2.000000"), "got: {}", reply.text);
        assert!(reply.text.contains("1.23%"), "got: {}", reply.text);
        assert!(reply.text.contains("0.001 SOL"), "got: {}", reply.text);
        assert_eq!(reply.markup, Markup::Markdown);
    }

    #[test]
    fn fractional_out_amount_keeps_precision() {
        let quote = SwapQuote {
            out_amount: 1_234_567,
            price_impact_pct: 0.5,
        };
        let reply = format_quote_reply(&quote, 1_000_000);

        assert!(reply.text.contains("0.001235"), "got: {}", reply.text);
        assert!(reply.text.contains("50.00%"), "got: {}", reply.text);
    }

    #[test]
    fn formatting_is_deterministic() {
        let quote = SwapQuote {
            out_amount: 42_000,
            price_impact_pct: 0.0001,
        };
        let a = format_quote_reply(&quote, 1_000_000);
        let b = format_quote_reply(&quote, 1_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn ack_uses_truncated_address() {
        let addr = MintAddress::parse("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").unwrap();
        let reply = format_ack(&addr);
        assert!(reply.text.contains("`7xKXtg...gAsU`"), "got: {}", reply.text);
        assert!(reply.text.contains("devnet"));
    }
}

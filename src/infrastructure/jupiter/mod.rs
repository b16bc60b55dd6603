//! Jupiter quote client - simulated swap quotes from the aggregator API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::{AwakenError, BotError};
use crate::domain::entities::{MintAddress, SwapQuote};
use crate::domain::traits::QuoteService;

/// Client for the aggregator's quote endpoint.
///
/// One instance is built at startup and shared; requests carry the
/// configured timeout. The aggregator ranks candidate routes itself and
/// this client only ever takes the first one.
pub struct JupiterQuoteClient {
    url: String,
    client: Client,
}

#[derive(Deserialize)]
struct QuoteResponse {
    data: Option<Vec<Route>>,
}

#[derive(Deserialize)]
struct Route {
    #[serde(rename = "outAmount")]
    out_amount: RawAmount,
    #[serde(rename = "priceImpactPct")]
    price_impact_pct: RawFraction,
}

/// The API has served integer amounts both as JSON numbers and as strings;
/// accept either and validate on receipt.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(u64),
    Text(String),
}

impl RawAmount {
    fn value(&self) -> Result<u64, AwakenError> {
        match self {
            RawAmount::Number(n) => Ok(*n),
            RawAmount::Text(s) => s.parse::<u64>().map_err(|_| {
                AwakenError::QuoteServiceUnavailable(format!("non-integer outAmount: {}", s))
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFraction {
    Number(f64),
    Text(String),
}

impl RawFraction {
    fn value(&self) -> Result<f64, AwakenError> {
        match self {
            RawFraction::Number(n) => Ok(*n),
            RawFraction::Text(s) => s.parse::<f64>().map_err(|_| {
                AwakenError::QuoteServiceUnavailable(format!("non-numeric priceImpactPct: {}", s))
            }),
        }
    }
}

impl JupiterQuoteClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BotError::Internal(e.to_string()))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Pick the best route out of a decoded quote response.
    ///
    /// An empty route list is a domain answer (no liquidity); a missing or
    /// malformed one is a service failure.
    fn best_route(response: QuoteResponse) -> Result<SwapQuote, AwakenError> {
        let routes = response
            .data
            .ok_or_else(|| AwakenError::QuoteServiceUnavailable("response missing data".into()))?;

        let route = routes.into_iter().next().ok_or(AwakenError::NoLiquidity)?;

        Ok(SwapQuote {
            out_amount: route.out_amount.value()?,
            price_impact_pct: route.price_impact_pct.value()?,
        })
    }
}

#[async_trait]
impl QuoteService for JupiterQuoteClient {
    async fn quote(
        &self,
        input_mint: &str,
        output_mint: &MintAddress,
        amount: u64,
        slippage_percent: u32,
    ) -> Result<SwapQuote, AwakenError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("inputMint", input_mint.to_string()),
                ("outputMint", output_mint.encoded().to_string()),
                ("amount", amount.to_string()),
                ("slippage", slippage_percent.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AwakenError::QuoteServiceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AwakenError::QuoteServiceUnavailable(format!(
                "quote API status {}",
                response.status()
            )));
        }

        let decoded: QuoteResponse = response
            .json()
            .await
            .map_err(|e| AwakenError::QuoteServiceUnavailable(e.to_string()))?;

        Self::best_route(decoded)
    }
}

use crate::model::{OhlcRow, ProviderError};
use crate::provider::traits::PriceHistoryProvider;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Daily-bar history client for the Yahoo Finance v8 chart endpoint.
pub struct YahooProvider {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
    #[serde(default)]
    adjclose: Vec<AdjCloseBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseBlock {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

impl YahooProvider {
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) TrendScope/0.1")
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ProviderError::Http(e.to_string()))?;
        Ok(Self { client })
    }

    fn build_url(&self, ticker: &str) -> String {
        format!("https://query1.finance.yahoo.com/v8/finance/chart/{}", ticker)
    }
}

#[async_trait::async_trait]
impl PriceHistoryProvider for YahooProvider {
    async fn get_history(
        &self,
        ticker: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<OhlcRow>, ProviderError> {
        let url = self.build_url(ticker);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", start.timestamp().to_string()),
                ("period2", end.timestamp().to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let status = response.status();
        // Yahoo answers 404 with a parseable error body for unknown symbols;
        // treat that as "no data" rather than a transport fault.
        if !status.is_success() && status.as_u16() != 404 {
            return Err(ProviderError::BadStatus(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;
        parse_chart_payload(&text)
    }
}

/// Parses a v8 chart payload into OHLC rows. Rows without a close (holidays,
/// trading halts) are skipped. Adjusted closes are preferred when present.
fn parse_chart_payload(text: &str) -> Result<Vec<OhlcRow>, ProviderError> {
    let payload: ChartResponse =
        serde_json::from_str(text).map_err(|e| ProviderError::InvalidPayload(e.to_string()))?;

    if let Some(err) = payload.chart.error {
        tracing::debug!(
            "provider error body: {}",
            err.description.unwrap_or_else(|| "unknown".into())
        );
        return Ok(Vec::new());
    }

    let Some(result) = payload.chart.result.and_then(|mut r| {
        if r.is_empty() { None } else { Some(r.remove(0)) }
    }) else {
        return Ok(Vec::new());
    };

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = result
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|b| b.adjclose)
        .unwrap_or_default();

    let mut rows = Vec::with_capacity(result.timestamp.len());
    for (i, &ts) in result.timestamp.iter().enumerate() {
        let close = value_at(&adjclose, i).or_else(|| value_at(&quote.close, i));
        let (Some(close), Some(timestamp)) = (close, DateTime::from_timestamp(ts, 0)) else {
            continue;
        };
        rows.push(OhlcRow {
            timestamp,
            open: value_at(&quote.open, i).unwrap_or(0.0),
            high: value_at(&quote.high, i).unwrap_or(0.0),
            low: value_at(&quote.low, i).unwrap_or(0.0),
            close,
            volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
        });
    }
    Ok(rows)
}

fn value_at(xs: &[Option<f64>], i: usize) -> Option<f64> {
    xs.get(i).copied().flatten()
}

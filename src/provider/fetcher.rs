use crate::model::{FetchOutcome, PricePoint, PriceSeries};
use crate::provider::traits::PriceHistoryProvider;
use chrono::{Duration, Utc};
use tracing::debug;

/// Public fetch boundary: one provider call per invocation, no retries, no
/// caching. Every failure mode collapses to `None` so callers cannot tell an
/// unknown ticker from a transport fault; the distinction only reaches the
/// debug log.
pub struct PriceSeriesFetcher {
    provider: Box<dyn PriceHistoryProvider>,
    lookback_days: i64,
}

impl PriceSeriesFetcher {
    pub fn new(provider: impl PriceHistoryProvider + 'static, lookback_days: i64) -> Self {
        Self {
            provider: Box::new(provider),
            lookback_days,
        }
    }

    pub async fn fetch(&self, ticker: &str) -> Option<PriceSeries> {
        match self.lookup(ticker).await {
            FetchOutcome::Found(series) => Some(series),
            FetchOutcome::NotFound => {
                debug!("{ticker}: no usable history");
                None
            }
            FetchOutcome::TransportError(cause) => {
                debug!("{ticker}: lookup failed: {cause}");
                None
            }
        }
    }

    async fn lookup(&self, ticker: &str) -> FetchOutcome {
        let end = Utc::now();
        let start = end - Duration::days(self.lookback_days);

        let rows = match self.provider.get_history(ticker, start, end).await {
            Ok(rows) => rows,
            Err(e) => return FetchOutcome::TransportError(e),
        };

        let series = PriceSeries::from_points(
            rows.iter()
                .map(|r| PricePoint {
                    timestamp: r.timestamp,
                    close: r.close,
                })
                .collect(),
        );

        // Anything too short to fit a line is normalized to absence here, so
        // no downstream component ever sees a sub-minimal series.
        if series.len() < 2 {
            FetchOutcome::NotFound
        } else {
            FetchOutcome::Found(series)
        }
    }
}

use crate::model::{OhlcRow, ProviderError};
use chrono::{DateTime, Utc};

#[async_trait::async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Daily OHLC history for `ticker` over `[start, end)`. An empty vector
    /// means the provider knows no data for the ticker.
    async fn get_history(
        &self,
        ticker: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<OhlcRow>, ProviderError>;
}

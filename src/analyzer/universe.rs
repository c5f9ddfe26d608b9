use crate::analyzer::scoring;
use crate::config::IndustryGroup;
use crate::model::AnalysisRecord;
use crate::provider::PriceSeriesFetcher;
use futures::future::join_all;
use tracing::info;

/// Runs the fetch → score → rank pipeline over a grouped universe.
pub struct UniverseAnalyzer {
    fetcher: PriceSeriesFetcher,
}

impl UniverseAnalyzer {
    pub fn new(fetcher: PriceSeriesFetcher) -> Self {
        Self { fetcher }
    }

    /// Analyzes every ticker in universe insertion order and returns the
    /// records sorted by linearity score descending. Ties keep the original
    /// processing order: fetches run concurrently, but `join_all` yields
    /// results in submission order and the sort is stable.
    pub async fn analyze(&self, universe: &[IndustryGroup]) -> Vec<AnalysisRecord> {
        let jobs: Vec<(&str, &str)> = universe
            .iter()
            .flat_map(|group| {
                group
                    .tickers
                    .iter()
                    .map(move |ticker| (group.industry.as_str(), ticker.as_str()))
            })
            .collect();

        let fetched = join_all(jobs.iter().map(|(_, ticker)| self.fetcher.fetch(ticker))).await;

        let mut records = Vec::with_capacity(jobs.len());
        for ((industry, ticker), series) in jobs.into_iter().zip(fetched) {
            // Absent tickers are skipped; one dead symbol never aborts the run.
            let Some(series) = series else { continue };
            let linearity_score = scoring::linearity_score(&series);
            let price_increase = scoring::percent_change(&series);
            info!(
                "{ticker} ({industry}): R² = {linearity_score:.3}, change = {price_increase:.1}%"
            );
            records.push(AnalysisRecord {
                ticker: ticker.to_string(),
                industry: industry.to_string(),
                linearity_score,
                price_increase,
                series,
            });
        }

        records.sort_by(|a, b| b.linearity_score.total_cmp(&a.linearity_score));
        records
    }
}

// Core structs: PricePoint, PriceSeries, OhlcRow, AnalysisRecord
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// One closing-price observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Chronologically ordered closing prices for one ticker.
///
/// Timestamps are strictly increasing; the constructor drops any point that
/// does not advance the clock, so provider payloads are not trusted to be
/// well ordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn from_points(points: Vec<PricePoint>) -> Self {
        let mut kept: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match kept.last() {
                Some(prev) if point.timestamp <= prev.timestamp => continue,
                _ => kept.push(point),
            }
        }
        Self { points: kept }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn first_close(&self) -> Option<f64> {
        self.points.first().map(|p| p.close)
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }
}

/// One provider-side history row. Only the close survives past the fetcher
/// boundary; the rest is dropped there.
#[derive(Debug, Clone, Serialize)]
pub struct OhlcRow {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Per-ticker analysis output. The series is kept so the top-ranked record
/// can be charted without refetching.
#[derive(Debug, Clone)]
pub struct AnalysisRecord {
    pub ticker: String,
    pub industry: String,
    pub linearity_score: f64,
    pub price_increase: f64,
    pub series: PriceSeries,
}

/// Internal classification of a history lookup. Collapsed to
/// `Option<PriceSeries>` at the fetcher's public boundary; callers never
/// distinguish an unknown ticker from a transport failure.
#[derive(Debug)]
pub enum FetchOutcome {
    Found(PriceSeries),
    NotFound,
    TransportError(ProviderError),
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(String),
    #[error("provider responded with status {0}")]
    BadStatus(u16),
    #[error("malformed payload: {0}")]
    InvalidPayload(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(secs: i64, close: f64) -> PricePoint {
        PricePoint {
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            close,
        }
    }

    #[test]
    fn series_drops_non_increasing_timestamps() {
        let series = PriceSeries::from_points(vec![
            point(100, 1.0),
            point(200, 2.0),
            point(200, 3.0),
            point(150, 4.0),
            point(300, 5.0),
        ]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![1.0, 2.0, 5.0]);
    }

    #[test]
    fn empty_series_is_allowed() {
        let series = PriceSeries::from_points(Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.first_close(), None);
        assert_eq!(series.last_close(), None);
    }
}

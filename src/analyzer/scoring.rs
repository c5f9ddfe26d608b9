use crate::analyzer::regression::LinearFit;
use crate::model::PriceSeries;

/// R² of the series against its own least-squares line over the observation
/// index. Sentinel 0.0 for anything too short to fit.
pub fn linearity_score(series: &PriceSeries) -> f64 {
    let closes = series.closes();
    if closes.len() < 2 {
        return 0.0;
    }
    LinearFit::fit(&closes).r_squared(&closes)
}

/// Percentage change from the first to the last observation. Sentinel 0.0
/// for anything too short. A zero first close propagates as a non-finite
/// value; bad data is surfaced, not masked.
pub fn percent_change(series: &PriceSeries) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    let (Some(first), Some(last)) = (series.first_close(), series.last_close()) else {
        return 0.0;
    };
    (last - first) / first * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PricePoint;
    use chrono::{TimeZone, Utc};

    fn series(closes: &[f64]) -> PriceSeries {
        PriceSeries::from_points(
            closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    timestamp: Utc.timestamp_opt(86_400 * i as i64, 0).unwrap(),
                    close,
                })
                .collect(),
        )
    }

    #[test]
    fn short_series_scores_zero() {
        assert_eq!(linearity_score(&series(&[])), 0.0);
        assert_eq!(linearity_score(&series(&[42.0])), 0.0);
        assert_eq!(percent_change(&series(&[])), 0.0);
        assert_eq!(percent_change(&series(&[42.0])), 0.0);
    }

    #[test]
    fn linear_series_scores_one() {
        let s = series(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        assert!((linearity_score(&s) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn percent_change_first_to_last() {
        let s = series(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        assert!((percent_change(&s) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn percent_change_sign_follows_direction() {
        assert!(percent_change(&series(&[10.0, 12.0])) > 0.0);
        assert!(percent_change(&series(&[12.0, 10.0])) < 0.0);
        assert_eq!(percent_change(&series(&[10.0, 15.0, 10.0])), 0.0);
    }

    #[test]
    fn flat_series_changes_nothing_and_scores_cleanly() {
        let s = series(&[7.0, 7.0, 7.0, 7.0]);
        assert_eq!(percent_change(&s), 0.0);
        assert!(linearity_score(&s).is_finite());
    }

    #[test]
    fn zero_first_close_is_surfaced_as_non_finite() {
        let s = series(&[0.0, 5.0]);
        assert!(!percent_change(&s).is_finite());
    }
}

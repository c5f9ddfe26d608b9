use crate::model::AnalysisRecord;

/// Renders the ranked records as a fixed-header text table. Order is taken
/// as given; this never re-sorts.
pub fn format_table(records: &[AnalysisRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:<18} {:>14} {:>16}\n",
        "Ticker", "Industry", "Linearity (R²)", "5-Year Increase"
    ));
    out.push_str(&format!(
        "{:-<8} {:-<18} {:-<14} {:-<16}\n",
        "", "", "", ""
    ));
    for record in records {
        out.push_str(&format!(
            "{:<8} {:<18} {:>14.3} {:>16}\n",
            record.ticker,
            record.industry,
            record.linearity_score,
            format!("{:.1}%", record.price_increase),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PricePoint, PriceSeries};
    use chrono::{TimeZone, Utc};

    fn record(ticker: &str, industry: &str, score: f64, increase: f64) -> AnalysisRecord {
        let series = PriceSeries::from_points(
            [10.0, 11.0]
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    timestamp: Utc.timestamp_opt(86_400 * i as i64, 0).unwrap(),
                    close,
                })
                .collect(),
        );
        AnalysisRecord {
            ticker: ticker.to_string(),
            industry: industry.to_string(),
            linearity_score: score,
            price_increase: increase,
            series,
        }
    }

    #[test]
    fn formats_scores_and_percentages() {
        let table = format_table(&[record("AAPL", "Technology", 0.98765, 312.44)]);
        assert!(table.contains("Ticker"));
        assert!(table.contains("Linearity (R²)"));
        assert!(table.contains("5-Year Increase"));
        assert!(table.contains("AAPL"));
        assert!(table.contains("0.988"));
        assert!(table.contains("312.4%"));
    }

    #[test]
    fn keeps_given_order() {
        let table = format_table(&[
            record("LOW", "Tech", 0.2, 1.0),
            record("HIGH", "Tech", 0.9, 2.0),
        ]);
        let low = table.find("LOW").unwrap();
        let high = table.find("HIGH").unwrap();
        assert!(low < high);
    }

    #[test]
    fn empty_results_emit_header_only() {
        let table = format_table(&[]);
        assert_eq!(table.lines().count(), 2);
        assert!(table.starts_with("Ticker"));
    }

    #[test]
    fn negative_changes_keep_their_sign() {
        let table = format_table(&[record("DROP", "Energy", 0.5, -23.07)]);
        assert!(table.contains("-23.1%"));
    }
}

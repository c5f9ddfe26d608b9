use serde::Deserialize;
use std::fs;

/// One industry bucket of the universe. Tickers keep their given order and
/// duplicates are analyzed as independent entries.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryGroup {
    pub industry: String,
    pub tickers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
    #[serde(default = "default_chart_path")]
    pub chart_path: String,
    pub universe: Vec<IndustryGroup>,
}

fn default_lookback_days() -> i64 {
    5 * 365
}

fn default_chart_path() -> String {
    "trend.png".to_string()
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

impl AppConfig {
    /// Built-in universe used when no config file is present.
    pub fn builtin() -> Self {
        let group = |industry: &str, tickers: &[&str]| IndustryGroup {
            industry: industry.to_string(),
            tickers: tickers.iter().map(|t| t.to_string()).collect(),
        };
        Self {
            lookback_days: default_lookback_days(),
            chart_path: default_chart_path(),
            universe: vec![
                group("Technology", &["AAPL", "MSFT", "GOOGL", "AVGO"]),
                group("Healthcare", &["JNJ", "UNH", "LLY"]),
                group("Financials", &["JPM", "V", "MA"]),
                group("Consumer Staples", &["KO", "PG", "COST", "WMT"]),
                group("Industrials", &["CAT", "UNP", "HON"]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_universe_is_non_empty() {
        let config = AppConfig::builtin();
        assert!(!config.universe.is_empty());
        assert!(config.universe.iter().all(|g| !g.tickers.is_empty()));
        assert_eq!(config.lookback_days, 1825);
    }

    #[test]
    fn config_parses_with_defaults() {
        let raw = r#"{"universe": [{"industry": "Tech", "tickers": ["AAPL"]}]}"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.lookback_days, 1825);
        assert_eq!(config.chart_path, "trend.png");
        assert_eq!(config.universe[0].industry, "Tech");
    }
}

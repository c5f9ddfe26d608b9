mod analyzer;
mod chart;
mod config;
mod model;
mod provider;
mod report;

use analyzer::UniverseAnalyzer;
use config::{AppConfig, load_config};
use provider::{PriceSeriesFetcher, YahooProvider};
use std::path::Path;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file, falling back to the built-in universe
    let config: AppConfig = if Path::new("config.json").exists() {
        match load_config("config.json") {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Config load error: {}", e);
                return;
            }
        }
    } else {
        info!("No config.json found, using the built-in universe");
        AppConfig::builtin()
    };

    let ticker_count: usize = config.universe.iter().map(|g| g.tickers.len()).sum();
    info!(
        "🚀 TrendScope started: {} tickers across {} industries, {}-day lookback",
        ticker_count,
        config.universe.len(),
        config.lookback_days
    );

    let provider = match YahooProvider::new() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to initialize provider: {}", e);
            return;
        }
    };
    let fetcher = PriceSeriesFetcher::new(provider, config.lookback_days);
    let analyzer = UniverseAnalyzer::new(fetcher);

    info!("Fetching and scoring price histories...");
    let results = analyzer.analyze(&config.universe).await;
    info!(
        "Ranked {} of {} tickers ({} skipped)",
        results.len(),
        ticker_count,
        ticker_count - results.len()
    );

    // The table goes to stdout regardless of what the renderer does next.
    print!("{}", report::format_table(&results));

    match chart::render_top_record(&results, Path::new(&config.chart_path)) {
        Ok(()) if !results.is_empty() => {
            info!("📈 Chart of top record saved to {}", config.chart_path);
        }
        Ok(()) => {}
        Err(e) => warn!("Chart rendering failed: {}", e),
    }
}

use crate::analyzer::regression::LinearFit;
use crate::model::{AnalysisRecord, RenderError};
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

const CHART_SIZE: (u32, u32) = (1024, 640);

/// Charts the top-ranked record: actual closes as a solid line, the fitted
/// trend as a dashed one. Empty input is a silent no-op.
pub fn render_top_record(records: &[AnalysisRecord], path: &Path) -> Result<(), RenderError> {
    let Some(top) = records.first() else {
        debug!("no records to render");
        return Ok(());
    };

    let closes = top.series.closes();
    let fit = LinearFit::fit(&closes);
    let fitted = fit.predictions(closes.len());

    let (y_min, y_max) = y_bounds(&closes, &fitted);
    let x_max = (closes.len() - 1) as f64;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "{} close vs. linear trend (R² = {:.3})",
                top.ticker, top.linearity_score
            ),
            ("sans-serif", 28),
        )
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(to_backend)?;

    chart
        .configure_mesh()
        .x_desc("Trading day")
        .y_desc("Close price")
        .draw()
        .map_err(to_backend)?;

    chart
        .draw_series(LineSeries::new(
            closes.iter().enumerate().map(|(i, &c)| (i as f64, c)),
            &BLUE,
        ))
        .map_err(to_backend)?
        .label("Close")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &BLUE));

    chart
        .draw_series(DashedLineSeries::new(
            fitted.iter().enumerate().map(|(i, &v)| (i as f64, v)),
            8,
            5,
            RED.stroke_width(2),
        ))
        .map_err(to_backend)?
        .label("Fitted trend")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], &RED));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(to_backend)?;

    root.present().map_err(to_backend)?;
    Ok(())
}

fn to_backend<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

/// Padded y-range covering both the actual and the fitted values. A flat
/// series still gets a non-degenerate range.
fn y_bounds(closes: &[f64], fitted: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in closes.iter().chain(fitted.iter()) {
        min = min.min(v);
        max = max.max(v);
    }
    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        max.abs().max(1.0) * 0.05
    };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_render_nothing() {
        let path = std::env::temp_dir().join("trendscope_should_not_exist.png");
        let _ = std::fs::remove_file(&path);
        render_top_record(&[], &path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn bounds_are_padded() {
        let (min, max) = y_bounds(&[10.0, 20.0], &[9.0, 21.0]);
        assert!(min < 9.0);
        assert!(max > 21.0);
    }

    #[test]
    fn flat_series_gets_a_non_degenerate_range() {
        let (min, max) = y_bounds(&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]);
        assert!(min < max);
    }
}

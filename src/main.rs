use chrono::{Duration, NaiveDate};
use coinsight::config::EngineConfig;
use coinsight::insights::engine::InsightEngine;
use coinsight::logging;
use coinsight::models::insight::InsightReport;
use coinsight::models::price::PricePoint;
use dotenvy::dotenv;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = EngineConfig::from_env();
    let engine = InsightEngine::new(config);

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid sample start date")?;
    let series = sample_series(start, 120);
    let report = engine.compute_insights(&series)?;

    print_report(&report, &series);
    println!();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Synthetic daily series: upward drift with a slow swing on top
fn sample_series(start: NaiveDate, days: usize) -> Vec<PricePoint> {
    let mut series = Vec::with_capacity(days);
    for i in 0..days {
        let drift = i as f64 * 42.0;
        let swing = (i as f64 * 0.35).sin() * 450.0;
        let price = 30_000.0 + drift + swing;
        series.push(PricePoint::new(start + Duration::days(i as i64), price));
    }
    series
}

fn print_report(report: &InsightReport, series: &[PricePoint]) {
    let last_price = series.last().map(|p| p.price).unwrap_or(0.0);

    println!("Forecast (next {} days):", report.forecast.forecasts.len());
    for (i, value) in report.forecast.forecasts.iter().enumerate() {
        let change = (value - last_price) / last_price * 100.0;
        println!("  Day {}: ${:.2} ({:+.2}%)", i + 1, value, change);
    }

    println!("Technical summary:");
    println!("  Trend: {:?}", report.summary.trend_direction);
    println!("  30d change: {:+.2}%", report.summary.price_change_30d);
    println!(
        "  RSI: {:.1} ({:?})",
        report.summary.rsi, report.summary.rsi_signal
    );
    println!("  Support: ${:.2}", report.summary.support_level);
    println!("  Resistance: ${:.2}", report.summary.resistance_level);

    println!("Strategy backtest (MAE over hold-out):");
    for (kind, score) in &report.performance.scores {
        println!("  {:?}: {:.2}", kind, score.mae);
    }
}

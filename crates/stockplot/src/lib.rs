//! stockplot: load daily stock CSVs and present interactive charts.
//!
//! Three entry points, each loading data once and opening a viewer window:
//! - [`compare_stocks`] - close-price lines for several symbols
//! - [`donut`] - latest-close ranking over the whole data directory
//! - [`candlestick`] - daily candles for one symbol in a date window

pub mod app;
pub mod draw;

use anyhow::Result;
use chrono::NaiveDate;
use stockplot_config::Config;
use stockplot_core::Symbol;
use stockplot_data::DataLoader;

use crate::app::{run_viewer, Chart};

/// Date format accepted on the command line (`31-12-2020`), the same one
/// the data files use.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a `DD-MM-YYYY` date argument.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| anyhow::anyhow!("invalid date '{text}' (expected DD-MM-YYYY)"))
}

/// Loads `symbols` and opens a close-price comparison chart.
///
/// Rows dated on or before `start_date` are dropped before plotting.
/// `tick_spacing` fixes the distance between value-axis ticks; `None`
/// picks a step automatically.
pub fn compare_stocks(
    config: &Config,
    symbols: &[&str],
    start_date: Option<NaiveDate>,
    tick_spacing: Option<f64>,
) -> Result<()> {
    let loader = DataLoader::new(&config.data.dir);
    let dataset = loader.load(symbols)?;
    log::info!("comparing {} symbols", dataset.len());

    let chart = stockplot_charts::comparison(&dataset, start_date, tick_spacing);
    run_viewer(config, Chart::Lines(chart))
}

/// Ranks every symbol in the data directory by its latest close and opens
/// a donut of the most expensive ones.
pub fn donut(config: &Config) -> Result<()> {
    let loader = DataLoader::new(&config.data.dir);
    let symbols = loader.scan_symbols()?;
    if symbols.is_empty() {
        anyhow::bail!("no csv files found in {}", config.data.dir.display());
    }
    log::info!("scanned {} symbols in {}", symbols.len(), config.data.dir.display());

    let names: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
    let dataset = loader.load(&names)?;

    // Symbols whose every close is missing carry NaN into the producer,
    // which drops them there.
    let closes: Vec<(Symbol, f64)> = dataset
        .iter()
        .map(|s| (s.symbol().clone(), s.latest_close().unwrap_or(f64::NAN)))
        .collect();
    let exclude: Vec<Symbol> = config.donut.exclude.iter().map(|s| Symbol::new(s)).collect();

    let chart = stockplot_charts::donut(&closes, &exclude, config.donut.top);
    run_viewer(config, Chart::Donut(chart))
}

/// Loads one symbol and opens its candlestick chart for the
/// `(start_date, end_date]` window.
pub fn candlestick(
    config: &Config,
    symbol: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<()> {
    let loader = DataLoader::new(&config.data.dir);
    let dataset = loader.load(&[symbol])?;

    let wanted = Symbol::new(symbol);
    let series = dataset
        .get(&wanted)
        .ok_or_else(|| anyhow::anyhow!("no series loaded for {wanted}"))?;

    let chart = stockplot_charts::candlestick(series, start_date, end_date);
    run_viewer(config, Chart::Candles(chart))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_day_first() {
        let date = parse_date("01-02-2020").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_iso() {
        assert!(parse_date("2020-02-01").is_err());
    }
}

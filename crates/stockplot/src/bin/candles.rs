//! Daily candlestick viewer for one symbol.
//!
//! The date window is open at the start and closed at the end: rows dated
//! strictly after `--start` and up to `--end` inclusive are drawn. Either
//! bound may be omitted.
//!
//! Usage: candles SYMBOL [--start DD-MM-YYYY] [--end DD-MM-YYYY] [--data DIR]

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use stockplot::parse_date;
use stockplot_config::Config;

fn main() -> Result<()> {
    env_logger::init();

    let mut config = Config::load_default();

    let args: Vec<String> = env::args().collect();
    let mut symbol: Option<String> = None;
    let mut start: Option<NaiveDate> = None;
    let mut end: Option<NaiveDate> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--start" if i + 1 < args.len() => {
                start = Some(parse_date(&args[i + 1])?);
                i += 2;
            }
            "--end" if i + 1 < args.len() => {
                end = Some(parse_date(&args[i + 1])?);
                i += 2;
            }
            "--data" if i + 1 < args.len() => {
                config.data.dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            other if !other.starts_with("--") => {
                symbol = Some(other.to_string());
                i += 1;
            }
            _ => i += 1,
        }
    }

    let symbol = symbol.ok_or_else(|| {
        anyhow::anyhow!("usage: candles SYMBOL [--start DD-MM-YYYY] [--end DD-MM-YYYY]")
    })?;

    stockplot::candlestick(&config, &symbol, start, end)
}

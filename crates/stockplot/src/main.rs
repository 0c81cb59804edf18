//! Close-price comparison viewer.
//!
//! Loads one CSV per requested symbol and plots their closing prices on a
//! shared date axis. With no arguments this reproduces the stock demo:
//! GOOG vs AMZN from the start of 2020, value ticks every 200 USD.
//!
//! Usage: stockplot [SYMBOL]... [--start DD-MM-YYYY] [--spacing N] [--data DIR]

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use stockplot::{compare_stocks, parse_date};
use stockplot_config::Config;

fn main() -> Result<()> {
    env_logger::init();

    let mut config = Config::load_default();

    let args: Vec<String> = env::args().collect();
    let mut symbols: Vec<String> = Vec::new();
    let mut start = Some(parse_date("01-01-2020")?);
    let mut spacing = Some(200.0);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--start" if i + 1 < args.len() => {
                start = Some(parse_date(&args[i + 1])?);
                i += 2;
            }
            "--spacing" if i + 1 < args.len() => {
                let value = args[i + 1]
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid tick spacing '{}'", args[i + 1]))?;
                spacing = Some(value);
                i += 2;
            }
            "--data" if i + 1 < args.len() => {
                config.data.dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            other if !other.starts_with("--") => {
                symbols.push(other.to_string());
                i += 1;
            }
            _ => i += 1,
        }
    }

    if symbols.is_empty() {
        symbols = vec!["goog".to_string(), "amzn".to_string()];
    }

    let requested: Vec<&str> = symbols.iter().map(String::as_str).collect();
    compare_stocks(&config, &requested, start, spacing)
}

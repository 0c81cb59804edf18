//! Latest-close ranking donut.
//!
//! Scans the whole data directory rather than taking a symbol list: every
//! `<SYMBOL>.csv` is loaded, symbols are ranked by their latest close, and
//! the most expensive ones are shown as ring slices.
//!
//! Usage: donut [--data DIR] [--top N]

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use stockplot_config::Config;

fn main() -> Result<()> {
    env_logger::init();

    let mut config = Config::load_default();

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" if i + 1 < args.len() => {
                config.data.dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--top" if i + 1 < args.len() => {
                let top = args[i + 1]
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid slice count '{}'", args[i + 1]))?;
                config.donut.top = top;
                i += 2;
            }
            _ => i += 1,
        }
    }

    stockplot::donut(&config)
}

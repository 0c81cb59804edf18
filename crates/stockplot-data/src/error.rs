//! Loader error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while locating and parsing price files.
///
/// Every variant is terminal for the load that raised it: no retries, no
/// partial datasets.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("no symbols requested")]
    NoSymbols,
    #[error("{symbol} stock symbol not found")]
    SymbolNotFound { symbol: String },
    #[error("failed to read data directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("{}:{line}: invalid date '{value}' (expected DD-MM-YYYY)", .path.display())]
    Date {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("{}:{line}: invalid {column} value '{value}'", .path.display())]
    Field {
        path: PathBuf,
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("{}:{line}: expected 6 columns, found {found}", .path.display())]
    ShortRow {
        path: PathBuf,
        line: usize,
        found: usize,
    },
}

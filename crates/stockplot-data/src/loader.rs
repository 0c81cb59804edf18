//! CSV price-file loading.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use stockplot_core::{Dataset, PriceRow, PriceSeries, Symbol};

use crate::DataError;

// Vendor files export columns in a non-standard order. Rows are mapped by
// position, never by header name; the header line is skipped unread.
const COL_DATE: usize = 0;
const COL_LOW: usize = 1;
const COL_OPEN: usize = 2;
const COL_VOLUME: usize = 3;
const COL_HIGH: usize = 4;
const COL_CLOSE: usize = 5;
const COLUMNS: usize = 6;

/// Date format used by the vendor files (`31-12-2020`).
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Loads daily price series from `<dir>/<SYMBOL>.csv` files.
pub struct DataLoader {
    dir: PathBuf,
}

impl DataLoader {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file for one symbol.
    fn path_for(&self, symbol: &Symbol) -> PathBuf {
        self.dir.join(format!("{symbol}.csv"))
    }

    /// Loads every requested symbol, returning series in request order.
    ///
    /// Symbols are case-insensitive. All backing files are checked for
    /// existence before any of them is parsed, so an unknown symbol fails
    /// the whole call without touching the other files (all-or-nothing).
    pub fn load(&self, symbols: &[&str]) -> Result<Dataset, DataError> {
        if symbols.is_empty() {
            return Err(DataError::NoSymbols);
        }

        let symbols: Vec<Symbol> = symbols.iter().map(|s| Symbol::new(s)).collect();

        for symbol in &symbols {
            if !self.path_for(symbol).is_file() {
                return Err(DataError::SymbolNotFound {
                    symbol: symbol.to_string(),
                });
            }
        }

        let mut series = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let path = self.path_for(&symbol);
            let rows = read_rows(&path)?;
            log::debug!(
                "loaded {} rows for {} from {}",
                rows.len(),
                symbol,
                path.display()
            );
            series.push(PriceSeries::new(symbol, rows));
        }

        Ok(Dataset::new(series))
    }

    /// Every symbol with a `*.csv` file in the data directory.
    ///
    /// Sorted alphabetically: `read_dir` order is platform-dependent and
    /// callers expect a stable scan.
    pub fn scan_symbols(&self) -> Result<Vec<Symbol>, DataError> {
        let mut symbols = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                symbols.push(Symbol::new(stem));
            }
        }
        symbols.sort();
        Ok(symbols)
    }
}

/// Parses one vendor CSV file into price rows, keeping file order.
fn read_rows(path: &Path) -> Result<Vec<PriceRow>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();

    // Line 1 is the header, consumed by the reader; records start on line 2.
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let line = i + 2;

        if record.len() < COLUMNS {
            return Err(DataError::ShortRow {
                path: path.to_path_buf(),
                line,
                found: record.len(),
            });
        }

        let date_str = record.get(COL_DATE).unwrap_or("");
        let date =
            NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| DataError::Date {
                path: path.to_path_buf(),
                line,
                value: date_str.to_string(),
            })?;

        let low = parse_price(&record, COL_LOW, "low", path, line)?;
        let open = parse_price(&record, COL_OPEN, "open", path, line)?;
        let volume = parse_volume(&record, COL_VOLUME, path, line)?;
        let high = parse_price(&record, COL_HIGH, "high", path, line)?;
        let close = parse_price(&record, COL_CLOSE, "close", path, line)?;

        rows.push(PriceRow::new(date, open, high, low, close, volume));
    }

    Ok(rows)
}

/// Parses a price column. An empty field is a missing value and becomes
/// NaN; any other non-numeric text is fatal.
fn parse_price(
    record: &csv::StringRecord,
    col: usize,
    column: &'static str,
    path: &Path,
    line: usize,
) -> Result<f64, DataError> {
    let text = record.get(col).unwrap_or("");
    if text.is_empty() {
        return Ok(f64::NAN);
    }
    text.parse().map_err(|_| DataError::Field {
        path: path.to_path_buf(),
        line,
        column,
        value: text.to_string(),
    })
}

/// Parses the volume column. There is no integer NaN, so an empty or
/// non-numeric volume is fatal.
fn parse_volume(
    record: &csv::StringRecord,
    col: usize,
    path: &Path,
    line: usize,
) -> Result<u64, DataError> {
    let text = record.get(col).unwrap_or("");
    text.parse().map_err(|_| DataError::Field {
        path: path.to_path_buf(),
        line,
        column: "volume",
        value: text.to_string(),
    })
}

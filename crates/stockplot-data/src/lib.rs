//! Price-file loading for stockplot.
//!
//! File layout: one `<SYMBOL>.csv` per symbol inside a configured data
//! directory. Files are daily OHLCV exports with the vendor column order
//! `Date, Low, Open, Volume, High, Close` and `DD-MM-YYYY` dates.

pub mod error;
pub mod loader;

pub use error::DataError;
pub use loader::DataLoader;

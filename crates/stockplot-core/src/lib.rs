//! Core types for the stockplot application.
//!
//! This crate provides the fundamental data structures with no IO:
//! - `Symbol` - normalized ticker symbol
//! - `PriceRow` - one trading day of OHLCV data
//! - `PriceSeries` - date-ordered rows for one symbol, with date-window filtering
//! - `Dataset` - the series produced by one load call, in request order

pub mod dataset;
pub mod row;
pub mod series;
pub mod symbol;

pub use dataset::Dataset;
pub use row::PriceRow;
pub use series::PriceSeries;
pub use symbol::Symbol;

//! Chart producers for stockplot.
//!
//! Everything here is pure: producers take already-loaded series and return
//! plain value structs for a viewer to paint. No file IO, no UI types.
//!
//! - `comparison` - close-price lines for several symbols
//! - `donut` - latest-close ranking as ring slices
//! - `candlestick` - up/down partitioned daily candles
//! - `axis` - tick selection shared by the viewers

pub mod axis;
pub mod candles;
pub mod compare;
pub mod donut;
pub mod palette;

pub use candles::{candlestick, CandleBar, CandleChart};
pub use compare::{comparison, LineChart, LineSeries};
pub use donut::{donut, DonutChart, DonutSlice};

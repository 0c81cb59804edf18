//! Single-symbol candlestick chart.

use chrono::NaiveDate;
use stockplot_core::{PriceSeries, Symbol};

// Candle geometry, in slot units.
/// Candle body width as a share of its slot.
pub const BODY_WIDTH: f32 = 0.8;
/// Horizontal distance between slot centers.
pub const SLOT_SPACING: f32 = 1.2;
/// Wick width as a share of the slot spacing.
pub const WICK_RATIO: f32 = 0.08;

/// One candle, pinned to its slot on the x axis.
#[derive(Debug, Clone, Copy)]
pub struct CandleBar {
    /// Position in the filtered sequence; up and down bars interleave by
    /// slot when painted.
    pub slot: usize,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Up/down partitioned candles for one symbol.
#[derive(Debug, Clone)]
pub struct CandleChart {
    pub symbol: Symbol,
    /// Days that closed at or above their open. Painted green.
    pub up: Vec<CandleBar>,
    /// Days that closed below their open. Painted red.
    pub down: Vec<CandleBar>,
    /// Total slot count across both groups.
    pub slots: usize,
}

impl CandleChart {
    pub fn is_empty(&self) -> bool {
        self.slots == 0
    }

    /// Lowest low and highest high across both groups, ignoring NaN bars.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for bar in self.up.iter().chain(self.down.iter()) {
            if !bar.low.is_finite() || !bar.high.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(bar.low), max.max(bar.high)),
                None => (bar.low, bar.high),
            });
        }
        bounds
    }

    /// Date of the bar occupying a slot.
    pub fn date_at(&self, slot: usize) -> Option<NaiveDate> {
        self.up
            .iter()
            .chain(self.down.iter())
            .find(|bar| bar.slot == slot)
            .map(|bar| bar.date)
    }
}

/// Builds a candle chart for the `(start, end]` window of one series.
///
/// Bars partition by direction: `close >= open` is up, `close < open` is
/// down. Every bar keeps its slot in the filtered sequence, so the painter
/// can interleave the groups back into date order.
pub fn candlestick(
    series: &PriceSeries,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> CandleChart {
    let windowed = series.between(start, end);

    let mut up = Vec::new();
    let mut down = Vec::new();
    for (slot, row) in windowed.iter().enumerate() {
        let bar = CandleBar {
            slot,
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
        };
        if row.is_up() {
            up.push(bar);
        } else {
            down.push(bar);
        }
    }

    log::debug!(
        "candle chart for {}: {} up, {} down",
        series.symbol(),
        up.len(),
        down.len()
    );

    CandleChart {
        symbol: series.symbol().clone(),
        slots: up.len() + down.len(),
        up,
        down,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockplot_core::PriceRow;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    /// One row per (open, close) pair, one day apart.
    fn series_from_pairs(pairs: &[(f64, f64)]) -> PriceSeries {
        let rows = pairs
            .iter()
            .enumerate()
            .map(|(i, &(open, close))| {
                let high = open.max(close) + 1.0;
                let low = open.min(close) - 1.0;
                PriceRow::new(day(i as u32 + 1), open, high, low, close, 100)
            })
            .collect();
        PriceSeries::new(Symbol::new("TEST"), rows)
    }

    #[test]
    fn test_groups_partition_the_series_exactly() {
        let series = series_from_pairs(&[
            (10.0, 11.0), // up
            (11.0, 9.0),  // down
            (9.0, 9.0),   // flat counts as up
            (9.0, 12.0),  // up
            (12.0, 10.0), // down
        ]);
        let chart = candlestick(&series, None, None);

        assert!(chart.up.iter().all(|b| b.close >= b.open));
        assert!(chart.down.iter().all(|b| b.close < b.open));
        assert_eq!(chart.up.len() + chart.down.len(), series.len());

        // Every slot is used exactly once.
        let mut slots: Vec<usize> = chart
            .up
            .iter()
            .chain(chart.down.iter())
            .map(|b| b.slot)
            .collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_window_is_start_exclusive_end_inclusive() {
        let series = series_from_pairs(&[(1.0, 2.0); 6]);
        let chart = candlestick(&series, Some(day(2)), Some(day(5)));

        assert_eq!(chart.slots, 3); // days 3, 4, 5
        assert_eq!(chart.date_at(0), Some(day(3)));
        assert_eq!(chart.date_at(2), Some(day(5)));
    }

    #[test]
    fn test_slots_keep_date_order_across_groups() {
        let series = series_from_pairs(&[(10.0, 11.0), (11.0, 9.0), (9.0, 10.0)]);
        let chart = candlestick(&series, None, None);

        assert_eq!(chart.up.iter().map(|b| b.slot).collect::<Vec<_>>(), [0, 2]);
        assert_eq!(chart.down[0].slot, 1);
        assert_eq!(chart.date_at(1), Some(day(2)));
    }

    #[test]
    fn test_price_bounds_cover_wicks() {
        let series = series_from_pairs(&[(10.0, 11.0), (11.0, 8.0)]);
        let chart = candlestick(&series, None, None);
        // Lows/highs extend one unit past the bodies.
        assert_eq!(chart.price_bounds(), Some((7.0, 12.0)));
    }
}

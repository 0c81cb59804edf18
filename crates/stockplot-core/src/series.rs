//! Date-ordered price series for one symbol.

use chrono::NaiveDate;

use crate::{PriceRow, Symbol};

/// The loaded rows for one symbol, in ascending date order.
///
/// Row order is taken from the source file as-is; loaders rely on the files
/// being date-ascending and nothing here re-sorts or verifies it.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    symbol: Symbol,
    rows: Vec<PriceRow>,
}

impl PriceSeries {
    pub fn new(symbol: Symbol, rows: Vec<PriceRow>) -> Self {
        Self { symbol, rows }
    }

    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    #[must_use]
    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceRow> {
        self.rows.iter()
    }

    /// Returns the rows inside a date window as a new series.
    ///
    /// `start` is exclusive (strictly after) and `end` is inclusive, so
    /// consecutive windows `(a, b]` and `(b, c]` cover every row exactly
    /// once. `None` leaves that side of the window open. The input series
    /// is never mutated.
    #[must_use]
    pub fn between(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> PriceSeries {
        let rows = self
            .rows
            .iter()
            .filter(|row| start.map_or(true, |s| row.date > s))
            .filter(|row| end.map_or(true, |e| row.date <= e))
            .copied()
            .collect();
        PriceSeries::new(self.symbol.clone(), rows)
    }

    /// Most recent usable close, skipping trailing rows whose close is
    /// missing (NaN).
    #[must_use]
    pub fn latest_close(&self) -> Option<f64> {
        self.rows
            .iter()
            .rev()
            .map(|row| row.close)
            .find(|close| close.is_finite())
    }

    /// Lowest low and highest high over the finite prices in the series.
    #[must_use]
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for row in &self.rows {
            if !row.low.is_finite() || !row.high.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(row.low), max.max(row.high)),
                None => (row.low, row.high),
            });
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    fn make_series(days: &[u32]) -> PriceSeries {
        let rows = days
            .iter()
            .map(|&d| PriceRow::new(day(d), 10.0, 12.0, 9.0, 11.0, 100))
            .collect();
        PriceSeries::new(Symbol::new("TEST"), rows)
    }

    #[test]
    fn test_between_start_is_exclusive() {
        let series = make_series(&[1, 2, 3, 4, 5]);
        let filtered = series.between(Some(day(2)), None);

        let days: Vec<u32> = filtered.iter().map(|r| r.date.day()).collect();
        assert_eq!(days, vec![3, 4, 5]);
    }

    #[test]
    fn test_between_end_is_inclusive() {
        let series = make_series(&[1, 2, 3, 4, 5]);
        let filtered = series.between(None, Some(day(3)));

        let days: Vec<u32> = filtered.iter().map(|r| r.date.day()).collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn test_between_keeps_every_qualifying_row() {
        let series = make_series(&[1, 2, 3, 4, 5, 6, 7]);
        let filtered = series.between(Some(day(3)), Some(day(6)));

        assert!(filtered.iter().all(|r| r.date > day(3) && r.date <= day(6)));
        assert_eq!(filtered.len(), 3); // days 4, 5, 6
    }

    #[test]
    fn test_between_open_window_is_identity() {
        let series = make_series(&[1, 2, 3]);
        let filtered = series.between(None, None);
        assert_eq!(filtered.rows(), series.rows());
    }

    #[test]
    fn test_between_does_not_mutate_input() {
        let series = make_series(&[1, 2, 3, 4]);
        let _ = series.between(Some(day(2)), Some(day(3)));
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn test_latest_close_skips_missing_values() {
        let rows = vec![
            PriceRow::new(day(1), 10.0, 12.0, 9.0, 50.0, 100),
            PriceRow::new(day(2), 10.0, 12.0, 9.0, f64::NAN, 100),
        ];
        let series = PriceSeries::new(Symbol::new("X"), rows);
        assert_eq!(series.latest_close(), Some(50.0));
    }

    #[test]
    fn test_latest_close_empty_series() {
        let series = PriceSeries::new(Symbol::new("X"), Vec::new());
        assert_eq!(series.latest_close(), None);
    }

    #[test]
    fn test_price_bounds_ignore_nan_rows() {
        let rows = vec![
            PriceRow::new(day(1), 10.0, 12.0, 9.0, 11.0, 100),
            PriceRow::new(day(2), 10.0, f64::NAN, f64::NAN, 11.0, 100),
            PriceRow::new(day(3), 10.0, 15.0, 8.0, 11.0, 100),
        ];
        let series = PriceSeries::new(Symbol::new("X"), rows);
        assert_eq!(series.price_bounds(), Some((8.0, 15.0)));
    }
}

//! Close-price comparison chart.

use chrono::NaiveDate;
use stockplot_core::{Dataset, Symbol};

/// One polyline on the comparison chart.
#[derive(Debug, Clone)]
pub struct LineSeries {
    /// Legend label.
    pub symbol: Symbol,
    /// Close price per trading day, date-ascending.
    pub points: Vec<(NaiveDate, f64)>,
}

/// Close prices for several symbols over a shared date axis.
#[derive(Debug, Clone)]
pub struct LineChart {
    /// Series in request order.
    pub series: Vec<LineSeries>,
    /// Fixed distance between value-axis ticks; `None` picks a step
    /// automatically from the value range.
    pub tick_spacing: Option<f64>,
}

impl LineChart {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// Smallest and largest close across all series.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for (_, close) in self.series.iter().flat_map(|s| s.points.iter()) {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(*close), max.max(*close)),
                None => (*close, *close),
            });
        }
        bounds
    }

    /// First and last date across all series.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut bounds: Option<(NaiveDate, NaiveDate)> = None;
        for (date, _) in self.series.iter().flat_map(|s| s.points.iter()) {
            bounds = Some(match bounds {
                Some((first, last)) => (first.min(*date), last.max(*date)),
                None => (*date, *date),
            });
        }
        bounds
    }
}

/// Builds the comparison chart: one close-price line per loaded symbol, in
/// dataset order.
///
/// Rows dated on or before `start` are dropped (the window is open at the
/// start). Rows with a missing close are skipped rather than drawn at zero.
pub fn comparison(
    dataset: &Dataset,
    start: Option<NaiveDate>,
    tick_spacing: Option<f64>,
) -> LineChart {
    let series: Vec<LineSeries> = dataset
        .iter()
        .map(|s| {
            let windowed = s.between(start, None);
            let points = windowed
                .iter()
                .filter(|row| row.close.is_finite())
                .map(|row| (row.date, row.close))
                .collect();
            LineSeries {
                symbol: s.symbol().clone(),
                points,
            }
        })
        .collect();

    log::debug!(
        "comparison chart: {} series, {} points",
        series.len(),
        series.iter().map(|s| s.points.len()).sum::<usize>()
    );

    LineChart {
        series,
        tick_spacing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockplot_core::{PriceRow, PriceSeries};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    fn series_with_closes(symbol: &str, closes: &[f64]) -> PriceSeries {
        let rows = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceRow::new(day(i as u32 + 1), 10.0, 12.0, 9.0, close, 100))
            .collect();
        PriceSeries::new(Symbol::new(symbol), rows)
    }

    #[test]
    fn test_series_follow_dataset_order() {
        let dataset = Dataset::new(vec![
            series_with_closes("GOOG", &[100.0]),
            series_with_closes("AMZN", &[200.0]),
        ]);
        let chart = comparison(&dataset, None, None);

        let order: Vec<&str> = chart.series.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(order, vec!["GOOG", "AMZN"]);
    }

    #[test]
    fn test_start_date_is_exclusive() {
        let dataset = Dataset::new(vec![series_with_closes("GOOG", &[1.0, 2.0, 3.0, 4.0])]);
        let chart = comparison(&dataset, Some(day(2)), None);

        let points = &chart.series[0].points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], (day(3), 3.0));
        assert_eq!(points[1], (day(4), 4.0));
    }

    #[test]
    fn test_missing_closes_are_skipped() {
        let dataset = Dataset::new(vec![series_with_closes("GOOG", &[1.0, f64::NAN, 3.0])]);
        let chart = comparison(&dataset, None, None);

        let points = &chart.series[0].points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], (day(3), 3.0));
    }

    #[test]
    fn test_bounds_span_all_series() {
        let dataset = Dataset::new(vec![
            series_with_closes("A", &[5.0, 40.0]),
            series_with_closes("B", &[15.0, 2.0, 30.0]),
        ]);
        let chart = comparison(&dataset, None, None);

        assert_eq!(chart.value_bounds(), Some((2.0, 40.0)));
        assert_eq!(chart.date_bounds(), Some((day(1), day(3))));
    }

    #[test]
    fn test_tick_spacing_is_carried_through() {
        let dataset = Dataset::new(vec![series_with_closes("GOOG", &[1.0])]);
        let chart = comparison(&dataset, None, Some(200.0));
        assert_eq!(chart.tick_spacing, Some(200.0));
    }
}

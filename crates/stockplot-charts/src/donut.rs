//! Latest-close ranking donut.

use stockplot_core::Symbol;

/// One donut slice.
#[derive(Debug, Clone)]
pub struct DonutSlice {
    pub symbol: Symbol,
    /// Latest close, USD.
    pub value: f64,
    /// Share of the kept total, in `0.0..=1.0`.
    pub fraction: f64,
}

/// The kept slices, sorted by value descending.
#[derive(Debug, Clone)]
pub struct DonutChart {
    pub slices: Vec<DonutSlice>,
    /// Sum of the kept slice values.
    pub total: f64,
}

impl DonutChart {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Ranks symbols by latest close and keeps the `top` most expensive.
///
/// Symbols with no usable close (NaN) and the configured outlier symbols
/// are dropped before ranking.
pub fn donut(closes: &[(Symbol, f64)], exclude: &[Symbol], top: usize) -> DonutChart {
    let mut kept: Vec<(Symbol, f64)> = closes
        .iter()
        .filter(|(_, close)| close.is_finite())
        .filter(|(symbol, _)| !exclude.contains(symbol))
        .cloned()
        .collect();

    // Values are finite after the filter above.
    kept.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
    kept.truncate(top);

    let total: f64 = kept.iter().map(|(_, value)| value).sum();
    let slices: Vec<DonutSlice> = kept
        .into_iter()
        .map(|(symbol, value)| DonutSlice {
            symbol,
            value,
            fraction: if total > 0.0 { value / total } else { 0.0 },
        })
        .collect();

    log::debug!(
        "donut chart: kept {} of {} symbols",
        slices.len(),
        closes.len()
    );

    DonutChart { slices, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closes(pairs: &[(&str, f64)]) -> Vec<(Symbol, f64)> {
        pairs
            .iter()
            .map(|(name, value)| (Symbol::new(name), *value))
            .collect()
    }

    #[test]
    fn test_ranking_drops_nan_and_sorts_descending() {
        let input = closes(&[
            ("A", 150.0),
            ("B", 90.0),
            ("C", 300.0),
            ("D", f64::NAN),
            ("E", 50.0),
        ]);
        let chart = donut(&input, &[], 10);

        let order: Vec<&str> = chart.slices.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B", "E"]);
        assert_eq!(chart.slices[0].value, 300.0);
        assert_eq!(chart.total, 590.0);
    }

    #[test]
    fn test_excluded_outlier_never_ranks() {
        let input = closes(&[("BRK-A", 500_000.0), ("A", 150.0), ("B", 90.0)]);
        let chart = donut(&input, &[Symbol::new("BRK-A")], 10);

        let order: Vec<&str> = chart.slices.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_top_n_truncates_after_sorting() {
        let input: Vec<(Symbol, f64)> = (0..12)
            .map(|i| (Symbol::new(&format!("S{i:02}")), f64::from(i)))
            .collect();
        let chart = donut(&input, &[], 10);

        assert_eq!(chart.slices.len(), 10);
        // The two cheapest symbols fall off the end.
        assert_eq!(chart.slices[0].value, 11.0);
        assert_eq!(chart.slices[9].value, 2.0);
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let input = closes(&[("A", 10.0), ("B", 30.0), ("C", 60.0)]);
        let chart = donut(&input, &[], 10);

        let sum: f64 = chart.slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((chart.slices[0].fraction - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_empty_chart() {
        let chart = donut(&[], &[], 10);
        assert!(chart.is_empty());
        assert_eq!(chart.total, 0.0);
    }
}

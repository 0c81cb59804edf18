//! Ordered collection of loaded series.

use crate::{PriceSeries, Symbol};

/// The result of one load call: one series per requested symbol, kept in
/// request order. Built once per invocation and discarded after the chart
/// is produced.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    series: Vec<PriceSeries>,
}

impl Dataset {
    pub fn new(series: Vec<PriceSeries>) -> Self {
        Self { series }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Iterates series in the order they were requested.
    pub fn iter(&self) -> impl Iterator<Item = &PriceSeries> {
        self.series.iter()
    }

    /// Looks up one symbol's series.
    pub fn get(&self, symbol: &Symbol) -> Option<&PriceSeries> {
        self.series.iter().find(|s| s.symbol() == symbol)
    }

    /// Symbols in request order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.series.iter().map(|s| s.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_dataset(symbols: &[&str]) -> Dataset {
        let series = symbols
            .iter()
            .map(|s| PriceSeries::new(Symbol::new(s), Vec::new()))
            .collect();
        Dataset::new(series)
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let dataset = make_dataset(&["GOOG", "AMZN", "AAPL"]);
        let order: Vec<&str> = dataset.symbols().map(Symbol::as_str).collect();
        assert_eq!(order, vec!["GOOG", "AMZN", "AAPL"]);
    }

    #[test]
    fn test_get_by_symbol() {
        let dataset = make_dataset(&["GOOG", "AMZN"]);
        assert!(dataset.get(&Symbol::new("amzn")).is_some());
        assert!(dataset.get(&Symbol::new("MSFT")).is_none());
    }
}

//! Ticker symbol newtype.

use std::fmt;

/// A stock ticker symbol, normalized to uppercase.
///
/// Symbols double as file stems (`<SYMBOL>.csv`) and chart legend labels,
/// so normalization happens once at construction rather than at every
/// lookup site.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol from raw input, trimming whitespace and uppercasing.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    /// Returns the normalized symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(Symbol::new("goog").as_str(), "GOOG");
        assert_eq!(Symbol::new(" amzn ").as_str(), "AMZN");
    }

    #[test]
    fn test_keeps_punctuated_tickers() {
        assert_eq!(Symbol::new("brk-a").as_str(), "BRK-A");
    }

    #[test]
    fn test_display_matches_as_str() {
        let symbol = Symbol::new("aapl");
        assert_eq!(symbol.to_string(), "AAPL");
    }
}

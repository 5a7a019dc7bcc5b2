//! Stock Universe
//!
//! The fixed snapshot of equities the radar screens. The snapshot is compiled
//! into the binary; nothing is fetched at runtime.

use std::collections::HashSet;

use radar_core::{RadarError, RadarResult, Stock};

const SNAPSHOT: &str = include_str!("../data/stocks.json");

/// Validated, read-only list of stocks.
#[derive(Debug, Clone)]
pub struct StockUniverse {
    stocks: Vec<Stock>,
}

impl StockUniverse {
    /// Parse the snapshot embedded at build time.
    pub fn embedded() -> RadarResult<Self> {
        Self::from_json(SNAPSHOT)
    }

    pub fn from_json(json: &str) -> RadarResult<Self> {
        let stocks: Vec<Stock> = serde_json::from_str(json)
            .map_err(|e| RadarError::InvalidData(format!("Malformed stock snapshot: {}", e)))?;
        Self::new(stocks)
    }

    pub fn new(stocks: Vec<Stock>) -> RadarResult<Self> {
        let mut seen = HashSet::new();
        for stock in &stocks {
            let ticker = stock.ticker.trim();
            if ticker.is_empty() {
                return Err(RadarError::InvalidData(format!(
                    "Stock '{}' has an empty ticker",
                    stock.name
                )));
            }
            if !seen.insert(ticker.to_uppercase()) {
                return Err(RadarError::InvalidData(format!("Duplicate ticker: {}", ticker)));
            }
            if !stock.price.is_finite() || stock.price <= 0.0 {
                return Err(RadarError::InvalidData(format!(
                    "{}: price must be positive, got {}",
                    ticker, stock.price
                )));
            }
            if stock.shares_outstanding < 0.0 {
                return Err(RadarError::InvalidData(format!(
                    "{}: shares outstanding cannot be negative",
                    ticker
                )));
            }
        }

        tracing::debug!("Loaded stock universe with {} stocks", stocks.len());
        Ok(Self { stocks })
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    /// Case-insensitive ticker lookup.
    pub fn find(&self, ticker: &str) -> Option<&Stock> {
        let ticker = ticker.trim();
        self.stocks
            .iter()
            .find(|s| s.ticker.eq_ignore_ascii_case(ticker))
    }

    /// Distinct sectors in first-seen order.
    pub fn sectors(&self) -> Vec<&str> {
        let mut sectors: Vec<&str> = Vec::new();
        for stock in &self.stocks {
            if !sectors.contains(&stock.sector.as_str()) {
                sectors.push(stock.sector.as_str());
            }
        }
        sectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_snapshot_parses() {
        let universe = StockUniverse::embedded().unwrap();
        assert!(universe.len() >= 10);
        assert!(universe.stocks().iter().all(|s| s.price > 0.0));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let universe = StockUniverse::embedded().unwrap();
        let nvda = universe.find("nvda").expect("NVDA in snapshot");
        assert_eq!(nvda.ticker, "NVDA");
        assert!(universe.find("NOPE").is_none());
    }

    #[test]
    fn test_sectors_are_distinct() {
        let universe = StockUniverse::embedded().unwrap();
        let sectors = universe.sectors();
        let unique: HashSet<&str> = sectors.iter().copied().collect();
        assert_eq!(unique.len(), sectors.len());
        assert_eq!(sectors[0], "Semiconductors");
    }

    #[test]
    fn test_rejects_duplicate_tickers() {
        let mut stocks = StockUniverse::embedded().unwrap().stocks().to_vec();
        let mut dup = stocks[0].clone();
        dup.ticker = dup.ticker.to_lowercase();
        stocks.push(dup);
        assert!(matches!(StockUniverse::new(stocks), Err(RadarError::InvalidData(_))));
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let mut stocks = StockUniverse::embedded().unwrap().stocks().to_vec();
        stocks[0].price = 0.0;
        assert!(StockUniverse::new(stocks).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = StockUniverse::from_json("[{\"ticker\": 1}]").unwrap_err();
        assert!(matches!(err, RadarError::InvalidData(_)));
    }
}

//! Screener
//!
//! Applies the user's thresholds to a pass of stock analyses, ranks the
//! survivors by score and aggregates summary statistics for display.

pub mod controls;
pub mod filter;
pub mod summary;

pub use controls::{ControlBounds, ScreenerControls, SliderBounds};
pub use filter::screen;
pub use summary::{summarize, ScreenSummary};

use radar_core::StockAnalysis;

/// Screened list plus its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenResult {
    pub results: Vec<StockAnalysis>,
    pub summary: ScreenSummary,
}

/// Filter, sort and summarize in one step.
pub fn run_screen(analyses: &[StockAnalysis], controls: &ScreenerControls) -> ScreenResult {
    let results = screen(analyses, controls);
    let summary = summarize(&results);
    ScreenResult { results, summary }
}

#[cfg(test)]
pub(crate) mod test_support {
    use radar_core::{IntrinsicValueResult, Stock, StockAnalysis, TagSet};
    use stock_universe::StockUniverse;
    use valuation_engine::ValuationEngine;

    use crate::ScreenerControls;

    /// Hand-built analysis priced at 100 whose intrinsic value implies `margin`.
    pub fn analysis(ticker: &str, score: u32, margin: f64, cagr: f64, debt: f64) -> StockAnalysis {
        let intrinsic_value = 100.0 / (1.0 - margin);
        StockAnalysis {
            stock: Stock {
                ticker: ticker.to_string(),
                name: format!("{} Inc", ticker),
                sector: "Test".into(),
                price: 100.0,
                eps: 4.0,
                free_cash_flow: 1_000_000_000.0,
                shares_outstanding: 200_000_000.0,
                revenue: 5_000_000_000.0,
                revenue_growth: 0.2,
                fcf_growth_rate: 0.2,
                profit_margin: 0.2,
                roic: 0.2,
                debt_to_equity: debt,
                cash_per_share: 1.0,
                five_year_cagr: cagr,
                pe_ratio: 25.0,
                peg_ratio: 1.2,
                discount_rate: 0.1,
                terminal_growth: 0.03,
                moat_rating: 0.7,
            },
            intrinsic: IntrinsicValueResult {
                intrinsic_value,
                terminal_value: intrinsic_value * 0.6,
                cash_flow_sum: intrinsic_value * 0.4 - 1.0,
                margin_of_safety: margin,
            },
            future: Vec::new(),
            score,
            tags: TagSet::new(),
        }
    }

    pub fn embedded_analyses(controls: &ScreenerControls) -> Vec<StockAnalysis> {
        let universe = StockUniverse::embedded().unwrap();
        let engine = ValuationEngine::new(controls.overrides(), 2026).unwrap();
        engine.analyze_all(universe.stocks())
    }
}

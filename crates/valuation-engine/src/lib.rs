//! Valuation Engine
//!
//! Pure per-stock analysis: DCF intrinsic value, forward price projection,
//! multibagger score and qualitative tags. Every result is a function of the
//! stock, the overrides and the base year only.

pub mod intrinsic;
pub mod projection;
pub mod scoring;
pub mod tags;

pub use intrinsic::{intrinsic_value, margin_of_safety, EffectiveRates};
pub use projection::project_future_value;
pub use scoring::{score_stock, ScoreBreakdown, ScoreWeights};
pub use tags::generate_tags;

use radar_core::{RadarResult, Stock, StockAnalysis, ValuationOverrides};

/// Runs full analysis passes under one set of overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationEngine {
    overrides: ValuationOverrides,
    base_year: i32,
}

impl ValuationEngine {
    /// `base_year` labels the projection: year `i` is `base_year + i`.
    pub fn new(overrides: ValuationOverrides, base_year: i32) -> RadarResult<Self> {
        overrides.validate()?;
        Ok(Self {
            overrides,
            base_year,
        })
    }

    pub fn overrides(&self) -> &ValuationOverrides {
        &self.overrides
    }

    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    pub fn analyze(&self, stock: &Stock) -> StockAnalysis {
        let intrinsic = intrinsic_value(stock, Some(&self.overrides));
        let future = project_future_value(
            stock,
            Some(&self.overrides),
            self.overrides.horizon_years,
            self.base_year,
        );
        let score = score_stock(stock, &intrinsic);
        let tags = generate_tags(stock, &intrinsic);

        StockAnalysis {
            stock: stock.clone(),
            intrinsic,
            future,
            score,
            tags,
        }
    }

    /// Analyze every stock, preserving input order.
    pub fn analyze_all(&self, stocks: &[Stock]) -> Vec<StockAnalysis> {
        tracing::debug!(
            "Analyzing {} stocks (horizon {}y, discount {:+.3}, growth {:+.3})",
            stocks.len(),
            self.overrides.horizon_years,
            self.overrides.discount_rate_delta,
            self.overrides.growth_rate_delta
        );
        stocks.iter().map(|stock| self.analyze(stock)).collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use radar_core::Stock;

    /// FCF/share 5, growth 20%, discount 10%, terminal 3%, cash/share 2, price 100.
    pub fn dcf_fixture() -> Stock {
        Stock {
            ticker: "FIXT".into(),
            name: "Fixture Corp".into(),
            sector: "Test".into(),
            price: 100.0,
            eps: 4.0,
            free_cash_flow: 5_000_000_000.0,
            shares_outstanding: 1_000_000_000.0,
            revenue: 40_000_000_000.0,
            revenue_growth: 0.18,
            fcf_growth_rate: 0.20,
            profit_margin: 0.15,
            roic: 0.18,
            debt_to_equity: 0.5,
            cash_per_share: 2.0,
            five_year_cagr: 0.22,
            pe_ratio: 25.0,
            peg_ratio: 1.2,
            discount_rate: 0.10,
            terminal_growth: 0.03,
            moat_rating: 0.7,
        }
    }

    pub fn sample_stock() -> Stock {
        Stock {
            ticker: "SMPL".into(),
            name: "Sample Holdings".into(),
            sector: "Software".into(),
            price: 80.0,
            eps: 2.5,
            free_cash_flow: 900_000_000.0,
            shares_outstanding: 250_000_000.0,
            revenue: 6_000_000_000.0,
            revenue_growth: 0.24,
            fcf_growth_rate: 0.22,
            profit_margin: 0.2,
            roic: 0.19,
            debt_to_equity: 0.45,
            cash_per_share: 6.0,
            five_year_cagr: 0.28,
            pe_ratio: 32.0,
            peg_ratio: 1.3,
            discount_rate: 0.105,
            terminal_growth: 0.03,
            moat_rating: 0.75,
        }
    }
}

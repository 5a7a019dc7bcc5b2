//! Multibagger score: a 0-100 blend of value, growth, quality, leverage and moat.

use radar_core::stats::{clamp, normalize};
use radar_core::{IntrinsicValueResult, Stock};
use serde::Serialize;

/// Weights for the score factors. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub margin: f64,
    pub growth: f64,
    pub quality: f64,
    pub leverage: f64,
    pub moat: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            margin: 0.28,
            growth: 0.30,
            quality: 0.18,
            leverage: 0.10,
            moat: 0.14,
        }
    }
}

/// Normalized factor scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub margin: f64,
    pub growth: f64,
    pub quality: f64,
    pub leverage: f64,
    pub moat: f64,
}

impl ScoreBreakdown {
    pub fn compute(stock: &Stock, intrinsic: &IntrinsicValueResult) -> Self {
        Self {
            margin: normalize(intrinsic.margin_of_safety, -0.2, 0.6),
            growth: normalize(stock.five_year_cagr, 0.1, 0.6),
            quality: normalize(stock.roic, 0.08, 0.35),
            leverage: 1.0 - normalize(stock.debt_to_equity, 0.1, 1.2),
            moat: if stock.moat_rating.is_finite() {
                clamp(stock.moat_rating, 0.0, 1.0)
            } else {
                0.0
            },
        }
    }

    pub fn weighted(&self, weights: &ScoreWeights) -> f64 {
        self.margin * weights.margin
            + self.growth * weights.growth
            + self.quality * weights.quality
            + self.leverage * weights.leverage
            + self.moat * weights.moat
    }
}

/// Score a stock from 0 to 100 using the default weights.
pub fn score_stock(stock: &Stock, intrinsic: &IntrinsicValueResult) -> u32 {
    let weighted = ScoreBreakdown::compute(stock, intrinsic).weighted(&ScoreWeights::default());
    clamp((weighted * 100.0).round(), 0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_stock;
    use crate::intrinsic::intrinsic_value;

    fn with_margin(margin_of_safety: f64) -> IntrinsicValueResult {
        IntrinsicValueResult {
            intrinsic_value: 100.0,
            terminal_value: 60.0,
            cash_flow_sum: 40.0,
            margin_of_safety,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let w = ScoreWeights::default();
        let total = w.margin + w.growth + w.quality + w.leverage + w.moat;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_stock_scores_100() {
        let mut stock = sample_stock();
        stock.five_year_cagr = 0.8;
        stock.roic = 0.5;
        stock.debt_to_equity = 0.0;
        stock.moat_rating = 1.0;
        assert_eq!(score_stock(&stock, &with_margin(0.95)), 100);
    }

    #[test]
    fn test_worst_stock_scores_0() {
        let mut stock = sample_stock();
        stock.five_year_cagr = -0.2;
        stock.roic = -0.1;
        stock.debt_to_equity = 3.0;
        stock.moat_rating = 0.0;
        assert_eq!(score_stock(&stock, &with_margin(-0.9)), 0);
    }

    #[test]
    fn test_midpoint_factors() {
        let mut stock = sample_stock();
        stock.five_year_cagr = 0.35; // growth 0.5
        stock.roic = 0.215; // quality 0.5
        stock.debt_to_equity = 0.65; // leverage 0.5
        stock.moat_rating = 0.5;
        // margin 0.2 normalizes to 0.5, so every factor is 0.5
        assert_eq!(score_stock(&stock, &with_margin(0.2)), 50);
    }

    #[test]
    fn test_breakdown_factors_in_unit_range() {
        let mut stock = sample_stock();
        stock.moat_rating = 1.7;
        stock.debt_to_equity = -0.5;
        let b = ScoreBreakdown::compute(&stock, &with_margin(0.95));
        for f in [b.margin, b.growth, b.quality, b.leverage, b.moat] {
            assert!((0.0..=1.0).contains(&f));
        }
        assert_eq!(b.moat, 1.0);
        assert_eq!(b.leverage, 1.0);
    }

    #[test]
    fn test_score_always_in_range() {
        let mut stock = sample_stock();
        for cagr in [-1.0, 0.0, 0.2, 0.5, 3.0] {
            for debt in [-1.0, 0.0, 0.6, 5.0] {
                stock.five_year_cagr = cagr;
                stock.debt_to_equity = debt;
                let intrinsic = intrinsic_value(&stock, None);
                assert!(score_stock(&stock, &intrinsic) <= 100);
            }
        }
    }

    #[test]
    fn test_non_finite_inputs_do_not_escape() {
        let mut stock = sample_stock();
        stock.roic = f64::NAN;
        stock.moat_rating = f64::NAN;
        let score = score_stock(&stock, &with_margin(f64::NAN));
        assert!(score <= 100);
    }
}

//! Presentation payloads: analyses flattened with preformatted display strings.

use radar_core::{
    CurrencyFormatter, FutureProjectionPoint, IntrinsicValueResult, PercentFormatter, Stock,
    StockAnalysis, TagSet,
};
use screener::ScreenSummary;
use serde::Serialize;
use valuation_engine::ScoreBreakdown;

/// Formatters shared by every card. Built once in `AppState`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayFormat {
    pub currency: CurrencyFormatter,
    pub percent: PercentFormatter,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            currency: CurrencyFormatter::usd(0),
            percent: PercentFormatter::new(1),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CardDisplay {
    pub price: String,
    pub intrinsic_value: String,
    pub margin_of_safety: String,
    pub upside: String,
    pub five_year_cagr: String,
    pub revenue_growth: String,
    pub roic: String,
    pub debt_to_equity: String,
    pub moat: String,
    pub discounted_cash_flow: String,
    pub terminal_value: String,
    pub fcf_per_share: String,
    pub pe_peg: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FactorScores {
    pub margin: f64,
    pub growth: f64,
    pub quality: f64,
    pub leverage: f64,
    pub moat: f64,
}

impl From<ScoreBreakdown> for FactorScores {
    fn from(b: ScoreBreakdown) -> Self {
        Self {
            margin: b.margin,
            growth: b.growth,
            quality: b.quality,
            leverage: b.leverage,
            moat: b.moat,
        }
    }
}

/// One stock card as the dashboard renders it.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AnalysisCard {
    pub stock: Stock,
    pub intrinsic: IntrinsicValueResult,
    pub future: Vec<FutureProjectionPoint>,
    pub score: u32,
    pub tags: TagSet,
    pub upside: f64,
    pub fcf_per_share: f64,
    pub factors: FactorScores,
    pub display: CardDisplay,
}

impl AnalysisCard {
    pub fn build(analysis: &StockAnalysis, fmt: &DisplayFormat) -> Self {
        let stock = &analysis.stock;
        let intrinsic = &analysis.intrinsic;
        let upside = analysis.upside();
        let fcf_per_share = stock.fcf_per_share();

        let display = CardDisplay {
            price: CurrencyFormatter::usd(2).format(stock.price),
            intrinsic_value: fmt.currency.format(intrinsic.intrinsic_value),
            margin_of_safety: fmt.percent.format(intrinsic.margin_of_safety),
            upside: format!("{}%", (upside * 100.0).round() as i64),
            five_year_cagr: fmt.percent.format(stock.five_year_cagr),
            revenue_growth: fmt.percent.format(stock.revenue_growth),
            roic: fmt.percent.format(stock.roic),
            debt_to_equity: format!("{:.2}", stock.debt_to_equity),
            moat: format!("{}/100", (stock.moat_rating * 100.0).round() as i64),
            discounted_cash_flow: fmt.currency.format(intrinsic.cash_flow_sum),
            terminal_value: fmt.currency.format(intrinsic.terminal_value),
            fcf_per_share: fmt.currency.format(fcf_per_share),
            pe_peg: format!("{:.1} • {:.2}", stock.pe_ratio, stock.peg_ratio),
        };

        Self {
            stock: stock.clone(),
            intrinsic: *intrinsic,
            future: analysis.future.clone(),
            score: analysis.score,
            tags: analysis.tags.clone(),
            upside,
            fcf_per_share,
            factors: ScoreBreakdown::compute(stock, intrinsic).into(),
            display,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct SummaryDisplay {
    pub count: String,
    pub avg_margin: String,
    pub avg_upside: String,
    pub best_intrinsic: String,
}

impl SummaryDisplay {
    pub fn build(summary: &ScreenSummary, fmt: &DisplayFormat) -> Self {
        Self {
            count: summary.count.to_string(),
            avg_margin: fmt.percent.format(summary.avg_margin),
            avg_upside: fmt.percent.format(summary.avg_upside),
            best_intrinsic: if summary.best_intrinsic == 0.0 {
                "—".to_string()
            } else {
                fmt.currency.format(summary.best_intrinsic)
            },
        }
    }
}

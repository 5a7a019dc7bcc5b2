use radar_core::stats::clamp;
use radar_core::{IntrinsicValueResult, Stock, ValuationOverrides};

const DISCOUNT_RATE_FLOOR: f64 = 0.06;
const DISCOUNT_RATE_CAP: f64 = 0.22;
const GROWTH_RATE_FLOOR: f64 = 0.02;
const GROWTH_RATE_CAP: f64 = 0.45;
const TERMINAL_GROWTH_FLOOR: f64 = 0.01;
/// Terminal growth always stays this far below the discount rate.
const TERMINAL_SPREAD: f64 = 0.01;
/// Share of the growth adjustment that carries into perpetuity.
const TERMINAL_GROWTH_PASS_THROUGH: f64 = 0.35;

pub const MARGIN_FLOOR: f64 = -0.9;
pub const MARGIN_CAP: f64 = 0.95;

/// Rates actually used by the DCF after overrides and clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveRates {
    pub discount_rate: f64,
    pub growth_rate: f64,
    pub terminal_growth: f64,
}

impl EffectiveRates {
    pub fn resolve(stock: &Stock, overrides: &ValuationOverrides) -> Self {
        let discount_rate = clamp(
            stock.discount_rate + overrides.discount_rate_delta,
            DISCOUNT_RATE_FLOOR,
            DISCOUNT_RATE_CAP,
        );
        let growth_rate = clamp(
            stock.fcf_growth_rate + overrides.growth_rate_delta,
            GROWTH_RATE_FLOOR,
            GROWTH_RATE_CAP,
        );
        let terminal_growth = clamp(
            stock.terminal_growth + overrides.growth_rate_delta * TERMINAL_GROWTH_PASS_THROUGH,
            TERMINAL_GROWTH_FLOOR,
            discount_rate - TERMINAL_SPREAD,
        );
        Self {
            discount_rate,
            growth_rate,
            terminal_growth,
        }
    }
}

/// Discounted-cash-flow intrinsic value per share.
///
/// Free cash flow per share compounds at the effective growth rate for
/// `horizon_years`, each year discounted back at the effective discount rate.
/// The final year's cash flow then grows into a perpetuity at the terminal rate,
/// also discounted back. Cash per share is added on top.
///
/// `None` overrides means the default horizon with no rate adjustments.
pub fn intrinsic_value(stock: &Stock, overrides: Option<&ValuationOverrides>) -> IntrinsicValueResult {
    let overrides = overrides.copied().unwrap_or_default();
    let rates = EffectiveRates::resolve(stock, &overrides);
    let horizon = overrides.horizon_years as i32;

    let mut projected_cash_flow = stock.fcf_per_share();
    let mut cash_flow_sum = 0.0;
    for year in 1..=horizon {
        projected_cash_flow *= 1.0 + rates.growth_rate;
        cash_flow_sum += projected_cash_flow / (1.0 + rates.discount_rate).powi(year);
    }

    let terminal_cash_flow = projected_cash_flow * (1.0 + rates.terminal_growth);
    let undiscounted_terminal = terminal_cash_flow / (rates.discount_rate - rates.terminal_growth);
    let terminal_value = undiscounted_terminal / (1.0 + rates.discount_rate).powi(horizon);

    let intrinsic = cash_flow_sum + terminal_value + stock.cash_per_share;

    IntrinsicValueResult {
        intrinsic_value: intrinsic,
        terminal_value,
        cash_flow_sum,
        margin_of_safety: margin_of_safety(intrinsic, stock.price),
    }
}

/// `(intrinsic - price) / intrinsic`, clamped to [-0.9, 0.95].
///
/// A stock with no positive intrinsic value gets the floor: dividing by a
/// negative value would otherwise report a large margin for a worthless stock.
pub fn margin_of_safety(intrinsic: f64, price: f64) -> f64 {
    if !intrinsic.is_finite() || intrinsic <= 0.0 {
        return MARGIN_FLOOR;
    }
    let raw = (intrinsic - price) / intrinsic;
    if !raw.is_finite() {
        return MARGIN_FLOOR;
    }
    clamp(raw, MARGIN_FLOOR, MARGIN_CAP)
}

//! Screener control state: filter thresholds plus the valuation overrides
//! used upstream, with the slider bounds the dashboard exposes.

use radar_core::{RadarError, RadarResult, StockAnalysis, ValuationOverrides, DEFAULT_HORIZON_YEARS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema, utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(default)]
pub struct ScreenerControls {
    /// Minimum multibagger score (inclusive)
    #[serde(alias = "minScore")]
    pub min_score: u32,
    /// Minimum margin of safety (inclusive)
    #[serde(alias = "minMargin")]
    pub min_margin: f64,
    /// Minimum five-year CAGR (inclusive)
    #[serde(alias = "minCagr")]
    pub min_cagr: f64,
    /// Maximum debt/equity (inclusive)
    #[serde(alias = "maxDebt")]
    pub max_debt: f64,
    #[serde(alias = "horizonYears")]
    pub horizon_years: u32,
    #[serde(alias = "discountRateDelta")]
    pub discount_rate_delta: f64,
    #[serde(alias = "growthRateDelta")]
    pub growth_rate_delta: f64,
}

impl Default for ScreenerControls {
    fn default() -> Self {
        Self {
            min_score: 68,
            min_margin: 0.12,
            min_cagr: 0.22,
            max_debt: 0.75,
            horizon_years: DEFAULT_HORIZON_YEARS,
            discount_rate_delta: 0.0,
            growth_rate_delta: 0.0,
        }
    }
}

impl ScreenerControls {
    pub fn overrides(&self) -> ValuationOverrides {
        ValuationOverrides {
            horizon_years: self.horizon_years,
            discount_rate_delta: self.discount_rate_delta,
            growth_rate_delta: self.growth_rate_delta,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        self.overrides().validate()?;
        for (name, value) in [
            ("min_margin", self.min_margin),
            ("min_cagr", self.min_cagr),
            ("max_debt", self.max_debt),
        ] {
            if value.is_nan() {
                return Err(RadarError::InvalidInput(format!("{} must be a number", name)));
            }
        }
        Ok(())
    }

    /// True when the analysis clears all four thresholds.
    pub fn matches(&self, analysis: &StockAnalysis) -> bool {
        analysis.score >= self.min_score
            && analysis.intrinsic.margin_of_safety >= self.min_margin
            && analysis.stock.five_year_cagr >= self.min_cagr
            && analysis.stock.debt_to_equity <= self.max_debt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderBounds {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ranges of the dashboard sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ControlBounds {
    pub min_score: SliderBounds,
    pub min_margin: SliderBounds,
    pub min_cagr: SliderBounds,
    pub max_debt: SliderBounds,
    pub horizon_years: SliderBounds,
    pub discount_rate_delta: SliderBounds,
    pub growth_rate_delta: SliderBounds,
}

impl Default for ControlBounds {
    fn default() -> Self {
        Self {
            min_score: SliderBounds::new(40.0, 95.0, 1.0),
            min_margin: SliderBounds::new(-0.1, 0.6, 0.01),
            min_cagr: SliderBounds::new(0.1, 0.6, 0.01),
            max_debt: SliderBounds::new(0.1, 1.2, 0.01),
            horizon_years: SliderBounds::new(5.0, 15.0, 1.0),
            discount_rate_delta: SliderBounds::new(-0.04, 0.04, 0.005),
            growth_rate_delta: SliderBounds::new(-0.08, 0.08, 0.005),
        }
    }
}

impl ControlBounds {
    /// Names of the controls whose value falls outside its slider.
    pub fn out_of_range(&self, controls: &ScreenerControls) -> Vec<&'static str> {
        [
            ("min_score", self.min_score, controls.min_score as f64),
            ("min_margin", self.min_margin, controls.min_margin),
            ("min_cagr", self.min_cagr, controls.min_cagr),
            ("max_debt", self.max_debt, controls.max_debt),
            ("horizon_years", self.horizon_years, controls.horizon_years as f64),
            ("discount_rate_delta", self.discount_rate_delta, controls.discount_rate_delta),
            ("growth_rate_delta", self.growth_rate_delta, controls.growth_rate_delta),
        ]
        .into_iter()
        .filter(|(_, bounds, value)| !bounds.contains(*value))
        .map(|(name, _, _)| name)
        .collect()
    }
}

use serde::{Deserialize, Deserializer, Serialize};

use crate::stats::finite_or_zero;
use crate::{RadarError, RadarResult};

pub const MIN_HORIZON_YEARS: u32 = 5;
pub const MAX_HORIZON_YEARS: u32 = 15;
pub const DEFAULT_HORIZON_YEARS: u32 = 10;

/// One equity in the screening universe.
///
/// All rate fields are decimal fractions (0.20 = 20%), never percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Stock {
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub price: f64,
    pub eps: f64,
    /// Total free cash flow in USD
    pub free_cash_flow: f64,
    pub shares_outstanding: f64,
    /// Total revenue in USD
    pub revenue: f64,
    pub revenue_growth: f64,
    pub fcf_growth_rate: f64,
    pub profit_margin: f64,
    pub roic: f64,
    pub debt_to_equity: f64,
    pub cash_per_share: f64,
    pub five_year_cagr: f64,
    pub pe_ratio: f64,
    pub peg_ratio: f64,
    pub discount_rate: f64,
    pub terminal_growth: f64,
    /// Competitive moat, 0.0 to 1.0
    pub moat_rating: f64,
}

impl Stock {
    /// Free cash flow per share, 0.0 when shares outstanding is zero.
    pub fn fcf_per_share(&self) -> f64 {
        finite_or_zero(self.free_cash_flow / self.shares_outstanding)
    }
}

/// User-controlled model adjustments applied uniformly to every stock in a pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValuationOverrides {
    pub horizon_years: u32,
    pub discount_rate_delta: f64,
    pub growth_rate_delta: f64,
}

impl Default for ValuationOverrides {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            discount_rate_delta: 0.0,
            growth_rate_delta: 0.0,
        }
    }
}

impl ValuationOverrides {
    pub fn new(horizon_years: u32, discount_rate_delta: f64, growth_rate_delta: f64) -> RadarResult<Self> {
        let overrides = Self {
            horizon_years,
            discount_rate_delta,
            growth_rate_delta,
        };
        overrides.validate()?;
        Ok(overrides)
    }

    pub fn validate(&self) -> RadarResult<()> {
        if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&self.horizon_years) {
            return Err(RadarError::InvalidInput(format!(
                "horizon_years must be between {} and {}, got {}",
                MIN_HORIZON_YEARS, MAX_HORIZON_YEARS, self.horizon_years
            )));
        }
        if !self.discount_rate_delta.is_finite() {
            return Err(RadarError::InvalidInput(
                "discount_rate_delta must be a finite number".to_string(),
            ));
        }
        if !self.growth_rate_delta.is_finite() {
            return Err(RadarError::InvalidInput(
                "growth_rate_delta must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Discounted-cash-flow valuation of a single stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IntrinsicValueResult {
    pub intrinsic_value: f64,
    /// Terminal value, discounted back to today
    pub terminal_value: f64,
    /// Sum of discounted cash flows over the explicit horizon
    pub cash_flow_sum: f64,
    /// Clamped to [-0.9, 0.95]
    pub margin_of_safety: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FutureProjectionPoint {
    pub year: i32,
    pub projected_price: f64,
    pub optimistic: f64,
    pub pessimistic: f64,
}

/// Qualitative label attached to an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Tag {
    #[serde(rename = "Deep Value")]
    DeepValue,
    #[serde(rename = "High Growth")]
    HighGrowth,
    #[serde(rename = "High ROIC")]
    HighRoic,
    #[serde(rename = "Low Leverage")]
    LowLeverage,
    #[serde(rename = "Wide Moat")]
    WideMoat,
    #[serde(rename = "Elite Margins")]
    EliteMargins,
    #[serde(rename = "Growth At Reasonable Price")]
    GrowthAtReasonablePrice,
    #[serde(rename = "Potential Multibagger")]
    PotentialMultibagger,
}

impl Tag {
    pub fn label(&self) -> &'static str {
        match self {
            Tag::DeepValue => "Deep Value",
            Tag::HighGrowth => "High Growth",
            Tag::HighRoic => "High ROIC",
            Tag::LowLeverage => "Low Leverage",
            Tag::WideMoat => "Wide Moat",
            Tag::EliteMargins => "Elite Margins",
            Tag::GrowthAtReasonablePrice => "Growth At Reasonable Price",
            Tag::PotentialMultibagger => "Potential Multibagger",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Insertion-ordered set of tags. Re-inserting a tag is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns false if the tag was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|tag| tag.label()).collect()
    }
}

// Deserialize through insert so duplicates in the input collapse.
impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<Tag>::deserialize(deserializer)?.into_iter().collect())
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// Everything derived for one stock in one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StockAnalysis {
    pub stock: Stock,
    pub intrinsic: IntrinsicValueResult,
    pub future: Vec<FutureProjectionPoint>,
    /// Multibagger score, 0 to 100
    pub score: u32,
    pub tags: TagSet,
}

impl StockAnalysis {
    /// Intrinsic value relative to price, minus one. 0.0 for a zero price.
    pub fn upside(&self) -> f64 {
        finite_or_zero(self.intrinsic.intrinsic_value / self.stock.price - 1.0)
    }
}

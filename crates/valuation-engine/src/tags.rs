use radar_core::{IntrinsicValueResult, Stock, Tag, TagSet};

/// Attach qualitative labels. Each tag is gated by its own fixed threshold;
/// any subset, including none, is possible.
pub fn generate_tags(stock: &Stock, intrinsic: &IntrinsicValueResult) -> TagSet {
    let mut tags = TagSet::new();
    if intrinsic.margin_of_safety > 0.25 {
        tags.insert(Tag::DeepValue);
    }
    if stock.five_year_cagr > 0.35 {
        tags.insert(Tag::HighGrowth);
    }
    if stock.roic > 0.2 {
        tags.insert(Tag::HighRoic);
    }
    if stock.debt_to_equity < 0.4 {
        tags.insert(Tag::LowLeverage);
    }
    if stock.moat_rating > 0.85 {
        tags.insert(Tag::WideMoat);
    }
    if stock.profit_margin > 0.25 {
        tags.insert(Tag::EliteMargins);
    }
    if stock.pe_ratio < 35.0 && stock.five_year_cagr > 0.25 {
        tags.insert(Tag::GrowthAtReasonablePrice);
    }
    if intrinsic.intrinsic_value > stock.price * 1.5 {
        tags.insert(Tag::PotentialMultibagger);
    }
    tags
}

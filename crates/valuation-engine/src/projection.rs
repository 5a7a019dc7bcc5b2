use radar_core::stats::clamp;
use radar_core::{FutureProjectionPoint, Stock, ValuationOverrides};

const BASE_GROWTH_FLOOR: f64 = 0.02;
const BASE_GROWTH_CAP: f64 = 0.6;
const OPTIMISTIC_SPREAD: f64 = 0.06;
const PESSIMISTIC_SPREAD: f64 = 0.04;
const PESSIMISTIC_FLOOR: f64 = 0.02;

/// Project the share price forward `years` years from `base_year`.
///
/// The base scenario compounds at the five-year CAGR (plus the growth
/// adjustment); the optimistic and pessimistic bands sit above and below it.
/// Point `i` is labeled `base_year + i`.
pub fn project_future_value(
    stock: &Stock,
    overrides: Option<&ValuationOverrides>,
    years: u32,
    base_year: i32,
) -> Vec<FutureProjectionPoint> {
    let growth_delta = overrides.map_or(0.0, |o| o.growth_rate_delta);
    let base_growth = clamp(stock.five_year_cagr + growth_delta, BASE_GROWTH_FLOOR, BASE_GROWTH_CAP);
    let optimistic_growth = base_growth + OPTIMISTIC_SPREAD;
    let pessimistic_growth = (base_growth - PESSIMISTIC_SPREAD).max(PESSIMISTIC_FLOOR);

    (1..=years as i32)
        .map(|i| FutureProjectionPoint {
            year: base_year + i,
            projected_price: stock.price * (1.0 + base_growth).powi(i),
            optimistic: stock.price * (1.0 + optimistic_growth).powi(i),
            pessimistic: stock.price * (1.0 + pessimistic_growth).powi(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_stock;

    #[test]
    fn test_one_point_per_year_labeled_from_base_year() {
        let points = project_future_value(&sample_stock(), None, 10, 2026);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0].year, 2027);
        assert_eq!(points[9].year, 2036);
    }

    #[test]
    fn test_zero_years_is_empty() {
        assert!(project_future_value(&sample_stock(), None, 0, 2026).is_empty());
    }

    #[test]
    fn test_compounding_matches_cagr() {
        let mut stock = sample_stock();
        stock.price = 100.0;
        stock.five_year_cagr = 0.25;
        let points = project_future_value(&stock, None, 2, 2026);

        assert!((points[0].projected_price - 125.0).abs() < 1e-9);
        assert!((points[1].projected_price - 156.25).abs() < 1e-9);
        assert!((points[0].optimistic - 131.0).abs() < 1e-9);
        assert!((points[0].pessimistic - 121.0).abs() < 1e-9);
    }

    #[test]
    fn test_bands_bracket_base_case() {
        let points = project_future_value(&sample_stock(), None, 15, 2026);
        for p in &points {
            assert!(p.optimistic > p.projected_price);
            assert!(p.pessimistic <= p.projected_price);
        }
    }

    #[test]
    fn test_low_growth_pessimistic_floor() {
        let mut stock = sample_stock();
        stock.price = 100.0;
        stock.five_year_cagr = -0.3;
        let points = project_future_value(&stock, None, 1, 2026);
        // Base growth floors at 2%, pessimistic cannot drop below 2% either
        assert!((points[0].projected_price - 102.0).abs() < 1e-9);
        assert!((points[0].pessimistic - 102.0).abs() < 1e-9);
    }

    #[test]
    fn test_growth_delta_shifts_projection() {
        let stock = sample_stock();
        let overrides = ValuationOverrides {
            growth_rate_delta: 0.05,
            ..Default::default()
        };
        let base = project_future_value(&stock, None, 5, 2026);
        let boosted = project_future_value(&stock, Some(&overrides), 5, 2026);
        assert!(boosted[4].projected_price > base[4].projected_price);
    }
}

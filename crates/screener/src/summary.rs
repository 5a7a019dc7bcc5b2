use radar_core::stats::mean;
use radar_core::StockAnalysis;
use serde::Serialize;

/// Aggregate statistics over a screened list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScreenSummary {
    pub count: usize,
    pub avg_margin: f64,
    /// Mean of intrinsic / price - 1
    pub avg_upside: f64,
    /// Intrinsic value of the top-scoring entry
    pub best_intrinsic: f64,
    pub top_name: String,
}

/// Summarize a screened list. An empty list gives the zeroed summary.
///
/// The top entry is the highest score, earliest on ties, which is the first
/// element of a list produced by [`crate::screen`].
pub fn summarize(analyses: &[StockAnalysis]) -> ScreenSummary {
    let Some(first) = analyses.first() else {
        return ScreenSummary::default();
    };

    let top = analyses
        .iter()
        .fold(first, |best, a| if a.score > best.score { a } else { best });

    let margins: Vec<f64> = analyses.iter().map(|a| a.intrinsic.margin_of_safety).collect();
    let upsides: Vec<f64> = analyses.iter().map(StockAnalysis::upside).collect();

    ScreenSummary {
        count: analyses.len(),
        avg_margin: mean(&margins),
        avg_upside: mean(&upsides),
        best_intrinsic: top.intrinsic.intrinsic_value,
        top_name: top.stock.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::analysis;

    #[test]
    fn test_empty_is_zeroed() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_margin, 0.0);
        assert_eq!(summary.avg_upside, 0.0);
        assert_eq!(summary.best_intrinsic, 0.0);
        assert_eq!(summary.top_name, "");
    }

    #[test]
    fn test_means_and_top_entry() {
        // analysis() prices at 100 with intrinsic = 100 / (1 - margin)
        let a = analysis("AAA", 90, 0.5, 0.3, 0.2);
        let b = analysis("BBB", 70, 0.2, 0.3, 0.2);
        let summary = summarize(&[a.clone(), b.clone()]);

        assert_eq!(summary.count, 2);
        assert!((summary.avg_margin - 0.35).abs() < 1e-9);
        let expected_upside = (a.upside() + b.upside()) / 2.0;
        assert!((summary.avg_upside - expected_upside).abs() < 1e-9);
        assert!((summary.avg_upside - 0.625).abs() < 1e-9);
        assert_eq!(summary.top_name, "AAA Inc");
        assert!((summary.best_intrinsic - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_entry_is_first_on_ties() {
        let a = analysis("AAA", 80, 0.3, 0.3, 0.2);
        let b = analysis("BBB", 80, 0.4, 0.3, 0.2);
        assert_eq!(summarize(&[a, b]).top_name, "AAA Inc");
    }
}

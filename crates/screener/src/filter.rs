use radar_core::StockAnalysis;

use crate::controls::ScreenerControls;

/// Keep the analyses that clear every threshold, best score first.
///
/// The sort is stable and compares scores only, so equal scores keep their
/// input order.
pub fn screen(analyses: &[StockAnalysis], controls: &ScreenerControls) -> Vec<StockAnalysis> {
    let mut matched: Vec<StockAnalysis> = analyses
        .iter()
        .filter(|a| controls.matches(a))
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        "Screened {} of {} analyses (min score {})",
        matched.len(),
        analyses.len(),
        controls.min_score
    );
    matched
}

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use radar_core::{RadarResult, StockAnalysis, ValuationOverrides};
use stock_universe::StockUniverse;
use valuation_engine::ValuationEngine;

struct CacheEntry {
    analyses: Arc<Vec<StockAnalysis>>,
    cached_at: DateTime<Utc>,
}

/// Memoized analysis passes keyed by (overrides, base year).
///
/// The universe is static and every pass is pure, so entries never go stale;
/// the map is simply cleared once it reaches `capacity`.
pub struct AnalysisCache {
    entries: DashMap<String, CacheEntry>,
    capacity: usize,
}

impl AnalysisCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_or_compute(
        &self,
        universe: &StockUniverse,
        overrides: &ValuationOverrides,
        base_year: i32,
    ) -> RadarResult<Arc<Vec<StockAnalysis>>> {
        let cache_key = format!(
            "{}:{}:{}:{}",
            overrides.horizon_years, overrides.discount_rate_delta, overrides.growth_rate_delta, base_year
        );
        if let Some(entry) = self.entries.get(&cache_key) {
            tracing::debug!(
                "Analysis cache hit for {} (cached {}s ago)",
                cache_key,
                (Utc::now() - entry.cached_at).num_seconds()
            );
            return Ok(Arc::clone(&entry.analyses));
        }

        let engine = ValuationEngine::new(*overrides, base_year)?;
        let analyses = Arc::new(engine.analyze_all(universe.stocks()));

        if self.capacity == 0 {
            return Ok(analyses);
        }
        if self.entries.len() >= self.capacity {
            tracing::debug!("Analysis cache full ({} entries), clearing", self.entries.len());
            self.entries.clear();
        }
        self.entries.insert(
            cache_key,
            CacheEntry {
                analyses: Arc::clone(&analyses),
                cached_at: Utc::now(),
            },
        );
        Ok(analyses)
    }
}

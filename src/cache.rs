use crate::config::MiningParams;
use crate::error::Result;
use crate::pipeline::{mine, Dataset, MiningResult};
use fnv::FnvHashMap;
use ordered_float::OrderedFloat;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    dataset: u64,
    min_support: OrderedFloat<f64>,
    min_confidence: OrderedFloat<f64>,
    min_lift: OrderedFloat<f64>,
    max_len: usize,
}

impl CacheKey {
    pub fn new(dataset: &Dataset, params: &MiningParams) -> CacheKey {
        CacheKey {
            dataset: dataset.fingerprint(),
            min_support: OrderedFloat(params.min_support),
            min_confidence: OrderedFloat(params.min_confidence),
            min_lift: OrderedFloat(params.min_lift),
            max_len: params.max_len,
        }
    }
}

// Memoizes `mine` by dataset and thresholds. Mining is a pure function of
// those, so a hit returns exactly what a fresh run would.
#[derive(Default)]
pub struct MiningCache {
    entries: FnvHashMap<CacheKey, Arc<MiningResult>>,
}

impl MiningCache {
    pub fn new() -> MiningCache {
        MiningCache::default()
    }

    pub fn get_or_mine(&mut self, dataset: &Dataset, params: &MiningParams) -> Result<Arc<MiningResult>> {
        let key = CacheKey::new(dataset, params);
        if let Some(result) = self.entries.get(&key) {
            debug!(?key, "Mining cache hit");
            return Ok(Arc::clone(result));
        }
        debug!(?key, "Mining cache miss");
        let result = Arc::new(mine(dataset, params)?);
        self.entries.insert(key, Arc::clone(&result));
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::MiningCache;
    use crate::config::MiningParams;
    use crate::pipeline::{mine, Dataset};
    use std::sync::Arc;

    fn dataset(rows: &[&[&str]]) -> Dataset {
        Dataset::from_transactions(
            rows.iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_hit_returns_same_result() {
        let data = dataset(&[&["A", "B"], &["A", "B", "C"], &["A"], &["B", "C"]]);
        let params = MiningParams {
            min_support: 0.25,
            min_confidence: 0.5,
            min_lift: 1.0,
            max_len: 3,
        };
        let mut cache = MiningCache::new();
        let first = cache.get_or_mine(&data, &params).unwrap();
        let second = cache.get_or_mine(&data, &params).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(*first, mine(&data, &params).unwrap());

        let looser = MiningParams { min_lift: 0.0, ..params };
        let third = cache.get_or_mine(&data, &looser).unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(cache.len(), 2);

        // Same thresholds on an equal dataset share the entry.
        let copy = dataset(&[&["A", "B"], &["A", "B", "C"], &["A"], &["B", "C"]]);
        let fourth = cache.get_or_mine(&copy, &params).unwrap();
        assert!(Arc::ptr_eq(&first, &fourth));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_errors_are_not_cached() {
        let data = dataset(&[&["A"]]);
        let params = MiningParams {
            max_len: 0,
            ..MiningParams::default()
        };
        let mut cache = MiningCache::new();
        assert!(cache.get_or_mine(&data, &params).is_err());
        assert!(cache.is_empty());
    }
}

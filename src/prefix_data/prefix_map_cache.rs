use std::sync::Arc;

use dashmap::DashMap;

use super::prefix_map::PrefixMap;

/// Parsed data files keyed by their path relative to the data root.
///
/// `None` entries remember files that do not exist (or could not be used),
/// so they are only looked for once.
pub struct PrefixMapCache {
    cache: DashMap<String, Option<Arc<PrefixMap>>>,
}

impl PrefixMapCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_or_load<F>(&self, file: &str, load: F) -> Option<Arc<PrefixMap>>
    where
        F: FnOnce() -> Option<PrefixMap>,
    {
        if let Some(map) = self.cache.get(file) {
            return map.value().clone();
        }
        // Loaded without holding the shard lock. When two threads race on the
        // same file, the first insert wins.
        let loaded = load().map(Arc::new);
        let entry = self.cache.entry(file.to_string()).or_insert(loaded);
        entry.value().clone()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for PrefixMapCache {
    fn default() -> Self {
        Self::new()
    }
}

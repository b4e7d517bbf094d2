// crates/addrdb-core/src/store/memory.rs

use std::collections::HashMap;

use crate::error::StoreError;
use crate::model::RegionMap;

use super::{check_region_key, Store};

/// In-memory store for tests, demos and embedders that bundle their own
/// region data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    regions: HashMap<String, RegionMap>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Register a region's record map under its (case-insensitive) key.
    pub fn insert(&mut self, region_key: &str, map: RegionMap) -> Result<(), StoreError> {
        check_region_key(region_key)?;
        self.regions.insert(region_key.to_lowercase(), map);
        Ok(())
    }

    /// Register a region from its JSON dataset text.
    pub fn insert_json(&mut self, region_key: &str, json: &str) -> Result<(), StoreError> {
        let map: RegionMap = serde_json::from_str(json)?;
        self.insert(region_key, map)
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Store for MemoryStore {
    fn fetch(&self, region_key: &str) -> Result<RegionMap, StoreError> {
        check_region_key(region_key)?;
        self.regions
            .get(&region_key.to_lowercase())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("no dataset loaded for {region_key:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_is_case_insensitive_and_validated() {
        let mut store = MemoryStore::new();
        store
            .insert_json("DE", r#"{"DE": {"name": "GERMANY"}}"#)
            .unwrap();
        assert!(store.fetch("de").is_ok());
        assert!(store.fetch("DE").is_ok());
        assert!(matches!(store.fetch("FR"), Err(StoreError::NotFound(_))));
        assert!(matches!(store.fetch("d"), Err(StoreError::InvalidKey(_))));
    }
}

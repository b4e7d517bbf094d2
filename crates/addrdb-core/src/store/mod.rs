// crates/addrdb-core/src/store/mod.rs

//! # Region data store
//!
//! Handles the physical layer: fetching a region's flat record map from
//! disk or memory, and the process-scoped cache of parsed region trees
//! that sits in front of it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::StoreError;
use crate::model::{RegionMap, RegionTree};

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Reserved key of the worldwide-defaults record. Every country record is
/// interpreted merged over it; it is not itself a valid address country.
pub const GLOBAL_REGION_KEY: &str = "ZZ";

/// Region keys are 2–3 alphanumerics.
/// - Valid: "US", "de", "419"
/// - Invalid: "", "U", "ABCD", "../../../etc/passwd"
static VALID_REGION_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{2,3}$").unwrap());

/// Validate a region key before any I/O happens.
///
/// Traversal-shaped or otherwise malformed input fails here, never at the
/// filesystem.
pub fn check_region_key(region_key: &str) -> Result<(), StoreError> {
    if VALID_REGION_KEY.is_match(region_key) {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(region_key.to_string()))
    }
}

/// Source of region rule data.
///
/// `fetch` must validate its key with [`check_region_key`] before touching
/// any backing storage, and must be idempotent: region data is immutable
/// for the life of a process, which is what makes [`RegionCache`] safe.
pub trait Store {
    fn fetch(&self, region_key: &str) -> Result<RegionMap, StoreError>;
}

/// Process-scoped memo of parsed region trees, keyed by region code.
///
/// Owned by [`AddressDb`](crate::AddressDb) and consulted before its store;
/// region data never changes within a run, so entries live until [`clear`]
/// is called (useful for test isolation).
///
/// [`clear`]: RegionCache::clear
#[derive(Debug, Default)]
pub struct RegionCache {
    trees: Mutex<HashMap<String, Arc<RegionTree>>>,
}

impl RegionCache {
    pub fn new() -> RegionCache {
        RegionCache::default()
    }

    /// Drop every cached region.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of cached regions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Cached tree for `key`, or build and remember it via `load`.
    pub(crate) fn get_or_load(
        &self,
        key: &str,
        load: impl FnOnce() -> Result<RegionTree, StoreError>,
    ) -> Result<Arc<RegionTree>, StoreError> {
        let mut trees = self.lock();
        if let Some(tree) = trees.get(key) {
            return Ok(Arc::clone(tree));
        }
        let tree = Arc::new(load()?);
        trees.insert(key.to_string(), Arc::clone(&tree));
        Ok(tree)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<RegionTree>>> {
        self.trees.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

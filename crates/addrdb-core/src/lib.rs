// crates/addrdb-core/src/lib.rs

//! # addrdb-core
//!
//! International postal address rules: per-region resolution, validation,
//! normalization, formatting and latinization.
//!
//! Region rule data (format templates, required/uppercased fields,
//! localized administrative-division names, postal-code patterns) is read
//! through a [`Store`]; [`AddressDb`] walks the country → area → city →
//! city-area hierarchy across the region's languages and exposes the
//! consumer-facing operations. Structural conformance only; no delivery
//! database is consulted.
//!
//! ```
//! use addrdb_core::{Address, AddressDb, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.insert_json("zz", r#"{"ZZ": {"fmt": "%N%n%O%n%A%n%C", "require": "AC", "upper": "C"}}"#)?;
//! store.insert_json(
//!     "de",
//!     r#"{"DE": {"name": "GERMANY", "fmt": "%N%n%O%n%A%n%Z %C", "require": "ACZ", "zip": "\\d{5}", "zipex": "26133,53225"}}"#,
//! )?;
//! let db = AddressDb::new(store);
//!
//! let cleaned = db.normalize(
//!     &Address {
//!         country_code: "de".into(),
//!         city: "Berlin".into(),
//!         postal_code: "10117".into(),
//!         street_address: "Unter den Linden 1".into(),
//!         ..Default::default()
//!     },
//!     None,
//! )?;
//! assert_eq!(cleaned.country_code, "DE");
//! assert_eq!(cleaned.city, "BERLIN");
//!
//! let label = db.format(&cleaned, false, None, None)?;
//! assert!(label.ends_with("GERMANY"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod model;
pub mod resolver;
pub mod store;
pub mod text;

mod format;
mod latinize;
mod normalize;

// Re-exports
pub use crate::error::{AddrError, ErrorKind, FieldErrors, Result, StoreError};
pub use crate::model::{
    Address, AddressField, Choice, RegionMap, RegionRecord, RegionTree, ValidationRules,
};
pub use crate::resolver::AddressDb;
pub use crate::store::{FileStore, MemoryStore, RegionCache, Store, GLOBAL_REGION_KEY};

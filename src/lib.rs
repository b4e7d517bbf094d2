//! Workspace façade over [`addrdb_core`], used by the bundled demos.

pub use addrdb_core::*;

/// addrdb-rs prelude: bring the common types into scope for examples.
pub mod prelude {
    pub use addrdb_core::{
        AddrError, Address, AddressDb, AddressField, Choice, ErrorKind, FieldErrors, FileStore,
        MemoryStore, RegionCache, RegionRecord, RegionTree, Result, Store, StoreError,
        ValidationRules,
    };
}

//! Shared helpers for the integration suites.

use addrdb_core::{AddrError, AddressDb, FieldErrors, FileStore};

/// Database over the fixture datasets in `tests/data`.
pub fn db() -> AddressDb<FileStore> {
    AddressDb::open(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data"))
}

/// Unwrap the field-error map of a failed normalization.
#[allow(dead_code)]
pub fn field_errors(result: Result<addrdb_core::Address, AddrError>) -> FieldErrors {
    match result {
        Err(AddrError::ValidationFailed { errors, .. }) => errors,
        Ok(address) => panic!("expected validation failure, got {address:?}"),
        Err(other) => panic!("expected validation failure, got {other:?}"),
    }
}

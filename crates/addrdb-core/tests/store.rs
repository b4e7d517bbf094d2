//! Store contract and cache behavior.

mod common;

use addrdb_core::{Address, AddressDb, MemoryStore, Store, StoreError};
use common::db;

#[test]
fn file_store_rejects_bad_keys_before_io() {
    let db = db();
    for key in ["", "U", "ABCD", "../../../etc/passwd", "us/ca", "u s"] {
        match db.store().fetch(key) {
            Err(StoreError::InvalidKey(bad)) => assert_eq!(bad, key),
            other => panic!("{key:?}: expected InvalidKey, got {other:?}"),
        }
    }
}

#[test]
fn file_store_is_case_insensitive_about_keys() {
    let db = db();
    assert!(db.store().fetch("US").is_ok());
    assert!(db.store().fetch("us").is_ok());
    assert!(db.store().fetch("Us").is_ok());
}

#[test]
fn fetch_is_idempotent() {
    let db = db();
    let first = db.store().fetch("pl").unwrap();
    let second = db.store().fetch("pl").unwrap();
    assert_eq!(first, second);
}

#[test]
fn memory_store_backs_a_full_database() {
    let mut store = MemoryStore::new();
    store
        .insert_json(
            "zz",
            r#"{"ZZ": {"fmt": "%N%n%O%n%A%n%C", "require": "AC", "upper": "C"}}"#,
        )
        .unwrap();
    store
        .insert_json(
            "nl",
            r#"{"NL": {"name": "NETHERLANDS", "fmt": "%O%n%N%n%A%n%Z %C", "require": "ACZ", "zip": "\\d{4} ?[A-Z]{2}", "zipex": "1234 AB,2490 AA"}}"#,
        )
        .unwrap();
    let db = AddressDb::new(store);
    let cleaned = db
        .normalize(
            &Address {
                country_code: "nl".into(),
                city: "Den Haag".into(),
                postal_code: "2490 AA".into(),
                street_address: "Prins Willem-Alexanderhof 5".into(),
                ..Default::default()
            },
            None,
        )
        .unwrap();
    assert_eq!(cleaned.country_code, "NL");
    assert_eq!(cleaned.city, "DEN HAAG");
}

#[test]
fn clearing_the_cache_forces_a_refetch() {
    let db = db();
    let before = db.region("us").unwrap();
    // the cached tree is shared
    assert!(std::sync::Arc::ptr_eq(&before, &db.region("us").unwrap()));
    db.cache().clear();
    let after = db.region("us").unwrap();
    assert!(!std::sync::Arc::ptr_eq(&before, &after));
    assert_eq!(before.len(), after.len());
}

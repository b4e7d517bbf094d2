//! Error handling example for addrdb-rs
//!
//! This example demonstrates the error taxonomy and edge cases

use addrdb_core::{AddrError, Address, AddressDb, MemoryStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== addrdb-rs Error Handling Example ===\n");

    let mut store = MemoryStore::new();
    store.insert_json(
        "zz",
        r#"{"ZZ": {"fmt": "%N%n%O%n%A%n%C", "require": "AC", "upper": "C"}}"#,
    )?;
    store.insert_json(
        "de",
        r#"{"DE": {"name": "GERMANY", "fmt": "%N%n%O%n%A%n%Z %C", "require": "ACZ", "zip": "\\d{5}", "zipex": "26133"}}"#,
    )?;
    let db = AddressDb::new(store);

    // Example 1: Unknown and reserved country codes
    println!("--- Example 1: Unknown and reserved country codes ---");
    for code in ["XX", "ZZ", "ABCD"] {
        let address = Address {
            country_code: code.into(),
            ..Default::default()
        };
        match db.rules(&address) {
            Ok(rules) => println!("  {code}: resolved {}", rules.country_name),
            Err(err) => println!("  {code}: {err}"),
        }
    }
    println!();

    // Example 2: Accumulated field errors
    println!("--- Example 2: Accumulated field errors ---");
    let address = Address {
        country_code: "DE".into(),
        postal_code: "77-777".into(),
        ..Default::default()
    };
    match db.normalize(&address, None) {
        Ok(cleaned) => println!("  unexpectedly valid: {cleaned:?}"),
        Err(AddrError::ValidationFailed { errors, .. }) => {
            for (field, kind) in &errors {
                println!("  {field}: {kind}");
            }
        }
        Err(err) => return Err(err.into()),
    }
    println!();

    // Example 3: Region failures surface through normalize as countryCode
    println!("--- Example 3: Wrapped region failure ---");
    let address = Address {
        country_code: "XX".into(),
        ..Default::default()
    };
    if let Err(err) = db.normalize(&address, None) {
        println!("  error: {err}");
        if let Some(cause) = std::error::Error::source(&err) {
            println!("  caused by: {cause}");
        }
    }

    Ok(())
}

//! Basic usage example for addrdb-rs
//!
//! This example demonstrates how to:
//! - Load region rule data into a store
//! - Resolve validation rules for a country
//! - Normalize free-text address input
//! - Render address labels and form field orders

use addrdb_rs::prelude::*;

const ZZ: &str = r#"{"ZZ": {
    "fmt": "%N%n%O%n%A%n%C",
    "require": "AC",
    "upper": "C",
    "state_name_type": "province",
    "locality_name_type": "city",
    "sublocality_name_type": "suburb",
    "zip_name_type": "postal"
}}"#;

const US: &str = r#"{
    "US": {
        "name": "UNITED STATES",
        "fmt": "%N%n%O%n%A%n%C, %S %Z",
        "require": "ACSZ",
        "upper": "CS",
        "zip": "(\\d{5})(?:[ \\-](\\d{4}))?",
        "zipex": "95014,22162-1010",
        "state_name_type": "state",
        "zip_name_type": "zip",
        "sub_keys": "CA~NV",
        "sub_names": "California~Nevada"
    },
    "US/CA": {"name": "California", "zip": "9[0-5]|96[01]"},
    "US/NV": {"name": "Nevada", "zip": "889|89[0-8]"}
}"#;

const PL: &str = r#"{"PL": {
    "name": "POLAND",
    "fmt": "%N%n%O%n%A%n%Z %C",
    "require": "ACZ",
    "zip": "\\d{2}-\\d{3}",
    "zipex": "00-950,05-470"
}}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== addrdb-rs Basic Usage Example ===\n");

    // Load region data (a FileStore over a dataset directory works the
    // same way; MemoryStore keeps this example self-contained)
    let mut store = MemoryStore::new();
    store.insert_json("zz", ZZ)?;
    store.insert_json("us", US)?;
    store.insert_json("pl", PL)?;
    let db = AddressDb::new(store);

    // Example 1: Resolve the rules for a country
    println!("--- Example 1: Validation rules for the US ---");
    let rules = db.rules(&Address {
        country_code: "US".into(),
        ..Default::default()
    })?;
    println!("Country: {} ({})", rules.country_name, rules.country_code);
    println!("Required fields: {:?}", rules.required_fields);
    println!("Postal code examples: {}", rules.postal_code_examples.join(", "));
    println!("Country area choices: {}", rules.country_area_choices.len());
    println!();

    // Example 2: Normalize free-text input
    println!("--- Example 2: Normalize a free-text address ---");
    let cleaned = db.normalize(
        &Address {
            country_code: "us".into(),
            country_area: "california".into(),
            city: "Mountain View".into(),
            postal_code: "94037".into(),
            street_address: "1600 Charleston Rd.".into(),
            ..Default::default()
        },
        None,
    )?;
    println!("Country area resolved to: {}", cleaned.country_area);
    println!("City case-folded to: {}", cleaned.city);
    println!();

    // Example 3: Render a label
    println!("--- Example 3: Render a label ---");
    println!("{}", db.format(&cleaned, false, None, None)?);
    println!();

    // Example 4: Form field order
    println!("--- Example 4: Field order for Poland ---");
    let order = db.field_order(
        &Address {
            country_code: "PL".into(),
            ..Default::default()
        },
        false,
    )?;
    for line in order {
        println!("{line:?}");
    }
    println!();

    // Example 5: The region cache
    println!("--- Example 5: Cache usage ---");
    println!("Cached regions: {}", db.cache().len());
    db.cache().clear();
    println!("After clear: {}", db.cache().len());

    println!("\n=== Example completed successfully ===");
    Ok(())
}

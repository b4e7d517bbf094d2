//! addrdb-cli — Command-line interface for addrdb-core
//!
//! This binary provides a simple way to inspect per-region address rules
//! and to validate or render addresses from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show the rules for a country
//!   $ addrdb --data-dir data rules DE
//!
//! - Show the form field order (optionally for the Latin template)
//!   $ addrdb --data-dir data field-order PL
//!   $ addrdb --data-dir data field-order CN --latin
//!
//! - Validate and normalize an address
//!   $ addrdb --data-dir data validate --country us --area california \
//!       --city "Mountain View" --postal 94037 --street "1600 Charleston Rd."
//!
//! - Render an address label
//!   $ addrdb --data-dir data format --country CH --city Zürich \
//!       --postal 8022 --street "Kappelergasse 1"
//!
//! Data source
//! -----------
//!
//! The CLI reads a directory of per-region JSON datasets (`us.json`,
//! `de.json`, …; gzip-compressed siblings work too). Point `--data-dir` at
//! wherever your datasets live.

mod args;

use crate::args::{CliArgs, Commands};
use addrdb_core::{AddrError, Address, AddressDb, AddressField};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let db = AddressDb::open(&args.data_dir);

    match args.command {
        Commands::Rules { code } => {
            let rules = db.rules(&country_only(&code))?;
            println!("Country: {} ({})", rules.country_name, rules.country_code);
            println!("Format: {}", rules.address_format.replace("%n", " / "));
            println!("Allowed: {}", join_fields(&rules.allowed_fields));
            println!("Required: {}", join_fields(&rules.required_fields));
            println!("Uppercase: {}", join_fields(&rules.upper_fields));
            println!(
                "Country area ({}): {} choices",
                rules.country_area_type,
                rules.country_area_choices.len()
            );
            println!("City ({}): {} choices", rules.city_type, rules.city_choices.len());
            println!(
                "City area ({}): {} choices",
                rules.city_area_type,
                rules.city_area_choices.len()
            );
            if !rules.postal_code_prefix.is_empty() {
                println!("Postal code prefix: {}", rules.postal_code_prefix);
            }
            if !rules.postal_code_examples.is_empty() {
                println!(
                    "Postal code examples: {}",
                    rules.postal_code_examples.join(", ")
                );
            }
        }

        Commands::FieldOrder { code, latin } => {
            for line in db.field_order(&country_only(&code), latin)? {
                println!("{}", join_fields(&line));
            }
        }

        Commands::Validate { address } => {
            match db.normalize(&address.into_address(), None) {
                Ok(cleaned) => {
                    println!("OK");
                    for field in AddressField::ALL {
                        let value = cleaned.get(field);
                        if !value.is_empty() {
                            println!("  {field}: {value}");
                        }
                    }
                }
                Err(AddrError::ValidationFailed { errors, .. }) => {
                    for (field, kind) in &errors {
                        eprintln!("{field}: {kind}");
                    }
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }

        Commands::Format {
            address,
            latin,
            latinize,
        } => {
            let mut address = address.into_address();
            if latinize {
                address = db.latinize(&address, false)?;
            }
            println!("{}", db.format(&address, latin, None, None)?);
        }
    }

    Ok(())
}

fn country_only(code: &str) -> Address {
    Address {
        country_code: code.to_string(),
        ..Default::default()
    }
}

fn join_fields(fields: &[AddressField]) -> String {
    let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
    names.join(", ")
}

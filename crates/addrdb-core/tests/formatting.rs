//! Rendering and field-order queries.

mod common;

use addrdb_core::{AddrError, Address, AddressField};
use common::db;

#[test]
fn chinese_addresses_render_in_local_order() {
    let result = db()
        .format(
            &Address {
                country_code: "CN".into(),
                country_area: "云南省".into(),
                postal_code: "677400".into(),
                city: "临沧市".into(),
                city_area: "凤庆县".into(),
                street_address: "中关村东路1号".into(),
                ..Default::default()
            },
            false,
            None,
            None,
        )
        .unwrap();
    assert_eq!(result, "677400\n云南省临沧市凤庆县\n中关村东路1号\nCHINA");
}

#[test]
fn empty_fields_drop_their_lines() {
    // no name and no company: their lines disappear entirely
    let result = db()
        .format(
            &Address {
                country_code: "DE".into(),
                city: "Oldenburg".into(),
                postal_code: "26133".into(),
                street_address: "Musterstr. 12".into(),
                ..Default::default()
            },
            false,
            None,
            None,
        )
        .unwrap();
    assert_eq!(result, "Musterstr. 12\n26133 OLDENBURG\nGERMANY");
}

#[test]
fn literal_template_text_is_preserved() {
    let result = db()
        .format(
            &Address {
                country_code: "CH".into(),
                city: "Zürich".into(),
                postal_code: "8022".into(),
                street_address: "Kappelergasse 1".into(),
                ..Default::default()
            },
            false,
            None,
            None,
        )
        .unwrap();
    assert_eq!(result, "Kappelergasse 1\nCH-8022 Zürich\nSWITZERLAND");
}

#[test]
fn country_name_override_is_uppercased() {
    let result = db()
        .format(
            &Address {
                country_code: "DE".into(),
                city: "Berlin".into(),
                postal_code: "10117".into(),
                street_address: "Unter den Linden 1".into(),
                ..Default::default()
            },
            false,
            None,
            Some("Alemania"),
        )
        .unwrap();
    assert!(result.ends_with("\nALEMANIA"), "{result}");
}

#[test]
fn formatting_does_not_validate() {
    // postal code is wrong for DE, but format renders it anyway
    let result = db()
        .format(
            &Address {
                country_code: "DE".into(),
                city: "Berlin".into(),
                postal_code: "77-777".into(),
                street_address: "x".into(),
                ..Default::default()
            },
            false,
            None,
            None,
        )
        .unwrap();
    assert!(result.starts_with("x\n77-777 BERLIN"), "{result}");
}

#[test]
fn format_propagates_region_not_found_unwrapped() {
    let err = db()
        .format(
            &Address {
                country_code: "XX".into(),
                ..Default::default()
            },
            false,
            None,
            None,
        )
        .unwrap_err();
    assert!(matches!(err, AddrError::RegionNotFound { .. }));
}

#[test]
fn poland_field_order_matches_its_template() {
    let order = db()
        .field_order(
            &Address {
                country_code: "PL".into(),
                ..Default::default()
            },
            false,
        )
        .unwrap();
    assert_eq!(
        order,
        vec![
            vec![AddressField::Name],
            vec![AddressField::CompanyName],
            vec![AddressField::StreetAddress],
            vec![AddressField::PostalCode, AddressField::City],
        ]
    );
}

#[test]
fn china_field_order_differs_between_scripts() {
    let db = db();
    let address = Address {
        country_code: "CN".into(),
        ..Default::default()
    };
    assert_eq!(
        db.field_order(&address, false).unwrap(),
        vec![
            vec![AddressField::PostalCode],
            vec![
                AddressField::CountryArea,
                AddressField::City,
                AddressField::CityArea,
            ],
            vec![AddressField::StreetAddress],
            vec![AddressField::CompanyName],
            vec![AddressField::Name],
        ]
    );
    assert_eq!(
        db.field_order(&address, true).unwrap(),
        vec![
            vec![AddressField::Name],
            vec![AddressField::CompanyName],
            vec![AddressField::StreetAddress],
            vec![AddressField::CityArea],
            vec![AddressField::City],
            vec![AddressField::CountryArea, AddressField::PostalCode],
        ]
    );
}

// crates/addrdb-core/src/model/address.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// The stable address-field vocabulary.
///
/// Format templates address most of these through single-letter placeholder
/// codes (`%A`, `%C`, …); `countryCode` is the lookup key for the region
/// rules and has no placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    Name,
    CompanyName,
    StreetAddress,
    City,
    CityArea,
    CountryArea,
    SortingCode,
    PostalCode,
    CountryCode,
}

impl AddressField {
    /// Every known field, including `countryCode`.
    pub const ALL: [AddressField; 9] = [
        AddressField::Name,
        AddressField::CompanyName,
        AddressField::StreetAddress,
        AddressField::City,
        AddressField::CityArea,
        AddressField::CountryArea,
        AddressField::SortingCode,
        AddressField::PostalCode,
        AddressField::CountryCode,
    ];

    /// Resolve a template placeholder code to its field.
    ///
    /// The table is injective; `countryCode` has no code and `%n` is the
    /// line-break marker, not a field.
    pub fn from_code(code: char) -> Option<AddressField> {
        match code {
            'A' => Some(AddressField::StreetAddress),
            'C' => Some(AddressField::City),
            'D' => Some(AddressField::CityArea),
            'N' => Some(AddressField::Name),
            'O' => Some(AddressField::CompanyName),
            'S' => Some(AddressField::CountryArea),
            'X' => Some(AddressField::SortingCode),
            'Z' => Some(AddressField::PostalCode),
            _ => None,
        }
    }

    /// The placeholder code of this field, if it has one.
    pub fn code(self) -> Option<char> {
        match self {
            AddressField::StreetAddress => Some('A'),
            AddressField::City => Some('C'),
            AddressField::CityArea => Some('D'),
            AddressField::Name => Some('N'),
            AddressField::CompanyName => Some('O'),
            AddressField::CountryArea => Some('S'),
            AddressField::SortingCode => Some('X'),
            AddressField::PostalCode => Some('Z'),
            AddressField::CountryCode => None,
        }
    }

    /// The wire name of this field (e.g. `"streetAddress"`).
    pub fn as_str(self) -> &'static str {
        match self {
            AddressField::Name => "name",
            AddressField::CompanyName => "companyName",
            AddressField::StreetAddress => "streetAddress",
            AddressField::City => "city",
            AddressField::CityArea => "cityArea",
            AddressField::CountryArea => "countryArea",
            AddressField::SortingCode => "sortingCode",
            AddressField::PostalCode => "postalCode",
            AddressField::CountryCode => "countryCode",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A postal address, structured or partially filled in.
///
/// All fields are owned strings; the empty string means "absent". Free-text
/// values for `country_area`, `city` and `city_area` are resolved to their
/// canonical region keys by normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub name: String,
    pub company_name: String,
    pub street_address: String,
    pub city: String,
    pub city_area: String,
    pub country_area: String,
    pub sorting_code: String,
    pub postal_code: String,
    pub country_code: String,
}

impl Address {
    /// Value of the given field (empty string when absent).
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Name => &self.name,
            AddressField::CompanyName => &self.company_name,
            AddressField::StreetAddress => &self.street_address,
            AddressField::City => &self.city,
            AddressField::CityArea => &self.city_area,
            AddressField::CountryArea => &self.country_area,
            AddressField::SortingCode => &self.sorting_code,
            AddressField::PostalCode => &self.postal_code,
            AddressField::CountryCode => &self.country_code,
        }
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AddressField::Name => self.name = value,
            AddressField::CompanyName => self.company_name = value,
            AddressField::StreetAddress => self.street_address = value,
            AddressField::City => self.city = value,
            AddressField::CityArea => self.city_area = value,
            AddressField::CountryArea => self.country_area = value,
            AddressField::SortingCode => self.sorting_code = value,
            AddressField::PostalCode => self.postal_code = value,
            AddressField::CountryCode => self.country_code = value,
        }
    }
}

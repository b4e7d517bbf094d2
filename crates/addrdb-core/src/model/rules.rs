// crates/addrdb-core/src/model/rules.rs

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::address::AddressField;

/// One selectable value for an area/city/city-area field.
///
/// Labels are not unique per key: the same key typically appears once per
/// language or script the region is published in.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Canonical sub-region key, e.g. `"CA"` or `"云南省"`.
    pub key: String,
    /// Display label, e.g. `"California"`.
    pub label: String,
}

impl Choice {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Choice {
        Choice {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Deduplicate a raw multi-language choice accumulation and order it by key,
/// then label, for deterministic consumer-facing output.
pub fn compact_choices(choices: Vec<Choice>) -> Vec<Choice> {
    let set: BTreeSet<Choice> = choices.into_iter().collect();
    set.into_iter().collect()
}

/// Immutable snapshot of the validation rules resolved for one address.
///
/// Produced by [`AddressDb::rules`](crate::AddressDb::rules); consumed by
/// normalization, formatting and form building. Rebuilt per resolution call
/// (only the underlying region data is cached).
#[derive(Clone, Debug)]
pub struct ValidationRules {
    pub country_code: String,
    /// Country display name, appended as the last formatted line.
    pub country_name: String,
    pub address_format: String,
    pub address_latin_format: String,
    /// Fields present in the format template, in template order.
    pub allowed_fields: Vec<AddressField>,
    pub required_fields: Vec<AddressField>,
    /// Fields rendered and normalized in upper case.
    pub upper_fields: Vec<AddressField>,
    /// Display label of the country-area level, e.g. `"province"`.
    pub country_area_type: String,
    pub country_area_choices: Vec<Choice>,
    pub city_type: String,
    pub city_choices: Vec<Choice>,
    pub city_area_type: String,
    pub city_area_choices: Vec<Choice>,
    pub postal_code_type: String,
    /// Patterns a postal code must satisfy, in resolution order: the
    /// country's exact-match pattern (when postal code is required)
    /// followed by prefix patterns picked up during the hierarchy walk.
    /// All of them must match.
    pub postal_code_matchers: Vec<Regex>,
    pub postal_code_examples: Vec<String>,
    /// Display prefix for postal codes, e.g. `"CH-"`.
    pub postal_code_prefix: String,
}

impl ValidationRules {
    #[inline]
    pub fn is_allowed(&self, field: AddressField) -> bool {
        self.allowed_fields.contains(&field)
    }

    #[inline]
    pub fn is_required(&self, field: AddressField) -> bool {
        self.required_fields.contains(&field)
    }

    #[inline]
    pub fn is_upper(&self, field: AddressField) -> bool {
        self.upper_fields.contains(&field)
    }

    /// The choice set constraining a field, for the three hierarchy fields.
    pub fn choices_for(&self, field: AddressField) -> Option<&[Choice]> {
        match field {
            AddressField::CountryArea => Some(&self.country_area_choices),
            AddressField::City => Some(&self.city_choices),
            AddressField::CityArea => Some(&self.city_area_choices),
            _ => None,
        }
    }
}

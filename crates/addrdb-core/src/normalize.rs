// crates/addrdb-core/src/normalize.rs

//! Field normalization against resolved validation rules.

use crate::error::{AddrError, ErrorKind, FieldErrors, Result};
use crate::model::{Address, AddressField, ValidationRules};
use crate::resolver::AddressDb;
use crate::store::Store;
use crate::text::{match_choices, upper};

/// Fields subject to the per-field policy, in the order they are visited.
/// `countryCode` is handled separately.
const CHECKED_FIELDS: [AddressField; 6] = [
    AddressField::CountryArea,
    AddressField::City,
    AddressField::CityArea,
    AddressField::PostalCode,
    AddressField::StreetAddress,
    AddressField::SortingCode,
];

impl<S: Store> AddressDb<S> {
    /// Validate and clean an address against its region's rules.
    ///
    /// Returns the cleaned copy: the country code uppercased to canonical
    /// form, upper-flagged fields case-folded under `locale`, free-text
    /// area/city/city-area values replaced by their canonical keys, fields
    /// the region's template doesn't allow cleared, and everything left
    /// valueless normalized to the empty string.
    ///
    /// Every field is checked before the call fails: problems accumulate
    /// into one [`AddrError::ValidationFailed`] whose map holds `required`
    /// and `invalid` reasons per field. The one exception is an unresolvable
    /// country code, which aborts immediately with only
    /// `countryCode: invalid` (the resolution failure is retained as the
    /// error source).
    pub fn normalize(&self, address: &Address, locale: Option<&str>) -> Result<Address> {
        let rules = match self.rules(address) {
            Ok(rules) => rules,
            Err(err) => {
                let mut errors = FieldErrors::new();
                errors.insert(AddressField::CountryCode, ErrorKind::Invalid);
                return Err(AddrError::ValidationFailed {
                    errors,
                    source: Some(Box::new(err)),
                });
            }
        };

        let mut cleaned = address.clone();
        let mut errors = FieldErrors::new();

        if cleaned.country_code.is_empty() {
            errors.insert(AddressField::CountryCode, ErrorKind::Required);
        } else {
            cleaned.country_code = rules.country_code.clone();
        }

        for field in CHECKED_FIELDS {
            normalize_field(field, &rules, &mut cleaned, &mut errors, locale);
        }

        // every declared pattern must match; the first failure wins
        if !rules.postal_code_matchers.is_empty() && !cleaned.postal_code.is_empty() {
            for matcher in &rules.postal_code_matchers {
                if !matcher.is_match(&cleaned.postal_code) {
                    errors.insert(AddressField::PostalCode, ErrorKind::Invalid);
                    break;
                }
            }
        }

        if !errors.is_empty() {
            return Err(AddrError::ValidationFailed {
                errors,
                source: None,
            });
        }
        Ok(cleaned)
    }
}

fn normalize_field(
    field: AddressField,
    rules: &ValidationRules,
    cleaned: &mut Address,
    errors: &mut FieldErrors,
    locale: Option<&str>,
) {
    let mut value = cleaned.get(field).to_string();
    if rules.is_upper(field) && !value.is_empty() {
        value = upper(&value, locale);
        cleaned.set(field, value.clone());
    }

    let choices = rules.choices_for(field).unwrap_or(&[]);
    if !rules.is_allowed(field) {
        // disallowed values are cleared, trumping every other check
        cleaned.set(field, "");
    } else if value.is_empty() && rules.is_required(field) {
        errors.insert(field, ErrorKind::Required);
    } else if !choices.is_empty() && (!value.is_empty() || rules.is_required(field)) {
        match match_choices(&value, choices) {
            Some(key) => {
                value = key.clone();
                cleaned.set(field, key);
            }
            None => {
                errors.insert(field, ErrorKind::Invalid);
            }
        }
    }

    if value.is_empty() {
        cleaned.set(field, "");
    }
}

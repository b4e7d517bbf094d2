// crates/addrdb-core/src/latinize.rs

//! Replacement of localized hierarchy labels with their Latin-script names.

use crate::error::Result;
use crate::model::{Address, RegionRecord};
use crate::resolver::AddressDb;
use crate::store::Store;

impl<S: Store> AddressDb<S> {
    /// Replace `country_area`, `city` and `city_area` with the matching
    /// hierarchy node's Latin (or local) display name.
    ///
    /// Unless `normalized` says otherwise the address is normalized first,
    /// propagating any validation errors. The walk descends country → area
    /// → city → city-area only while each field is non-empty and its node
    /// exists in the region data; it stops at the first missing level and
    /// leaves deeper fields untouched. A node without a Latin name keeps
    /// its local name; a missing node keeps the already-resolved key.
    pub fn latinize(&self, address: &Address, normalized: bool) -> Result<Address> {
        let owned;
        let address = if normalized {
            address
        } else {
            owned = self.normalize(address, None)?;
            &owned
        };

        let mut cleaned = address.clone();
        let country_code = address.country_code.to_uppercase();
        if country_code.is_empty() {
            return Ok(cleaned);
        }
        let tree = self.country_tree(&country_code)?;

        let area = address.country_area.as_str();
        if area.is_empty() {
            return Ok(cleaned);
        }
        let area_path = format!("{country_code}/{area}");
        let Some(record) = tree.get(&area_path, None) else {
            return Ok(cleaned);
        };
        cleaned.country_area = display_name(record, area);

        let city = address.city.as_str();
        if city.is_empty() {
            return Ok(cleaned);
        }
        let city_path = format!("{area_path}/{city}");
        let Some(record) = tree.get(&city_path, None) else {
            return Ok(cleaned);
        };
        cleaned.city = display_name(record, city);

        let city_area = address.city_area.as_str();
        if city_area.is_empty() {
            return Ok(cleaned);
        }
        let city_area_path = format!("{city_path}/{city_area}");
        if let Some(record) = tree.get(&city_area_path, None) {
            cleaned.city_area = display_name(record, city_area);
        }
        Ok(cleaned)
    }
}

/// Latin name, else local name, else the value the address already had.
fn display_name(record: &RegionRecord, fallback: &str) -> String {
    record
        .lname
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| record.name.clone().filter(|name| !name.is_empty()))
        .unwrap_or_else(|| fallback.to_string())
}

// crates/addrdb-core/src/resolver.rs

//! Rules resolution: the hierarchical walk that turns a partial address
//! into a [`ValidationRules`] snapshot.
//!
//! The walk descends country → country-area → city → city-area, one fixed
//! level at a time, accumulating every language's choice labels while the
//! address text is matched against each language's own list. The first
//! language to match a level resolves it, and only that first assignment
//! contributes the level's postal-code pattern and examples.

use std::path::PathBuf;
use std::sync::Arc;

use regex::Regex;

use crate::error::{AddrError, Result, StoreError};
use crate::format::template_fields;
use crate::model::rules::compact_choices;
use crate::model::{Address, AddressField, Choice, RegionRecord, RegionTree, ValidationRules};
use crate::store::{check_region_key, FileStore, RegionCache, Store, GLOBAL_REGION_KEY};
use crate::text::match_choices;

/// The hierarchy levels below the country node, in descent order, paired
/// with the address field matched at each level.
const SUB_LEVELS: [AddressField; 3] = [
    AddressField::CountryArea,
    AddressField::City,
    AddressField::CityArea,
];

/// The address-rules database: a [`Store`] plus the process-scoped region
/// cache, exposing the consumer-facing operations.
///
/// All operations are read-only; concurrent calls share nothing but the
/// cache and need no external locking.
///
/// # Examples
/// ```
/// use addrdb_core::{Address, AddressDb, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.insert_json("zz", r#"{"ZZ": {"fmt": "%N%n%O%n%A%n%C", "require": "AC", "upper": "C"}}"#)?;
/// store.insert_json(
///     "pl",
///     r#"{"PL": {"name": "POLAND", "fmt": "%N%n%O%n%A%n%Z %C", "require": "ACZ", "zip": "\\d{2}-\\d{3}"}}"#,
/// )?;
/// let db = AddressDb::new(store);
///
/// let rules = db.rules(&Address {
///     country_code: "PL".into(),
///     ..Default::default()
/// })?;
/// assert_eq!(rules.country_name, "POLAND");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct AddressDb<S: Store = FileStore> {
    store: S,
    cache: RegionCache,
}

impl AddressDb<FileStore> {
    /// Open a database over a directory of per-region `<code>.json` files.
    pub fn open(dir: impl Into<PathBuf>) -> AddressDb<FileStore> {
        AddressDb::new(FileStore::new(dir))
    }
}

impl<S: Store> AddressDb<S> {
    pub fn new(store: S) -> AddressDb<S> {
        AddressDb {
            store,
            cache: RegionCache::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The region cache; `cache().clear()` resets it between tests.
    pub fn cache(&self) -> &RegionCache {
        &self.cache
    }

    /// Validated, cached access to a region's record tree.
    ///
    /// This is the raw dataset view; most callers want [`rules`] instead.
    ///
    /// [`rules`]: AddressDb::rules
    pub fn region(&self, region_key: &str) -> Result<Arc<RegionTree>> {
        check_region_key(region_key).map_err(|_| AddrError::region_not_found(region_key))?;
        self.tree(region_key)
            .map_err(|err| AddrError::region_fetch_failed(region_key, err))
    }

    /// Resolve the validation rules for a partial address.
    ///
    /// An empty country code resolves against the worldwide defaults alone;
    /// a non-empty one must be a known 2–3 alphanumeric code other than the
    /// reserved global key, or the call fails with
    /// [`AddrError::RegionNotFound`], the only error this operation
    /// raises. Store faults are wrapped as its cause.
    pub fn rules(&self, address: &Address) -> Result<ValidationRules> {
        let country_code = address.country_code.to_uppercase();

        let global = self
            .tree(GLOBAL_REGION_KEY)
            .map_err(|err| AddrError::region_fetch_failed(GLOBAL_REGION_KEY, err))?;
        let mut record = global
            .get(GLOBAL_REGION_KEY, None)
            .cloned()
            .unwrap_or_default();

        let country_tree = if country_code.is_empty() {
            None
        } else {
            let tree = self.country_tree(&country_code)?;
            let country = tree
                .get(&country_code, None)
                .ok_or_else(|| AddrError::region_not_found(&country_code))?;
            record = record.merged(country);
            Some(tree)
        };

        let address_format = record.fmt.clone().unwrap_or_default();
        let address_latin_format = record
            .lfmt
            .clone()
            .unwrap_or_else(|| address_format.clone());

        // The template's placeholder order is the canonical field order.
        let allowed_fields = template_fields(&address_format);
        let required_fields = fields_from_codes(record.require.as_deref());
        let upper_fields = fields_from_codes(record.upper.as_deref());

        let mut matchers = Vec::new();
        if required_fields.contains(&AddressField::PostalCode) {
            if let Some(zip) = record.zip.as_deref() {
                push_matcher(&mut matchers, zip, true);
            }
        }
        let mut examples = record.zip_examples();

        let mut level_choices: [Vec<Choice>; 3] = Default::default();
        if let Some(tree) = &country_tree {
            if record.has_children() {
                walk_levels(
                    tree,
                    address,
                    &record,
                    &country_code,
                    &mut level_choices,
                    &mut matchers,
                    &mut examples,
                );
            }
        }
        let [country_area_choices, city_choices, city_area_choices] =
            level_choices.map(compact_choices);

        Ok(ValidationRules {
            country_code,
            country_name: record.name.clone().unwrap_or_default(),
            address_format,
            address_latin_format,
            allowed_fields,
            required_fields,
            upper_fields,
            country_area_type: record.state_name_type.clone().unwrap_or_default(),
            country_area_choices,
            city_type: record.locality_name_type.clone().unwrap_or_default(),
            city_choices,
            city_area_type: record.sublocality_name_type.clone().unwrap_or_default(),
            city_area_choices,
            postal_code_type: record.zip_name_type.clone().unwrap_or_default(),
            postal_code_matchers: matchers,
            postal_code_examples: examples,
            postal_code_prefix: record.postprefix.clone().unwrap_or_default(),
        })
    }

    pub(crate) fn country_tree(&self, country_code: &str) -> Result<Arc<RegionTree>> {
        if check_region_key(country_code).is_err()
            || country_code.eq_ignore_ascii_case(GLOBAL_REGION_KEY)
        {
            return Err(AddrError::region_not_found(country_code));
        }
        self.tree(country_code)
            .map_err(|err| AddrError::region_fetch_failed(country_code, err))
    }

    pub(crate) fn tree(&self, region_key: &str) -> Result<Arc<RegionTree>, StoreError> {
        let key = region_key.to_lowercase();
        self.cache
            .get_or_load(&key, || Ok(RegionTree::build(self.store.fetch(&key)?)))
    }
}

/// The fixed-depth descent below the country node.
///
/// Per level: every language's labels are unioned into the level's choice
/// set, the address text is matched against each language's own list, and
/// the first language to match resolves the level for good; a later
/// language's non-match never un-resolves it. Only that first assignment
/// pulls the matched child's postal pattern (start-anchored, unconditional
/// at these levels) and examples. Descent continues only while the matched
/// child itself declares children.
#[allow(clippy::too_many_arguments)]
fn walk_levels(
    tree: &RegionTree,
    address: &Address,
    country: &RegionRecord,
    country_code: &str,
    level_choices: &mut [Vec<Choice>; 3],
    matchers: &mut Vec<Regex>,
    examples: &mut Vec<String>,
) {
    let languages = country.language_list();
    let default_language = country.lang.as_deref();
    let mut parent_path = country_code.to_string();

    for (level, field) in SUB_LEVELS.into_iter().enumerate() {
        let input = address.get(field);
        let mut resolved: Option<String> = None;

        for language in &languages {
            // the default language reads the unsuffixed node
            let lookup = match language.as_deref() {
                Some(lang) if default_language != Some(lang) => Some(lang),
                _ => None,
            };
            let Some(parent) = tree.get(&parent_path, lookup) else {
                continue;
            };
            let localized = parent.choices(false);
            level_choices[level].extend_from_slice(&localized);

            if resolved.is_some() {
                continue;
            }
            let Some(key) = match_choices(input, &localized) else {
                continue;
            };
            // first assignment: this language's child node supplies the
            // level's postal pattern and examples
            let child_path = format!("{parent_path}/{key}");
            if let Some(child) = tree.get(&child_path, lookup) {
                if let Some(zip) = child.zip.as_deref() {
                    push_matcher(matchers, zip, false);
                }
                if child.zipex.is_some() {
                    *examples = child.zip_examples();
                }
            }
            resolved = Some(key);
        }

        let Some(key) = resolved else { break };
        parent_path.push('/');
        parent_path.push_str(&key);
        let descend = tree
            .get(&parent_path, None)
            .is_some_and(|child| child.has_children());
        if !descend {
            break;
        }
    }
}

fn fields_from_codes(codes: Option<&str>) -> Vec<AddressField> {
    match codes {
        Some(codes) => codes.chars().filter_map(AddressField::from_code).collect(),
        None => Vec::new(),
    }
}

/// Compile and append a postal-code pattern.
///
/// Country-level patterns must match the whole code; deeper levels only
/// constrain the prefix. A pattern that fails to compile is treated as
/// absent.
fn push_matcher(matchers: &mut Vec<Regex>, pattern: &str, exact: bool) {
    let anchored = if exact {
        format!("^(?:{pattern})$")
    } else {
        format!("^(?:{pattern})")
    };
    if let Ok(regex) = Regex::new(&anchored) {
        matchers.push(regex);
    }
}

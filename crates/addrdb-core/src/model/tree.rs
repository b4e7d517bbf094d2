// crates/addrdb-core/src/model/tree.rs

use std::collections::HashMap;

use super::record::{RegionMap, RegionRecord};

/// A region's records, normalized from the flat path-keyed map into nodes
/// addressed by canonical (suffix-free) path.
///
/// Built once per loaded region and cached; lookups never re-parse
/// composite keys. Each node keeps its default-language record alongside
/// any language variants; a node with a variant always has a default
/// record, and a missing variant falls back to the default.
#[derive(Clone, Debug, Default)]
pub struct RegionTree {
    nodes: HashMap<String, RegionNode>,
}

/// One hierarchy node: the default-language record plus language variants.
#[derive(Clone, Debug, Default)]
pub struct RegionNode {
    default: Option<RegionRecord>,
    localized: HashMap<String, RegionRecord>,
}

impl RegionNode {
    /// Default-language record of this node.
    pub fn default_record(&self) -> Option<&RegionRecord> {
        self.default.as_ref()
    }

    /// Record for the given language, falling back to the default.
    pub fn record(&self, language: Option<&str>) -> Option<&RegionRecord> {
        if let Some(lang) = language {
            if let Some(variant) = self.localized.get(lang) {
                return Some(variant);
            }
        }
        self.default.as_ref()
    }
}

impl RegionTree {
    /// Normalize a flat region map into a tree.
    pub fn build(map: RegionMap) -> RegionTree {
        let mut nodes: HashMap<String, RegionNode> = HashMap::new();
        for (key, record) in map {
            let (path, language) = split_language(&key);
            let node = nodes.entry(path.to_string()).or_default();
            match language {
                Some(lang) => {
                    node.localized.insert(lang.to_string(), record);
                }
                None => node.default = Some(record),
            }
        }
        RegionTree { nodes }
    }

    /// Record at `path` for the given language, falling back to the node's
    /// default record when the variant is absent.
    pub fn get(&self, path: &str, language: Option<&str>) -> Option<&RegionRecord> {
        self.nodes.get(path)?.record(language)
    }

    pub fn node(&self, path: &str) -> Option<&RegionNode> {
        self.nodes.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.nodes.contains_key(path)
    }

    /// Number of distinct node paths.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Split a dataset key into canonical path and language suffix:
/// `"CN/云南省--zh-Latn"` → `("CN/云南省", Some("zh-Latn"))`.
fn split_language(key: &str) -> (&str, Option<&str>) {
    match key.rsplit_once("--") {
        Some((path, lang)) if !path.is_empty() && !lang.is_empty() => (path, Some(lang)),
        _ => (key, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(json: &str) -> RegionTree {
        RegionTree::build(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn splits_language_suffix_on_last_segment() {
        assert_eq!(split_language("CA"), ("CA", None));
        assert_eq!(split_language("CA--fr"), ("CA", Some("fr")));
        assert_eq!(
            split_language("CN/云南省--zh-Latn"),
            ("CN/云南省", Some("zh-Latn"))
        );
    }

    #[test]
    fn variant_lookup_falls_back_to_default() {
        let tree = tree(
            r#"{
                "CA": {"name": "CANADA", "sub_keys": "AB~QC"},
                "CA--fr": {"sub_keys": "AB~QC", "sub_names": "Alberta~Québec"}
            }"#,
        );
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.get("CA", None).and_then(|r| r.name.as_deref()),
            Some("CANADA")
        );
        // declared variant
        assert!(tree.get("CA", Some("fr")).unwrap().sub_names.is_some());
        // undeclared variant falls back
        assert_eq!(
            tree.get("CA", Some("en")).and_then(|r| r.name.as_deref()),
            Some("CANADA")
        );
        assert!(tree.get("CA/QC", None).is_none());
    }
}

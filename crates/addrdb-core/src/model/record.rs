// crates/addrdb-core/src/model/record.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::rules::Choice;

/// Flat dataset for one region: path string → record.
///
/// Keys are 1–4 `/`-separated segments (`"CN"`, `"CN/云南省/临沧市"`), each
/// optionally suffixed `--LANG` for a non-default-language variant of the
/// same node.
pub type RegionMap = HashMap<String, RegionRecord>;

/// Rule data of a single hierarchy node (country, area, city or city-area).
///
/// Field names follow the dataset's own vocabulary so records deserialize
/// straight from the regional JSON files. Every field is optional; a country
/// record is interpreted merged over the worldwide defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegionRecord {
    /// Display name of this node in its local script.
    pub name: Option<String>,
    /// Latin-script display name, where the local script is not Latin.
    pub lname: Option<String>,
    /// Format template: line breaks as `%n`, fields as `%A`, `%C`, …
    pub fmt: Option<String>,
    /// Latin-script format template; falls back to `fmt`.
    pub lfmt: Option<String>,
    /// Required-field placeholder codes, e.g. `"ACZ"`.
    pub require: Option<String>,
    /// Placeholder codes of fields rendered in upper case, e.g. `"CS"`.
    pub upper: Option<String>,
    /// Postal-code pattern source (unanchored).
    pub zip: Option<String>,
    /// Comma-separated example postal codes.
    pub zipex: Option<String>,
    /// `~`-delimited list of languages this region is published in; the
    /// default language comes first.
    pub languages: Option<String>,
    /// Language this record itself is written in.
    pub lang: Option<String>,
    /// Display prefix for postal codes, e.g. `"CH-"`.
    pub postprefix: Option<String>,
    pub state_name_type: Option<String>,
    pub locality_name_type: Option<String>,
    pub sublocality_name_type: Option<String>,
    pub zip_name_type: Option<String>,
    /// `~`-delimited canonical keys of this node's children.
    pub sub_keys: Option<String>,
    /// Labels for the children, parallel to `sub_keys`.
    pub sub_names: Option<String>,
    /// Latin-script names for the children, parallel to `sub_keys`.
    pub sub_lnames: Option<String>,
    /// Latin-script foreign names for the children, parallel to `sub_keys`.
    pub sub_lfnames: Option<String>,
}

impl RegionRecord {
    /// Overlay `other` on `self`; fields present in `other` win.
    ///
    /// Used to merge a country record over the worldwide defaults.
    pub fn merged(&self, other: &RegionRecord) -> RegionRecord {
        fn pick(base: &Option<String>, over: &Option<String>) -> Option<String> {
            over.clone().or_else(|| base.clone())
        }
        RegionRecord {
            name: pick(&self.name, &other.name),
            lname: pick(&self.lname, &other.lname),
            fmt: pick(&self.fmt, &other.fmt),
            lfmt: pick(&self.lfmt, &other.lfmt),
            require: pick(&self.require, &other.require),
            upper: pick(&self.upper, &other.upper),
            zip: pick(&self.zip, &other.zip),
            zipex: pick(&self.zipex, &other.zipex),
            languages: pick(&self.languages, &other.languages),
            lang: pick(&self.lang, &other.lang),
            postprefix: pick(&self.postprefix, &other.postprefix),
            state_name_type: pick(&self.state_name_type, &other.state_name_type),
            locality_name_type: pick(&self.locality_name_type, &other.locality_name_type),
            sublocality_name_type: pick(&self.sublocality_name_type, &other.sublocality_name_type),
            zip_name_type: pick(&self.zip_name_type, &other.zip_name_type),
            sub_keys: pick(&self.sub_keys, &other.sub_keys),
            sub_names: pick(&self.sub_names, &other.sub_names),
            sub_lnames: pick(&self.sub_lnames, &other.sub_lnames),
            sub_lfnames: pick(&self.sub_lfnames, &other.sub_lfnames),
        }
    }

    /// True if this node declares children.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.sub_keys.is_some()
    }

    /// Selectable (key, label) pairs for this node's children.
    ///
    /// Labels come from `sub_names`; when that list is absent and the set is
    /// not translated, each key doubles as its own label. For non-translated
    /// sets the Latin-script tiers (`sub_lnames`, then `sub_lfnames`) are
    /// appended as additional labels for the same keys. Empty label slots
    /// are skipped, and a shorter label list simply stops contributing.
    pub fn choices(&self, translated: bool) -> Vec<Choice> {
        let Some(sub_keys) = self.sub_keys.as_deref() else {
            return Vec::new();
        };
        let keys: Vec<&str> = sub_keys.split('~').collect();
        let mut choices = Vec::new();

        if let Some(names) = self.sub_names.as_deref() {
            pair_up(&mut choices, &keys, names);
        } else if !translated {
            choices.extend(keys.iter().map(|key| Choice::new(*key, *key)));
        }

        if !translated {
            if let Some(lnames) = self.sub_lnames.as_deref() {
                pair_up(&mut choices, &keys, lnames);
            }
            if let Some(lfnames) = self.sub_lfnames.as_deref() {
                pair_up(&mut choices, &keys, lfnames);
            }
        }
        choices
    }

    /// Languages declared by this node, in order; `None` is the base entry
    /// meaning "use the record's own language".
    pub fn language_list(&self) -> Vec<Option<String>> {
        match self.languages.as_deref() {
            Some(raw) => raw.split('~').map(|lang| Some(lang.to_string())).collect(),
            None => vec![None],
        }
    }

    /// Example postal codes, split out of `zipex`.
    pub fn zip_examples(&self) -> Vec<String> {
        match self.zipex.as_deref() {
            Some(raw) => raw.split(',').map(str::to_string).collect(),
            None => Vec::new(),
        }
    }
}

fn pair_up(choices: &mut Vec<Choice>, keys: &[&str], labels: &str) {
    for (key, label) in keys.iter().zip(labels.split('~')) {
        if !label.is_empty() {
            choices.push(Choice::new(*key, label));
        }
    }
}

// crates/addrdb-core/src/text.rs

//! Small text helpers shared by matching, normalization and rendering.

use crate::model::Choice;

/// Match free text against an ordered choice list.
///
/// Comparison is Unicode case-insensitive and whitespace-trimmed on both the
/// input and each candidate's key and label; the first candidate in list
/// order that equals the normalized input wins and its canonical key is
/// returned. Empty or whitespace-only input never matches.
///
/// # Examples
/// ```
/// use addrdb_core::model::Choice;
/// use addrdb_core::text::match_choices;
///
/// let choices = [Choice::new("CA", "California"), Choice::new("NV", "Nevada")];
/// assert_eq!(match_choices(" california ", &choices), Some("CA".to_string()));
/// assert_eq!(match_choices("nv", &choices), Some("NV".to_string()));
/// assert_eq!(match_choices("", &choices), None);
/// ```
pub fn match_choices(value: &str, choices: &[Choice]) -> Option<String> {
    let needle = value.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    choices
        .iter()
        .find(|choice| {
            choice.key.trim().to_lowercase() == needle
                || choice.label.trim().to_lowercase() == needle
        })
        .map(|choice| choice.key.clone())
}

/// Uppercase a value under a locale hint.
///
/// Turkic locales map the dotted `i` to `İ`; everything else uses plain
/// Unicode uppercasing. The hint is a BCP-47-ish tag of which only the
/// primary subtag matters (`"tr"`, `"tr-TR"`, `"az_AZ"` all count).
pub fn upper(value: &str, locale: Option<&str>) -> String {
    if locale.is_some_and(is_turkic) {
        let mut out = String::with_capacity(value.len());
        for ch in value.chars() {
            if ch == 'i' {
                out.push('İ');
            } else {
                out.extend(ch.to_uppercase());
            }
        }
        return out;
    }
    value.to_uppercase()
}

fn is_turkic(locale: &str) -> bool {
    let primary = locale.split(['-', '_']).next().unwrap_or(locale);
    primary.eq_ignore_ascii_case("tr") || primary.eq_ignore_ascii_case("az")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_in_list_order_wins() {
        let choices = [
            Choice::new("NS", "Nouvelle-Écosse"),
            Choice::new("NS2", "nouvelle-écosse"),
        ];
        assert_eq!(
            match_choices("NOUVELLE-ÉCOSSE", &choices),
            Some("NS".to_string())
        );
    }

    #[test]
    fn keys_and_labels_both_match() {
        let choices = [Choice::new("北京市", "Beijing Shi")];
        assert_eq!(match_choices("北京市", &choices), Some("北京市".to_string()));
        assert_eq!(
            match_choices("beijing shi", &choices),
            Some("北京市".to_string())
        );
        assert_eq!(match_choices("Beijing", &choices), None);
    }

    #[test]
    fn blank_input_never_matches() {
        let choices = [Choice::new("", ""), Choice::new("CA", "California")];
        assert_eq!(match_choices("", &choices), None);
        assert_eq!(match_choices("   ", &choices), None);
    }

    #[test]
    fn upper_is_unicode_aware() {
        assert_eq!(upper("Zürich", None), "ZÜRICH");
        assert_eq!(upper("straße", None), "STRASSE");
    }

    #[test]
    fn upper_honours_turkic_dotted_i() {
        assert_eq!(upper("istanbul", Some("tr")), "İSTANBUL");
        assert_eq!(upper("istanbul", Some("tr-TR")), "İSTANBUL");
        assert_eq!(upper("istanbul", Some("en")), "ISTANBUL");
        assert_eq!(upper("ısparta", None), "ISPARTA");
    }
}

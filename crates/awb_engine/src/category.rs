//! Human-readable category sort keys ("David Smith" -> "Smith, David").
//!
//! The reordering is a heuristic, not a name parser. Whenever it cannot tell
//! a surname from a regnal numeral it hands back the cleaned title untouched
//! rather than guess.

use crate::diacritics::remove_diacritics;
use crate::title_sanitizer::remove_namespace_string;
use awb_domain::lang::{LangCode, NameOrder};
use awb_domain::namespaces::NamespaceTable;
use awb_domain::site::SiteConfig;
use regex::Regex;
use std::sync::OnceLock;

/// Longest token treated as a regnal or generational numeral.
const MAX_ROMAN_LEN: usize = 5;

/// Builds `DEFAULTSORT`-style keys for one site's language and namespaces.
#[derive(Debug, Clone)]
pub struct CategoryKeyBuilder {
    lang: LangCode,
    namespaces: NamespaceTable,
}

impl CategoryKeyBuilder {
    pub fn new(lang: LangCode, namespaces: NamespaceTable) -> Self {
        Self { lang, namespaces }
    }

    pub fn for_site(site: &SiteConfig) -> Self {
        Self::new(site.lang, site.namespaces.clone())
    }

    pub fn lang(&self) -> LangCode {
        self.lang
    }

    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// Sort key for a page about a person, e.g. "John Doe, Jr." becomes
    /// "Doe, John, Jr." and "John Paul II" becomes "Paul, John, II".
    pub fn make_human_cat_key(&self, name: &str) -> String {
        let without_disambig = trailing_parenthetical().replace(name, "");
        let original = remove_namespace_string(without_disambig.trim(), &self.namespaces)
            .trim()
            .to_string();

        let order = self.lang.name_order();
        if !original.contains(' ') || order == NameOrder::Patronymic {
            return original;
        }

        let mut suffix = String::new();
        let mut working: &str = &original;
        if order == NameOrder::GivenFirst {
            if let Some(pos) = working.find(',') {
                suffix = working[pos + 1..].trim().to_string();
                working = &working[..pos];
            }
        }

        let (mut last_name, mut rest) = split_last_word(working);
        if is_roman_number(last_name) {
            if !rest.contains(' ') {
                tracing::debug!(title = %original, "numeral without a surname, not reordering");
                return original;
            }
            suffix = format!("{last_name} {suffix}");
            (last_name, rest) = split_last_word(rest);
        }

        let key = format!("{last_name}, {rest}, {suffix}");
        remove_diacritics(key.trim_matches([' ', ','])).into_owned()
    }
}

impl Default for CategoryKeyBuilder {
    fn default() -> Self {
        Self::for_site(&SiteConfig::default())
    }
}

/// A short run of uppercase `I`, `V` and `X`, as in "Henry VIII".
pub fn is_roman_number(s: &str) -> bool {
    s.len() <= MAX_ROMAN_LEN && s.chars().all(|c| matches!(c, 'I' | 'V' | 'X'))
}

fn trailing_parenthetical() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(.*?\)\n?$").expect("known-valid regex"))
}

/// Split at the last space: `(last word, trimmed remainder)`. Without a
/// space the whole input is the last word.
fn split_last_word(name: &str) -> (&str, &str) {
    let start = name.rfind(' ').map_or(0, |i| i + 1);
    (&name[start..], name[..start].trim())
}

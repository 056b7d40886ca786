//! `%%keyword%%` expansion for edit summaries and appended text.

use crate::category::CategoryKeyBuilder;
use crate::title_sanitizer::{get_namespace_string, remove_namespace_string};

pub const TITLE: &str = "%%title%%";
pub const KEY: &str = "%%key%%";
pub const TITLE_NAME: &str = "%%titlename%%";
pub const NAMESPACE: &str = "%%namespace%%";

/// Replace the title keywords in `text`:
///
/// | keyword | value |
/// |---|---|
/// | `%%title%%` | the title as given |
/// | `%%key%%` | its human category sort key |
/// | `%%titlename%%` | the title without namespace prefixes |
/// | `%%namespace%%` | the namespace name, without colon |
pub fn apply_keywords(title: &str, text: &str, keys: &CategoryKeyBuilder) -> String {
    let mut text = text.replace(TITLE, title);
    if text.contains(KEY) {
        text = text.replace(KEY, &keys.make_human_cat_key(title));
    }
    if text.contains(TITLE_NAME) {
        text = text.replace(TITLE_NAME, &remove_namespace_string(title, keys.namespaces()));
    }
    if text.contains(NAMESPACE) {
        text = text.replace(NAMESPACE, &get_namespace_string(title, keys.namespaces()));
    }
    text
}

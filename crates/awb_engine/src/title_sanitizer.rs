//! Title validity checks and namespace prefix stripping.

use awb_domain::namespaces::NamespaceTable;

/// Characters MediaWiki never allows in a page title.
pub const INVALID_TITLE_CHARS: [char; 8] = ['[', ']', '{', '}', '|', '<', '>', '#'];

pub fn is_valid_title(title: &str) -> bool {
    !title.contains(INVALID_TITLE_CHARS)
}

/// Drop every invalid character, keeping the rest in order.
pub fn remove_invalid_chars(title: &str) -> String {
    title.replace(INVALID_TITLE_CHARS, "")
}

/// Remove every occurrence of every local namespace prefix, wherever it
/// appears in `title`.
pub fn remove_namespace_string(title: &str, table: &NamespaceTable) -> String {
    let mut result = title.to_string();
    for entry in table {
        if result.contains(entry.prefix.as_str()) {
            result = result.replace(entry.prefix.as_str(), "");
        }
    }
    result
}

/// The first local prefix contained in `title`, without its colon, or `""`.
pub fn get_namespace_string(title: &str, table: &NamespaceTable) -> String {
    table
        .find_contained(title)
        .map(|entry| entry.prefix.replace(':', ""))
        .unwrap_or_default()
}

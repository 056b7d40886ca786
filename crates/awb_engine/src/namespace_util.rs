//! Namespace classification for raw MediaWiki titles.
//!
//! Handles:
//! - Resolving the namespace index of a title against the site's local
//!   prefix table, then the English fallback table.
//! - Predicates built on that index: main space, editable, talk, "important".
//!
//! Titles without a colon are always in the main namespace and never touch
//! either table.

use awb_domain::namespaces::NamespaceTable;
use awb_domain::types::Namespace;

/// Namespaces above this index are extension namespaces AWB won't edit.
const MAX_EDITABLE_NAMESPACE: i32 = 99;

/// Resolves namespace indices for one site.
#[derive(Debug, Clone)]
pub struct NamespaceClassifier {
    local: NamespaceTable,
    fallback: NamespaceTable,
}

impl NamespaceClassifier {
    /// Classifier over `local`, falling back to the English table.
    pub fn new(local: NamespaceTable) -> Self {
        Self::with_fallback(local, NamespaceTable::english().clone())
    }

    pub fn with_fallback(local: NamespaceTable, fallback: NamespaceTable) -> Self {
        Self { local, fallback }
    }

    pub fn local_table(&self) -> &NamespaceTable {
        &self.local
    }

    /// Namespace index of `title`. Unmatched titles are in the main namespace.
    pub fn namespace_index(&self, title: &str) -> Namespace {
        if !title.contains(':') {
            return Namespace::MAIN;
        }

        self.local
            .match_prefix(title)
            .or_else(|| self.fallback.match_prefix(title))
            .map_or(Namespace::MAIN, |entry| entry.index)
    }

    pub fn is_main_space(&self, title: &str) -> bool {
        self.namespace_index(title) == Namespace::MAIN
    }

    /// Whether AWB may edit pages with this title.
    ///
    /// Commons-prefixed titles, virtual namespaces, extension namespaces
    /// above 99, file talk and MediaWiki pages are all off limits.
    pub fn is_editable_space(&self, title: &str) -> bool {
        is_editable_title(title, self.namespace_index(title))
    }

    pub fn is_talk_page(&self, title: &str) -> bool {
        is_talk_namespace(self.namespace_index(title))
    }

    /// Main, file, template or category namespace.
    pub fn is_important_namespace(&self, title: &str) -> bool {
        is_important(self.namespace_index(title))
    }
}

impl Default for NamespaceClassifier {
    fn default() -> Self {
        Self::new(NamespaceTable::english().clone())
    }
}

pub fn is_talk_namespace(ns: Namespace) -> bool {
    ns.is_talk()
}

/// `title` already resolved to `ns`.
pub(crate) fn is_editable_title(title: &str, ns: Namespace) -> bool {
    !title.starts_with("Commons:") && is_editable_namespace(ns)
}

pub fn is_editable_namespace(ns: Namespace) -> bool {
    !(ns.0 < 0
        || ns.0 > MAX_EDITABLE_NAMESPACE
        || ns == Namespace::FILE_TALK
        || ns == Namespace::MEDIAWIKI)
}

pub fn is_important(ns: Namespace) -> bool {
    matches!(
        ns,
        Namespace::MAIN | Namespace::FILE | Namespace::TEMPLATE | Namespace::CATEGORY
    )
}

use crate::category::CategoryKeyBuilder;
use crate::keywords::apply_keywords;
use crate::namespace_util::{NamespaceClassifier, is_editable_title, is_important};
use crate::title_sanitizer::{
    get_namespace_string, is_valid_title, remove_invalid_chars, remove_namespace_string,
};
use crate::title_util::turn_first_to_upper;
use awb_domain::lang::{LangCode, Project};
use awb_domain::namespaces::NamespaceTable;
use awb_domain::site::SiteConfig;
use awb_domain::types::Namespace;
use serde::Serialize;

/// Everything derived from a single title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleReport {
    pub title: String,
    pub namespace: Namespace,
    pub namespace_name: String,
    pub is_main_space: bool,
    pub is_editable_space: bool,
    pub is_talk_page: bool,
    pub is_important_namespace: bool,
    pub is_valid_title: bool,
    pub sanitized: String,
    pub title_name: String,
    pub sort_key: String,
}

/// Title handling for one wiki, built once from its [`SiteConfig`].
#[derive(Debug, Clone)]
pub struct TitleTools {
    project: Project,
    classifier: NamespaceClassifier,
    cat_keys: CategoryKeyBuilder,
}

impl TitleTools {
    pub fn new(site: SiteConfig) -> Self {
        let cat_keys = CategoryKeyBuilder::for_site(&site);
        Self {
            project: site.project,
            classifier: NamespaceClassifier::new(site.namespaces),
            cat_keys,
        }
    }

    pub fn lang(&self) -> LangCode {
        self.cat_keys.lang()
    }

    pub fn project(&self) -> Project {
        self.project
    }

    pub fn namespaces(&self) -> &NamespaceTable {
        self.classifier.local_table()
    }

    pub fn classifier(&self) -> &NamespaceClassifier {
        &self.classifier
    }

    pub fn namespace_index(&self, title: &str) -> Namespace {
        self.classifier.namespace_index(title)
    }

    pub fn make_human_cat_key(&self, title: &str) -> String {
        self.cat_keys.make_human_cat_key(title)
    }

    pub fn remove_namespace_string(&self, title: &str) -> String {
        remove_namespace_string(title, self.namespaces())
    }

    pub fn get_namespace_string(&self, title: &str) -> String {
        get_namespace_string(title, self.namespaces())
    }

    pub fn apply_keywords(&self, title: &str, text: &str) -> String {
        apply_keywords(title, text, &self.cat_keys)
    }

    pub fn turn_first_to_upper(&self, input: &str) -> String {
        turn_first_to_upper(input, self.project)
    }

    pub fn analyze(&self, title: &str) -> TitleReport {
        let namespace = self.classifier.namespace_index(title);
        let report = TitleReport {
            title: title.to_string(),
            namespace,
            namespace_name: self.get_namespace_string(title),
            is_main_space: namespace == Namespace::MAIN,
            is_editable_space: is_editable_title(title, namespace),
            is_talk_page: namespace.is_talk(),
            is_important_namespace: is_important(namespace),
            is_valid_title: is_valid_title(title),
            sanitized: remove_invalid_chars(title),
            title_name: self.remove_namespace_string(title),
            sort_key: self.make_human_cat_key(title),
        };
        tracing::trace!(title, namespace = namespace.0, sort_key = %report.sort_key, "analyzed title");
        report
    }
}

impl Default for TitleTools {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

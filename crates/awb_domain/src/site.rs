use crate::lang::{LangCode, Project};
use crate::namespaces::NamespaceTable;
use serde::{Deserialize, Serialize};

/// Everything title handling needs to know about one wiki.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub lang: LangCode,
    #[serde(default)]
    pub project: Project,
    /// Local-language namespace prefixes, most specific first.
    #[serde(default)]
    pub namespaces: NamespaceTable,
}

impl SiteConfig {
    pub fn new(lang: LangCode, project: Project, namespaces: NamespaceTable) -> Self {
        Self {
            lang,
            project,
            namespaces,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: LangCode::En,
            project: Project::Wikipedia,
            namespaces: NamespaceTable::english().clone(),
        }
    }
}

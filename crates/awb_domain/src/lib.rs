//! Domain types shared by the AWB-RS title tooling.

pub mod lang;
pub mod namespaces;
pub mod site;
pub mod types;

pub use lang::{LangCode, NameOrder, Project, UnknownLangCode, UnknownProject};
pub use namespaces::{NamespaceEntry, NamespaceTable, NamespaceTableError, ShadowedPrefix};
pub use site::SiteConfig;
pub use types::Namespace;

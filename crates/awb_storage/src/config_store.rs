use crate::error::StorageError;
use awb_domain::lang::{LangCode, Project};
use awb_domain::namespaces::{NamespaceEntry, NamespaceTable};
use awb_domain::site::SiteConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Site id that resolves to English Wikipedia even when the file doesn't
/// define it.
pub const DEFAULT_SITE: &str = "enwiki";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub default_site: String,
    pub log_level: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_site: DEFAULT_SITE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// On-disk form of a site. Namespace entries stay a plain list here so a bad
/// table is reported against its site id.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteEntry {
    #[serde(default)]
    lang: LangCode,
    #[serde(default)]
    project: Project,
    #[serde(default)]
    namespaces: Vec<NamespaceEntry>,
}

impl From<&SiteConfig> for SiteEntry {
    fn from(site: &SiteConfig) -> Self {
        Self {
            lang: site.lang,
            project: site.project,
            namespaces: site.namespaces.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    preferences: Preferences,
    #[serde(default)]
    sites: BTreeMap<String, SiteEntry>,
}

pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_file(&self) -> Result<ConfigFile, StorageError> {
        if !self.path.exists() {
            return Ok(ConfigFile::default());
        }
        let data = std::fs::read_to_string(&self.path)?;
        let config: ConfigFile = toml::from_str(&data)?;
        Ok(config)
    }

    fn save_file(&self, config: &ConfigFile) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = toml::to_string_pretty(config)?;
        std::fs::write(&self.path, data)?;

        // Set restrictive permissions on Unix (0600 = owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    pub fn load_preferences(&self) -> Result<Preferences, StorageError> {
        Ok(self.load_file()?.preferences)
    }

    pub fn save_preferences(&self, prefs: &Preferences) -> Result<(), StorageError> {
        let mut config = self.load_file()?;
        config.preferences = prefs.clone();
        self.save_file(&config)
    }

    /// Load and validate a site. Shadowed namespace prefixes are logged, not
    /// rejected: the table is still deterministic, just probably not intended.
    pub fn load_site(&self, id: &str) -> Result<SiteConfig, StorageError> {
        let config = self.load_file()?;
        let Some(entry) = config.sites.get(id) else {
            if id == DEFAULT_SITE {
                return Ok(SiteConfig::default());
            }
            return Err(StorageError::NotFound(id.to_string()));
        };

        let namespaces = NamespaceTable::new(entry.namespaces.clone()).map_err(|source| {
            StorageError::InvalidConfig {
                site: id.to_string(),
                source,
            }
        })?;
        for shadow in namespaces.shadowed_prefixes() {
            tracing::warn!(
                site = id,
                shadowing = %shadow.shadowing.prefix,
                shadowed = %shadow.shadowed.prefix,
                "namespace prefix can never match; list longer prefixes first"
            );
        }

        tracing::debug!(site = id, lang = %entry.lang, namespaces = namespaces.len(), "loaded site");
        Ok(SiteConfig::new(entry.lang, entry.project, namespaces))
    }

    /// The preferred site id together with its configuration.
    pub fn load_default_site(&self) -> Result<(String, SiteConfig), StorageError> {
        let id = self.load_preferences()?.default_site;
        let site = self.load_site(&id)?;
        Ok((id, site))
    }

    pub fn save_site(&self, id: &str, site: &SiteConfig) -> Result<(), StorageError> {
        let mut config = self.load_file()?;
        config.sites.insert(id.to_string(), SiteEntry::from(site));
        self.save_file(&config)
    }

    /// Site ids defined in the file, sorted.
    pub fn list_sites(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.load_file()?.sites.into_keys().collect())
    }
}

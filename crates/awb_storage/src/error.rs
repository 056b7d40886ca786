use awb_domain::namespaces::NamespaceTableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization: {0}")]
    Serialize(String),
    #[error("Deserialization: {0}")]
    Deserialize(String),
    #[error("Invalid configuration for site {site}: {source}")]
    InvalidConfig {
        site: String,
        #[source]
        source: NamespaceTableError,
    },
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<toml::de::Error> for StorageError {
    fn from(e: toml::de::Error) -> Self {
        Self::Deserialize(e.to_string())
    }
}

impl From<toml::ser::Error> for StorageError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

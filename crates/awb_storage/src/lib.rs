pub mod config_store;
pub mod error;

pub use config_store::{DEFAULT_SITE, Preferences, TomlConfigStore};
pub use error::StorageError;

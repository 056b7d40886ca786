use awb_domain::lang::{LangCode, Project};
use awb_domain::namespaces::{NamespaceTable, NamespaceTableError};
use awb_domain::site::SiteConfig;
use awb_domain::types::Namespace;
use awb_storage::{DEFAULT_SITE, Preferences, StorageError, TomlConfigStore};
use tempfile::TempDir;

fn dewiki() -> SiteConfig {
    SiteConfig::new(
        LangCode::De,
        Project::Wikipedia,
        NamespaceTable::from_pairs([
            (15, "Kategorie Diskussion:"),
            (14, "Kategorie:"),
            (10, "Vorlage:"),
            (2, "Benutzer:"),
        ])
        .unwrap(),
    )
}

#[test]
fn test_sites_and_preferences_share_one_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("awb-titles.toml");
    let store = TomlConfigStore::new(&path);

    store.save_site("dewiki", &dewiki()).unwrap();
    store
        .save_preferences(&Preferences {
            default_site: "dewiki".to_string(),
            log_level: "warn".to_string(),
        })
        .unwrap();

    // A second store over the same path sees both.
    let reopened = TomlConfigStore::new(&path);
    let (id, site) = reopened.load_default_site().unwrap();
    assert_eq!(id, "dewiki");
    assert_eq!(site, dewiki());
    assert_eq!(reopened.load_preferences().unwrap().log_level, "warn");
}

#[test]
fn test_saved_file_is_readable_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("awb-titles.toml");
    let store = TomlConfigStore::new(&path);
    store.save_site("dewiki", &dewiki()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[sites.dewiki]"));
    assert!(text.contains("lang = "));
    assert!(text.contains("Kategorie Diskussion:"));
}

#[test]
fn test_overwrite_site() {
    let temp_dir = TempDir::new().unwrap();
    let store = TomlConfigStore::new(temp_dir.path().join("config.toml"));

    store.save_site("wiki", &SiteConfig::default()).unwrap();
    store.save_site("wiki", &dewiki()).unwrap();

    let site = store.load_site("wiki").unwrap();
    assert_eq!(site.lang, LangCode::De);
    assert_eq!(site.namespaces.prefix_for(Namespace::TEMPLATE), Some("Vorlage:"));
    assert_eq!(store.list_sites().unwrap(), vec!["wiki"]);
}

#[test]
fn test_shadowed_prefix_still_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[sites.shadowed]
lang = "de"

[[sites.shadowed.namespaces]]
index = 14
prefix = "Kategorie:"

[[sites.shadowed.namespaces]]
index = 15
prefix = "Kategorie:Diskussion:"
"#,
    )
    .unwrap();

    let site = TomlConfigStore::new(&path).load_site("shadowed").unwrap();
    assert_eq!(site.namespaces.shadowed_prefixes().len(), 1);
    assert_eq!(
        site.namespaces
            .match_prefix("Kategorie:Diskussion:Foo")
            .map(|e| e.index),
        Some(Namespace::CATEGORY)
    );
}

#[test]
fn test_empty_prefix_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[sites.empty]\n[[sites.empty.namespaces]]\nindex = 2\nprefix = \"\"\n",
    )
    .unwrap();

    match TomlConfigStore::new(&path).load_site("empty") {
        Err(StorageError::InvalidConfig {
            site,
            source: NamespaceTableError::EmptyPrefix { .. },
        }) => assert_eq!(site, "empty"),
        other => panic!("Expected InvalidConfig error, got {other:?}"),
    }
}

#[test]
fn test_malformed_toml_is_deserialize_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[preferences\ndefault_site = ").unwrap();

    let store = TomlConfigStore::new(&path);
    assert!(matches!(store.load_preferences(), Err(StorageError::Deserialize(_))));
    assert!(matches!(store.load_site(DEFAULT_SITE), Err(StorageError::Deserialize(_))));
}

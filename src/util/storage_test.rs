use super::*;

struct FailingStorage;

impl PreferenceStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, DarkModeError> {
        Err(DarkModeError::Storage("denied".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), DarkModeError> {
        Err(DarkModeError::Storage("denied".to_owned()))
    }
}

#[test]
fn load_json_returns_none_for_missing_key() {
    let storage = MemoryStorage::default();
    assert_eq!(load_json::<bool>(&storage, "darkMode"), None);
}

#[test]
fn load_json_parses_stored_booleans() {
    assert_eq!(load_json::<bool>(&MemoryStorage::with_entry("darkMode", "true"), "darkMode"), Some(true));
    assert_eq!(load_json::<bool>(&MemoryStorage::with_entry("darkMode", "false"), "darkMode"), Some(false));
}

#[test]
fn load_json_rejects_malformed_values() {
    for raw in ["", "yes", "1", "\"true\"", "{"] {
        let storage = MemoryStorage::with_entry("darkMode", raw);
        assert_eq!(load_json::<bool>(&storage, "darkMode"), None, "raw value {raw:?}");
    }
}

#[test]
fn load_json_swallows_backend_errors() {
    assert_eq!(load_json::<bool>(&FailingStorage, "darkMode"), None);
}

#[test]
fn save_json_writes_literal_boolean_strings() {
    let storage = MemoryStorage::default();
    save_json(&storage, "darkMode", &true);
    assert_eq!(storage.value("darkMode").as_deref(), Some("true"));
    save_json(&storage, "darkMode", &false);
    assert_eq!(storage.value("darkMode").as_deref(), Some("false"));
}

#[test]
fn save_json_ignores_backend_errors() {
    save_json(&FailingStorage, "darkMode", &true);
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::default();
    let view = storage.clone();
    save_json(&storage, "k", &true);
    assert_eq!(view.value("k").as_deref(), Some("true"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn platform_storage_is_empty_outside_the_browser() {
    let storage = platform_storage();
    assert_eq!(storage.get("darkMode"), Ok(None));
}

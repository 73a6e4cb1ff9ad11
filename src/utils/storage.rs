// ============================================================================
// STORAGE - Capacidad clave/valor inyectable
// ============================================================================
// LocalStorage en el navegador, MemoryStorage en tests (o si el navegador
// bloquea localStorage).
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

/// Persistencia clave/valor sobre strings
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// window.localStorage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// true si el navegador expone localStorage
    pub fn is_available() -> bool {
        get_local_storage().is_some()
    }

    fn storage(&self) -> Result<Storage, String> {
        get_local_storage().ok_or_else(|| "localStorage is not available".to_string())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.storage()?
            .get_item(key)
            .map_err(|_| format!("Could not read '{}' from localStorage", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| format!("Could not write '{}' to localStorage", key))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| format!("Could not remove '{}' from localStorage", key))
    }
}

/// Almacenamiento en memoria, compartido entre clones
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Could not serialize '{}': {}", key, e))?;
    store.set(key, &json)
}

/// None si la clave no existe o el JSON no es válido
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = store.get(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] '{}' contiene JSON inválido: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        language: String,
    }

    #[test]
    fn memory_storage_is_shared_between_clones() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap(), Some("v".to_string()));
        other.remove("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn json_helpers_round_trip_and_tolerate_garbage() {
        let storage = MemoryStorage::new();
        save_json(&storage, "prefs", &Prefs { language: "en".into() }).unwrap();
        assert_eq!(
            load_json::<Prefs>(&storage, "prefs"),
            Some(Prefs { language: "en".into() })
        );

        storage.set("prefs", "{not json").unwrap();
        assert_eq!(load_json::<Prefs>(&storage, "prefs"), None);
        assert_eq!(load_json::<Prefs>(&storage, "missing"), None);
    }
}

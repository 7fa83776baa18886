use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{window, Storage};

/// Almacenamiento clave/valor persistente del cliente
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage` del navegador; los valores se guardan tal cual (sin JSON)
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    pub fn new() -> Option<Self> {
        get_local_storage().map(|storage| Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage
            .set_item(key, value)
            .map_err(|_| format!("Error guardando '{}' en localStorage", key))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.storage
            .remove_item(key)
            .map_err(|_| format!("Error eliminando '{}' de localStorage", key))
    }
}

/// Almacenamiento en memoria (sin persistencia entre recargas)
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("access_token"), None);
        store.set("access_token", "abc").unwrap();
        assert_eq!(store.get("access_token").as_deref(), Some("abc"));
        store.remove("access_token").unwrap();
        assert_eq!(store.get("access_token"), None);
    }
}

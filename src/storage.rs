//! String-keyed persistence for remembered tab selections.
//!
//! Keys are used verbatim. Two tab sets sharing a key will overwrite each
//! other's value.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("storage call failed: {0}")]
    Js(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .unwrap_or_else(|| format!("{value:?}"));
        StorageError::Js(message)
    }
}

pub trait SelectionStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()?
            .ok_or(StorageError::Unavailable)
    }
}

impl SelectionStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(Self::storage()?.set_item(key, value)?)
    }
}

/// In-process store. Clones share the same map, so a value saved through one
/// handle is visible to every other.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

impl PartialEq for MemoryStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SelectionStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[test]
fn test_memory_store_shared() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut a = MemoryStore::new();
    let b = a.clone();
    assert_eq!(b.load("k"), Ok(None));
    a.save("k", "first").unwrap();
    assert_eq!(b.load("k"), Ok(Some("first".to_string())));
    a.save("k", "second").unwrap();
    assert_eq!(b.get("k").as_deref(), Some("second"));
    assert_eq!(a, b);
    assert_ne!(a, MemoryStore::new());
}

#[test]
fn test_storage_error_display() {
    assert_eq!(
        StorageError::Unavailable.to_string(),
        "local storage is unavailable"
    );
    assert_eq!(
        StorageError::Js("QuotaExceededError".to_string()).to_string(),
        "storage call failed: QuotaExceededError"
    );
}

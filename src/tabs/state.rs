//! Active-tab bookkeeping.
//!
//! Selection can be owned by the caller (a controlled id passed in every
//! frame) or by the tab set itself. [`TabSelection::active`] is the only place
//! that decides which one wins.

use crate::storage::SelectionStore;

/// Picks the id a freshly mounted tab set starts on.
///
/// Controlled id first, then a remembered id that still names one of the
/// tabs, then the first tab. An empty tab list selects nothing (`""`).
pub fn initial_active(tab_ids: &[String], controlled: Option<&str>, stored: Option<&str>) -> String {
    if let Some(id) = controlled {
        return id.to_string();
    }
    if let Some(id) = stored {
        if tab_ids.iter().any(|t| t == id) {
            return id.to_string();
        }
        tracing::debug!(stored = id, "ignoring remembered tab that no longer exists");
    }
    tab_ids.first().cloned().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabSelection<S> {
    internal: String,
    last_controlled: Option<String>,
    storage_key: Option<String>,
    store: S,
}

impl<S: SelectionStore> TabSelection<S> {
    pub fn mount(
        tab_ids: &[String],
        controlled: Option<&str>,
        storage_key: Option<String>,
        store: S,
    ) -> Self {
        let stored = match (&storage_key, controlled) {
            (Some(key), None) => match store.load(key) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "could not read remembered tab");
                    None
                }
            },
            _ => None,
        };
        let internal = initial_active(tab_ids, controlled, stored.as_deref());
        tracing::debug!(active = %internal, "mounted tab set");
        Self {
            internal,
            last_controlled: controlled.map(str::to_string),
            storage_key,
            store,
        }
    }

    pub fn active<'a>(&'a self, controlled: Option<&'a str>) -> &'a str {
        controlled.unwrap_or(&self.internal)
    }

    pub fn internal(&self) -> &str {
        &self.internal
    }

    pub fn needs_sync(&self, controlled: Option<&str>) -> bool {
        self.last_controlled.as_deref() != controlled
    }

    /// Copies a changed controlled id into internal state and reports whether
    /// internal state moved. Only the prop side flows in here; internal
    /// changes reach the caller through `select`.
    pub fn sync_controlled(&mut self, controlled: Option<&str>) -> bool {
        if !self.needs_sync(controlled) {
            return false;
        }
        self.last_controlled = controlled.map(str::to_string);
        match controlled {
            Some(id) if self.internal != id => {
                self.internal = id.to_string();
                true
            }
            _ => false,
        }
    }

    /// Switches to `id` without checking that such a tab exists, remembers it
    /// under the storage key and then calls `notify` with the new state in place.
    pub fn select(&mut self, id: &str, notify: impl FnOnce(&Self, &str)) {
        self.internal = id.to_string();
        tracing::info!(tab = id, "selected tab");
        if let Some(key) = &self.storage_key {
            if let Err(e) = self.store.save(key, id) {
                tracing::warn!(key = %key, error = %e, "could not remember selected tab");
            }
        }
        notify(self, id);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    struct BrokenStore;

    impl SelectionStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Js("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_first_tab_by_default() {
        let _ = tracing_subscriber::fmt::try_init();

        let tabs = ids(&["a", "b", "c"]);
        let sel = TabSelection::mount(&tabs, None, Some("k".to_string()), MemoryStore::new());
        assert_eq!(sel.active(None), "a");
        assert_eq!(initial_active(&[], None, None), "");
    }

    #[test]
    fn test_remembered_across_mounts() {
        let _ = tracing_subscriber::fmt::try_init();

        let tabs = ids(&["a", "b", "c"]);
        let store = MemoryStore::new();
        let mut first = TabSelection::mount(&tabs, None, Some("k".to_string()), store.clone());
        first.select("b", |_, _| {});
        drop(first);

        let second = TabSelection::mount(&tabs, None, Some("k".to_string()), store.clone());
        assert_eq!(second.active(None), "b");
    }

    #[test]
    fn test_stale_remembered_ignored() {
        let _ = tracing_subscriber::fmt::try_init();

        let mut store = MemoryStore::new();
        store.save("k", "x").unwrap();
        let sel = TabSelection::mount(&ids(&["a", "b"]), None, Some("k".to_string()), store);
        assert_eq!(sel.active(None), "a");
    }

    #[test]
    fn test_controlled_wins() {
        let _ = tracing_subscriber::fmt::try_init();

        let mut store = MemoryStore::new();
        store.save("k", "b").unwrap();
        let tabs = ids(&["a", "b", "c"]);
        let mut sel = TabSelection::mount(&tabs, Some("c"), Some("k".to_string()), store);
        assert_eq!(sel.active(Some("c")), "c");
        assert_eq!(sel.internal(), "c");

        // internal writes still happen but the controlled id is what renders
        sel.select("a", |_, _| {});
        assert_eq!(sel.internal(), "a");
        assert_eq!(sel.active(Some("c")), "c");
    }

    #[test]
    fn test_notify_after_update() {
        let _ = tracing_subscriber::fmt::try_init();

        let tabs = ids(&["a", "b"]);
        let mut sel = TabSelection::mount(&tabs, None, None, MemoryStore::new());
        let calls = RefCell::new(Vec::new());
        sel.select("b", |s, id| {
            calls.borrow_mut().push((id.to_string(), s.active(None).to_string()));
        });
        assert_eq!(
            calls.into_inner(),
            vec![("b".to_string(), "b".to_string())]
        );
    }

    #[test]
    fn test_unknown_id_accepted() {
        let _ = tracing_subscriber::fmt::try_init();

        let store = MemoryStore::new();
        let mut sel = TabSelection::mount(&ids(&["a"]), None, Some("k".to_string()), store.clone());
        sel.select("missing", |_, _| {});
        assert_eq!(sel.active(None), "missing");
        assert_eq!(store.get("k").as_deref(), Some("missing"));
    }

    #[test]
    fn test_storage_failures_swallowed() {
        let _ = tracing_subscriber::fmt::try_init();

        let mut sel = TabSelection::mount(&ids(&["a", "b"]), None, Some("k".to_string()), BrokenStore);
        assert_eq!(sel.active(None), "a");
        let mut notified = 0;
        sel.select("b", |_, _| notified += 1);
        assert_eq!(sel.active(None), "b");
        assert_eq!(notified, 1);
    }

    #[test]
    fn test_sync_controlled() {
        let _ = tracing_subscriber::fmt::try_init();

        let tabs = ids(&["a", "b", "c"]);
        let mut sel = TabSelection::mount(&tabs, Some("a"), None, MemoryStore::new());
        assert!(!sel.needs_sync(Some("a")));
        assert!(!sel.sync_controlled(Some("a")));

        // unchanged prop does not drag internal state back
        sel.select("b", |_, _| {});
        assert!(!sel.sync_controlled(Some("a")));
        assert_eq!(sel.internal(), "b");

        assert!(sel.sync_controlled(Some("c")));
        assert_eq!(sel.internal(), "c");

        // prop catching up with internal state is bookkeeping only
        sel.select("a", |_, _| {});
        assert!(!sel.sync_controlled(Some("a")));
        sel.select("b", |_, _| {});
        assert!(!sel.needs_sync(Some("a")));
        assert_eq!(sel.internal(), "b");

        // releasing control keeps the internal id
        assert!(sel.needs_sync(None));
        assert!(!sel.sync_controlled(None));
        assert_eq!(sel.active(None), "b");
    }
}

//! In-process store with a switch for simulating datastore outages.

use super::GroupStore;
use crate::error::StoreError;
use crate::model::{Group, NewGroup};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryGroupStore {
    inner: RwLock<Inner>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Group>,
    last_id: i64,
}

impl MemoryGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every call fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GroupStore for MemoryGroupStore {
    async fn find_all(&self) -> Result<Vec<Group>, StoreError> {
        self.check()?;
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, StoreError> {
        self.check()?;
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, group: &NewGroup) -> Result<Group, StoreError> {
        self.check()?;
        let mut inner = self.inner.write().await;
        // Ids are never reused, matching a database sequence.
        inner.last_id += 1;
        let stored = group.clone().into_group(inner.last_id);
        inner.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i64, group: &NewGroup) -> Result<Option<Group>, StoreError> {
        self.check()?;
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|row| {
            *row = group.clone().into_group(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn new_group(name: &str) -> NewGroup {
        NewGroup {
            group_name: name.into(),
            arrival: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            departure: Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryGroupStore::new();
        let a = store.create(&new_group("A")).await.unwrap();
        assert!(store.delete(a.id).await.unwrap());
        let b = store.create(&new_group("B")).await.unwrap();
        assert!(b.id > a.id);
        assert!(!store.delete(a.id).await.unwrap());
    }

    #[tokio::test]
    async fn update_missing_row_is_none() {
        let store = MemoryGroupStore::new();
        assert_eq!(store.update(42, &new_group("A")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unavailable_fails_every_call() {
        let store = MemoryGroupStore::new();
        store.set_unavailable(true);
        assert!(matches!(store.find_all().await, Err(StoreError::Unavailable)));
        assert!(matches!(store.ping().await, Err(StoreError::Unavailable)));
        store.set_unavailable(false);
        assert!(store.find_all().await.unwrap().is_empty());
    }
}

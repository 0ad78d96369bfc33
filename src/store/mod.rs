//! Datastore contract for groups and its implementations.

mod memory;
mod postgres;

pub use memory::MemoryGroupStore;
pub use postgres::PgGroupStore;

use crate::error::StoreError;
use crate::model::{Group, NewGroup};
use async_trait::async_trait;

/// Everything the handlers need from persistence. Injected through [`crate::AppState`].
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// All groups, ordered by id.
    async fn find_all(&self) -> Result<Vec<Group>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, StoreError>;

    /// Insert and return the stored row with its assigned id.
    async fn create(&self, group: &NewGroup) -> Result<Group, StoreError>;

    /// Overwrite all mutable columns. `None` when no row has this id.
    async fn update(&self, id: i64, group: &NewGroup) -> Result<Option<Group>, StoreError>;

    /// Returns `false` when no row has this id.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

//! Groups API: REST backend for group stay records.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, Operation, StoreError};
pub use migration::{apply_migrations, ensure_database_exists};
pub use model::{Group, GroupPayload, NewGroup};
pub use routes::{app_router, common_routes, group_routes};
pub use state::AppState;
pub use store::{GroupStore, MemoryGroupStore, PgGroupStore};

//! Database bootstrap: create the target database if missing, then the groups table.

use crate::config::DatabaseSettings;
use crate::error::StoreError;
use sqlx::{ConnectOptions, PgPool};

/// Quoted table name shared by DDL and queries.
pub const GROUPS_TABLE: &str = "\"groups\"";

/// Connect to the `postgres` maintenance database and create `settings.name` if it does not exist.
pub async fn ensure_database_exists(settings: &DatabaseSettings) -> Result<(), StoreError> {
    if settings.name.is_empty() || settings.name == "postgres" {
        return Ok(());
    }
    let mut conn = settings.connect_options_for("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&settings.name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %settings.name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&settings.name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Idempotent DDL for the groups table.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            group_name TEXT NOT NULL,
            arrival TIMESTAMPTZ NOT NULL,
            departure TIMESTAMPTZ NOT NULL
        )
        "#,
        GROUPS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::quote_ident;

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("groups"), "\"groups\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}

//! Schema bootstrap for the owners table
//!
//! Idempotent DDL run once at startup. This is not a migration framework;
//! there is exactly one table and no versioning.

use sqlx::PgPool;

/// Create the owners table if it does not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring owners table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS owners (
            id                BIGSERIAL PRIMARY KEY,
            name              TEXT NOT NULL,
            phone             TEXT NOT NULL,
            email             TEXT NOT NULL,
            registration_date TIMESTAMPTZ NOT NULL,
            address           TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

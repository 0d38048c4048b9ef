//! Owner repository
//!
//! All SQL for the owners table lives here. Insert and update use
//! RETURNING so each operation is a single round trip and the caller
//! gets the persisted row back, id included.

use sqlx::PgPool;

use crate::models::{Owner, OwnerDraft};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Owner repository
pub struct OwnerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> OwnerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all owners, oldest first.
    ///
    /// An empty table yields an empty vec, never an error.
    pub async fn list(&self) -> Result<Vec<Owner>, DbError> {
        let owners: Vec<Owner> = sqlx::query_as(
            r#"
            SELECT id, name, phone, email, registration_date, address
            FROM owners
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(owners)
    }

    /// Insert a new owner, returning the persisted row with its
    /// database-assigned id.
    pub async fn create(&self, draft: &OwnerDraft) -> Result<Owner, DbError> {
        let owner: Owner = sqlx::query_as(
            r#"
            INSERT INTO owners (name, phone, email, registration_date, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, phone, email, registration_date, address
            "#,
        )
        .bind(draft.name())
        .bind(draft.phone())
        .bind(draft.email())
        .bind(draft.registration_date())
        .bind(draft.address())
        .fetch_one(self.pool)
        .await?;

        Ok(owner)
    }

    /// Update all five fields of the owner with the given id.
    ///
    /// Zero rows matched maps to `DbError::NotFound`; a draft never
    /// half-applies since this is a single statement.
    pub async fn update(&self, id: i64, draft: &OwnerDraft) -> Result<Owner, DbError> {
        let owner: Option<Owner> = sqlx::query_as(
            r#"
            UPDATE owners SET
                name = $1,
                phone = $2,
                email = $3,
                registration_date = $4,
                address = $5
            WHERE id = $6
            RETURNING id, name, phone, email, registration_date, address
            "#,
        )
        .bind(draft.name())
        .bind(draft.phone())
        .bind(draft.email())
        .bind(draft.registration_date())
        .bind(draft.address())
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        owner.ok_or_else(|| DbError::NotFound {
            resource: "owner",
            id: id.to_string(),
        })
    }
}

//! Document store — the key → JSON-document persistence contract.
//!
//! The wider application stores everything as (collection, id) → mapping;
//! this module implements that contract over a single Postgres JSONB table
//! and layers typed helpers for the two collections this service owns:
//! "users" (profiles, keyed by the auth subject id) and "plans" (growth
//! plans, keyed by user id).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;

use crate::models::plan::GrowthPlan;
use crate::models::profile::UserProfile;

pub const USERS_COLLECTION: &str = "users";
pub const PLANS_COLLECTION: &str = "plans";

/// Creates the backing table if it does not exist. Called once at startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            collection  TEXT        NOT NULL,
            id          TEXT        NOT NULL,
            data        JSONB       NOT NULL,
            updated_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
            PRIMARY KEY (collection, id)
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to ensure documents schema")?;
    Ok(())
}

/// `get(collection, id) -> mapping | absent`.
pub async fn get_document(
    pool: &PgPool,
    collection: &str,
    id: &str,
) -> Result<Option<Value>, sqlx::Error> {
    let row: Option<(Value,)> =
        sqlx::query_as("SELECT data FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|(data,)| data))
}

/// `set(collection, id, mapping)` — upsert, overwriting any prior document.
/// Returns the write timestamp.
pub async fn set_document(
    pool: &PgPool,
    collection: &str,
    id: &str,
    data: &Value,
) -> Result<DateTime<Utc>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO documents (collection, id, data, updated_at)
        VALUES ($1, $2, $3, now())
        ON CONFLICT (collection, id)
        DO UPDATE SET data = EXCLUDED.data, updated_at = now()
        RETURNING updated_at
        "#,
    )
    .bind(collection)
    .bind(id)
    .bind(data)
    .fetch_one(pool)
    .await
}

pub async fn load_profile(pool: &PgPool, user_id: &str) -> Result<Option<UserProfile>> {
    let document = get_document(pool, USERS_COLLECTION, user_id).await?;
    document
        .map(|data| {
            serde_json::from_value(data)
                .with_context(|| format!("Stored profile for user {user_id} is malformed"))
        })
        .transpose()
}

pub async fn save_profile(
    pool: &PgPool,
    user_id: &str,
    profile: &UserProfile,
) -> Result<DateTime<Utc>> {
    let data = serde_json::to_value(profile).context("Failed to serialize profile")?;
    Ok(set_document(pool, USERS_COLLECTION, user_id, &data).await?)
}

pub async fn load_plan(pool: &PgPool, user_id: &str) -> Result<Option<GrowthPlan>> {
    let document = get_document(pool, PLANS_COLLECTION, user_id).await?;
    document
        .map(|data| {
            serde_json::from_value(data)
                .with_context(|| format!("Stored plan for user {user_id} is malformed"))
        })
        .transpose()
}

pub async fn save_plan(
    pool: &PgPool,
    user_id: &str,
    plan: &GrowthPlan,
) -> Result<DateTime<Utc>> {
    let data = serde_json::to_value(plan).context("Failed to serialize plan")?;
    Ok(set_document(pool, PLANS_COLLECTION, user_id, &data).await?)
}

//! Repository for the `app_settings` table.

use sqlx::PgPool;

use crate::models::app_setting::AppSetting;

const COLUMNS: &str = "key, value, updated_at";

/// Reads and writes JSON settings documents by key.
pub struct AppSettingRepo;

impl AppSettingRepo {
    /// Find a settings document. Returns `None` if the key was never written.
    pub async fn find(pool: &PgPool, key: &str) -> Result<Option<AppSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM app_settings WHERE key = $1");
        sqlx::query_as::<_, AppSetting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a settings document.
    ///
    /// Uses `ON CONFLICT (key) DO UPDATE`, so the last writer wins.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<AppSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO app_settings (key, value) \
             VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE \
             SET value = EXCLUDED.value, updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppSetting>(&query)
            .bind(key)
            .bind(value)
            .fetch_one(pool)
            .await
    }
}

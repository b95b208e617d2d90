//! Generic key/value settings row.

use serde::Serialize;
use sqlx::FromRow;
use matchday_core::types::Timestamp;

/// A row from the `app_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppSetting {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: Timestamp,
}

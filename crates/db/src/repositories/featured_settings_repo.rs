//! Typed access to the featured matches settings document.

use sqlx::PgPool;
use matchday_core::error::CoreError;
use matchday_core::featured::settings::{FeaturedMatchesSettings, FEATURED_SETTINGS_KEY};

use super::AppSettingRepo;

/// Errors from loading or saving the typed settings record.
#[derive(Debug, thiserror::Error)]
pub enum SettingsStoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Decode(#[from] CoreError),
}

/// `load` / `save` over the singleton settings row. Callers never see the
/// key or the JSON encoding.
pub struct FeaturedSettingsRepo;

impl FeaturedSettingsRepo {
    /// Current settings, or the defaults if nothing has been saved yet.
    pub async fn load(pool: &PgPool) -> Result<FeaturedMatchesSettings, SettingsStoreError> {
        match AppSettingRepo::find(pool, FEATURED_SETTINGS_KEY).await? {
            Some(row) => Ok(FeaturedMatchesSettings::from_stored(row.value)?),
            None => Ok(FeaturedMatchesSettings::default()),
        }
    }

    /// Persist the full record and return what was stored.
    pub async fn save(
        pool: &PgPool,
        settings: &FeaturedMatchesSettings,
    ) -> Result<FeaturedMatchesSettings, SettingsStoreError> {
        let value = settings.to_stored()?;
        let row = AppSettingRepo::upsert(pool, FEATURED_SETTINGS_KEY, &value).await?;
        Ok(FeaturedMatchesSettings::from_stored(row.value)?)
    }
}

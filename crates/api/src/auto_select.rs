//! Auto-select entry points.
//!
//! Both entry points run the same resynchronization: load the settings and
//! the selection corpus, compute the featured set, and apply the flag diff in
//! one transaction. They differ only in how `autoSelectEnabled` is treated.
//!
//! - [`run_manual_auto_select`] ignores the flag. An operator asked for it.
//! - [`run_scheduled_auto_select`] returns [`AutoSelectRun::Skipped`] when
//!   the flag is off.

use chrono::Utc;
use matchday_core::featured::selector::{diff_flags, select_featured, MatchCandidate};
use matchday_core::featured::settings::FeaturedMatchesSettings;
use matchday_core::featured::{AutoSelectRun, UpdatedCount};
use matchday_core::types::Timestamp;
use matchday_db::repositories::{FeaturedSettingsRepo, MatchRepo};
use sqlx::PgPool;

use crate::error::AppResult;

/// Run auto-select regardless of `autoSelectEnabled`.
pub async fn run_manual_auto_select(pool: &PgPool) -> AppResult<UpdatedCount> {
    let settings = FeaturedSettingsRepo::load(pool).await?;
    resync(pool, &settings, Utc::now()).await
}

/// Run auto-select only if `autoSelectEnabled` is set.
pub async fn run_scheduled_auto_select(pool: &PgPool) -> AppResult<AutoSelectRun> {
    let settings = FeaturedSettingsRepo::load(pool).await?;
    if !settings.auto_select_enabled {
        tracing::debug!("Scheduled auto-select skipped: autoSelectEnabled is false");
        return Ok(AutoSelectRun::Skipped);
    }
    let updated = resync(pool, &settings, Utc::now()).await?;
    Ok(AutoSelectRun::Applied(updated))
}

async fn resync(
    pool: &PgPool,
    settings: &FeaturedMatchesSettings,
    now: Timestamp,
) -> AppResult<UpdatedCount> {
    let corpus = MatchRepo::list_selection_corpus(pool)
        .await?
        .into_iter()
        .map(MatchCandidate::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let selected = select_featured(settings, &corpus, now);
    let diff = diff_flags(&selected, &corpus);
    let updated = MatchRepo::apply_featured_diff(pool, &diff).await?;

    tracing::info!(
        candidates = corpus.len(),
        selected = selected.len(),
        featured = diff.to_feature.len(),
        unfeatured = diff.to_unfeature.len(),
        updated,
        "Featured matches resynchronized"
    );

    Ok(UpdatedCount { updated })
}

//! Handlers for the featured matches admin surface.
//!
//! Reads of the public featured list need no token; settings and
//! lookups need any signed-in user; every write needs an admin.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use matchday_core::error::CoreError;
use matchday_core::featured::settings::{validate_settings_update, UpdateFeaturedMatchesSettings};
use matchday_core::featured::stats::{compute_stats, FeaturedMatchSummary};
use matchday_core::featured::UpdatedCount;
use matchday_db::repositories::{FeaturedSettingsRepo, FixtureRepo, MatchRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auto_select::run_manual_auto_select;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::LeagueFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /featured-matches/batch-update`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest {
    #[validate(length(max = 1000, message = "matchIds must contain at most 1000 ids"))]
    pub match_ids: Vec<String>,
    pub featured: bool,
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/featured-matches
///
/// Featured matches with sport, league and teams. Live first.
pub async fn list_featured(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let matches = MatchRepo::list_featured_with_relations(&state.pool).await?;
    Ok(Json(DataResponse { data: matches }))
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// GET /api/v1/featured-matches/settings
pub async fn get_settings(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let settings = FeaturedSettingsRepo::load(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/featured-matches/settings
///
/// Partial update. Fields left out of the body keep their stored values.
pub async fn update_settings(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateFeaturedMatchesSettings>,
) -> AppResult<impl IntoResponse> {
    validate_settings_update(&input)?;

    let mut settings = FeaturedSettingsRepo::load(&state.pool).await?;
    settings.apply(input);
    let saved = FeaturedSettingsRepo::save(&state.pool, &settings).await?;

    tracing::info!(
        user_id = admin.user_id,
        featured_leagues = saved.featured_league_ids.len(),
        top_teams = saved.top_team_ids.len(),
        derby_pairs = saved.derby_pairs.len(),
        max_featured = saved.max_featured_matches,
        auto_select_enabled = saved.auto_select_enabled,
        "Featured matches settings updated",
    );

    Ok(Json(DataResponse { data: saved }))
}

// ---------------------------------------------------------------------------
// Stats and selection
// ---------------------------------------------------------------------------

/// GET /api/v1/featured-matches/stats
pub async fn get_stats(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let featured = MatchRepo::list_featured_with_relations(&state.pool).await?;
    let summaries = featured
        .iter()
        .map(FeaturedMatchSummary::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let stats = compute_stats(&summaries, Utc::now());
    Ok(Json(DataResponse { data: stats }))
}

/// POST /api/v1/featured-matches/auto-select
///
/// Resynchronize the featured flags now, whether or not scheduled
/// auto-select is enabled.
pub async fn auto_select(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let result = run_manual_auto_select(&state.pool).await?;

    tracing::info!(
        user_id = admin.user_id,
        updated = result.updated,
        "Manual featured auto-select",
    );

    Ok(Json(DataResponse { data: result }))
}

// ---------------------------------------------------------------------------
// Manual override
// ---------------------------------------------------------------------------

/// POST /api/v1/featured-matches/toggle/{match_id}
///
/// Flip the flag on one match and return it with its relations.
pub async fn toggle(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Match",
            id: match_id.clone(),
        })
    };

    if !MatchRepo::toggle_featured(&state.pool, &match_id).await? {
        return Err(not_found());
    }
    let updated = MatchRepo::find_with_relations(&state.pool, &match_id)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(
        user_id = admin.user_id,
        match_id = %updated.id,
        is_featured = updated.is_featured,
        "Match featured flag toggled",
    );

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/featured-matches/batch-update
///
/// Set the flag on many matches. Unknown ids are skipped and left out of
/// the count.
pub async fn batch_update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<BatchUpdateRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let updated = MatchRepo::set_featured_many(&state.pool, &input.match_ids, input.featured).await?;

    tracing::info!(
        user_id = admin.user_id,
        requested = input.match_ids.len(),
        updated,
        featured = input.featured,
        "Featured flags batch updated",
    );

    Ok(Json(DataResponse {
        data: UpdatedCount { updated },
    }))
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// GET /api/v1/featured-matches/available-leagues
pub async fn available_leagues(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let leagues = FixtureRepo::list_leagues_with_match_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: leagues }))
}

/// GET /api/v1/featured-matches/available-teams?leagueId=
pub async fn available_teams(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<LeagueFilterParams>,
) -> AppResult<impl IntoResponse> {
    let teams = FixtureRepo::list_teams(&state.pool, params.league_id()).await?;
    Ok(Json(DataResponse { data: teams }))
}

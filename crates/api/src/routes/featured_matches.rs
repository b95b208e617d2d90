//! Route definitions for the featured matches admin surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::featured_matches;
use crate::state::AppState;

/// Routes mounted at `/featured-matches`.
///
/// ```text
/// GET  /                     -> list_featured
/// GET  /settings             -> get_settings
/// PUT  /settings             -> update_settings
/// GET  /stats                -> get_stats
/// POST /auto-select          -> auto_select
/// POST /toggle/{match_id}    -> toggle
/// POST /batch-update         -> batch_update
/// GET  /available-leagues    -> available_leagues
/// GET  /available-teams      -> available_teams
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(featured_matches::list_featured))
        .route(
            "/settings",
            get(featured_matches::get_settings).put(featured_matches::update_settings),
        )
        .route("/stats", get(featured_matches::get_stats))
        .route("/auto-select", post(featured_matches::auto_select))
        .route("/toggle/{match_id}", post(featured_matches::toggle))
        .route("/batch-update", post(featured_matches::batch_update))
        .route(
            "/available-leagues",
            get(featured_matches::available_leagues),
        )
        .route("/available-teams", get(featured_matches::available_teams))
}

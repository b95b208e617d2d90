pub mod auth;
pub mod featured_matches;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                                   login (public)
///
/// /featured-matches                             featured list (public)
/// /featured-matches/settings                    get (auth), update (admin)
/// /featured-matches/stats                       stats (auth)
/// /featured-matches/auto-select                 run selection now (admin)
/// /featured-matches/toggle/{match_id}           flip one flag (admin)
/// /featured-matches/batch-update                set many flags (admin)
/// /featured-matches/available-leagues           league picker (auth)
/// /featured-matches/available-teams             team picker (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/featured-matches", featured_matches::router())
}

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use matchday_api::router::build_app_router;
use matchday_api::auth::jwt::{generate_access_token, JwtConfig};
use matchday_api::auth::password::hash_password;
use matchday_api::config::ServerConfig;
use matchday_api::state::AppState;
use matchday_core::roles::{ROLE_ADMIN, ROLE_VIEWER};
use matchday_core::types::Timestamp;
use matchday_db::models::fixture::{CreateLeague, CreateMatch, CreateSport, CreateTeam};
use matchday_db::models::user::{CreateUser, User};
use matchday_db::repositories::{FixtureRepo, MatchRepo, UserRepo};

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        auto_select_interval_mins: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

// ---------------------------------------------------------------------------
// Users and tokens
// ---------------------------------------------------------------------------

pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Mark a user inactive, as an operator would from the database.
pub async fn deactivate_user(pool: &PgPool, user: &User) {
    sqlx::query("UPDATE users SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
        .bind(user.id)
        .execute(pool)
        .await
        .expect("deactivation should succeed");
}

fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Create an admin and return a bearer token for it.
pub async fn admin_token(pool: &PgPool) -> String {
    let user = create_user(pool, "admin", ROLE_ADMIN).await;
    token_for(&user)
}

/// Create a viewer and return a bearer token for it.
pub async fn viewer_token(pool: &PgPool) -> String {
    let user = create_user(pool, "viewer", ROLE_VIEWER).await;
    token_for(&user)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Seed one sport, leagues `L1`/`L2`, and teams `A`..`F` (A-C in L1, D-F in L2).
pub async fn seed_reference_data(pool: &PgPool) {
    FixtureRepo::create_sport(
        pool,
        &CreateSport {
            id: "football".into(),
            name: "Football".into(),
        },
    )
    .await
    .expect("sport insert");

    for (id, name) in [("L1", "Alpha League"), ("L2", "Beta League")] {
        FixtureRepo::create_league(
            pool,
            &CreateLeague {
                id: id.into(),
                sport_id: "football".into(),
                name: name.into(),
                country: Some("England".into()),
            },
        )
        .await
        .expect("league insert");
    }

    for (id, league) in [
        ("A", "L1"),
        ("B", "L1"),
        ("C", "L1"),
        ("D", "L2"),
        ("E", "L2"),
        ("F", "L2"),
    ] {
        FixtureRepo::create_team(
            pool,
            &CreateTeam {
                id: id.into(),
                league_id: Some(league.into()),
                name: format!("Team {id}"),
                short_name: None,
                logo_url: None,
            },
        )
        .await
        .expect("team insert");
    }
}

/// Insert a match. `status` is one of the stored status strings.
pub async fn seed_match(
    pool: &PgPool,
    id: &str,
    league_id: &str,
    home: &str,
    away: &str,
    status: &str,
    start_time: Timestamp,
) {
    MatchRepo::create(
        pool,
        &CreateMatch {
            id: id.into(),
            sport_id: "football".into(),
            league_id: league_id.into(),
            home_team_id: home.into(),
            away_team_id: away.into(),
            status: status.into(),
            start_time,
            is_live: status == "live",
            is_featured: false,
        },
    )
    .await
    .expect("match insert");
}

/// Ids of all currently featured matches, sorted.
pub async fn featured_ids(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar("SELECT id FROM matches WHERE is_featured ORDER BY id")
        .fetch_all(pool)
        .await
        .expect("featured ids query")
}

pub fn hours_from_now(hours: i64) -> Timestamp {
    Utc::now() + Duration::hours(hours)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, json_request("GET", uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, json_request("GET", uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request("POST", uri, None, Some(body))).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, json_request("POST", uri, Some(token), None)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request("POST", uri, Some(token), Some(body))).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request("PUT", uri, Some(token), Some(body))).await
}

/// Assert the status and return the `data` field of the envelope.
pub async fn expect_data(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await["data"].clone()
}

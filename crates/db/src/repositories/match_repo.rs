//! Repository for the `matches` table.
//!
//! Only `is_featured` (and `updated_at`) is ever written here outside of
//! [`MatchRepo::create`], which exists for seeding.

use sqlx::PgPool;
use matchday_core::featured::selector::FlagDiff;

use crate::models::fixture::{CreateMatch, MatchCandidateRow, MatchRelationRow, MatchWithRelations};

/// Columns read by the selector.
const CANDIDATE_COLUMNS: &str = "id, league_id, home_team_id, away_team_id, status, \
     start_time, is_live, is_featured";

/// Join of a match with sport, league and both teams. Aliased to match
/// [`MatchRelationRow`].
const RELATION_SELECT: &str = "SELECT m.id, m.status, m.start_time, m.is_live, m.is_featured, \
        m.home_score, m.away_score, \
        s.id AS sport_id, s.name AS sport_name, \
        l.id AS league_id, l.name AS league_name, l.country AS league_country, \
        home_t.id AS home_team_id, home_t.name AS home_team_name, home_t.logo_url AS home_team_logo_url, \
        away_t.id AS away_team_id, away_t.name AS away_team_name, away_t.logo_url AS away_team_logo_url \
     FROM matches m \
     JOIN sports s ON s.id = m.sport_id \
     JOIN leagues l ON l.id = m.league_id \
     JOIN teams home_t ON home_t.id = m.home_team_id \
     JOIN teams away_t ON away_t.id = m.away_team_id";

/// Live first, then start time, then id.
const DISPLAY_ORDER: &str = "ORDER BY (m.status = 'live' OR (m.is_live AND m.status = 'scheduled')) DESC, \
     m.start_time ASC, m.id ASC";

pub struct MatchRepo;

impl MatchRepo {
    /// Insert a match row, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateMatch) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "INSERT INTO matches \
                (id, sport_id, league_id, home_team_id, away_team_id, status, start_time, \
                 is_live, is_featured) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING id",
        )
        .bind(&input.id)
        .bind(&input.sport_id)
        .bind(&input.league_id)
        .bind(&input.home_team_id)
        .bind(&input.away_team_id)
        .bind(&input.status)
        .bind(input.start_time)
        .bind(input.is_live)
        .bind(input.is_featured)
        .fetch_one(pool)
        .await
    }

    /// Every match the selector must see: anything live or scheduled, plus
    /// anything currently featured so stale flags can be cleared.
    pub async fn list_selection_corpus(
        pool: &PgPool,
    ) -> Result<Vec<MatchCandidateRow>, sqlx::Error> {
        let query = format!(
            "SELECT {CANDIDATE_COLUMNS} FROM matches \
             WHERE status IN ('live', 'scheduled') OR is_live OR is_featured"
        );
        sqlx::query_as::<_, MatchCandidateRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply a flag diff in one transaction. Returns the number of rows whose
    /// flag changed.
    ///
    /// The `is_featured` guards make each statement a no-op for rows already
    /// in the target state, so a concurrent toggle is never double counted.
    pub async fn apply_featured_diff(pool: &PgPool, diff: &FlagDiff) -> Result<u64, sqlx::Error> {
        if diff.is_empty() {
            return Ok(0);
        }

        let mut tx = pool.begin().await?;

        let featured = sqlx::query(
            "UPDATE matches SET is_featured = TRUE, updated_at = NOW() \
             WHERE id = ANY($1) AND NOT is_featured",
        )
        .bind(&diff.to_feature)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let unfeatured = sqlx::query(
            "UPDATE matches SET is_featured = FALSE, updated_at = NOW() \
             WHERE id = ANY($1) AND is_featured",
        )
        .bind(&diff.to_unfeature)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        tracing::debug!(featured, unfeatured, "Applied featured flag diff");
        Ok(featured + unfeatured)
    }

    /// Flip `is_featured` on one match. Returns `false` if the id does not exist.
    pub async fn toggle_featured(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE matches SET is_featured = NOT is_featured, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set `is_featured` on every existing id in `ids`. Unknown ids are
    /// skipped. Returns the number of matched rows.
    pub async fn set_featured_many(
        pool: &PgPool,
        ids: &[String],
        featured: bool,
    ) -> Result<u64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            "UPDATE matches SET is_featured = $2, updated_at = NOW() WHERE id = ANY($1)",
        )
        .bind(ids)
        .bind(featured)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Find a match with its relations.
    pub async fn find_with_relations(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<MatchWithRelations>, sqlx::Error> {
        let query = format!("{RELATION_SELECT} WHERE m.id = $1");
        let row = sqlx::query_as::<_, MatchRelationRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(MatchWithRelations::from))
    }

    /// All featured matches with relations, live first then by start time.
    pub async fn list_featured_with_relations(
        pool: &PgPool,
    ) -> Result<Vec<MatchWithRelations>, sqlx::Error> {
        let query = format!("{RELATION_SELECT} WHERE m.is_featured {DISPLAY_ORDER}");
        let rows = sqlx::query_as::<_, MatchRelationRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(MatchWithRelations::from).collect())
    }
}

//! Read access to sports, leagues and teams for the admin pickers.
//!
//! Inserts exist for seeding only; the fixture sync owns these tables.

use sqlx::PgPool;

use crate::models::fixture::{CreateLeague, CreateSport, CreateTeam, LeagueWithCount, Team};

const TEAM_COLUMNS: &str = "id, league_id, name, short_name, logo_url";

pub struct FixtureRepo;

impl FixtureRepo {
    pub async fn create_sport(pool: &PgPool, input: &CreateSport) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO sports (id, name) VALUES ($1, $2)")
            .bind(&input.id)
            .bind(&input.name)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn create_league(pool: &PgPool, input: &CreateLeague) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO leagues (id, sport_id, name, country) VALUES ($1, $2, $3, $4)")
            .bind(&input.id)
            .bind(&input.sport_id)
            .bind(&input.name)
            .bind(&input.country)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn create_team(pool: &PgPool, input: &CreateTeam) -> Result<Team, sqlx::Error> {
        let query = format!(
            "INSERT INTO teams (id, league_id, name, short_name, logo_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {TEAM_COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(&input.id)
            .bind(&input.league_id)
            .bind(&input.name)
            .bind(&input.short_name)
            .bind(&input.logo_url)
            .fetch_one(pool)
            .await
    }

    /// Every league with its sport and total number of matches, by name.
    pub async fn list_leagues_with_match_counts(
        pool: &PgPool,
    ) -> Result<Vec<LeagueWithCount>, sqlx::Error> {
        sqlx::query_as::<_, LeagueWithCount>(
            "SELECT l.id, l.name, l.country, l.sport_id, s.name AS sport_name, \
                    COUNT(m.id) AS match_count \
             FROM leagues l \
             JOIN sports s ON s.id = l.sport_id \
             LEFT JOIN matches m ON m.league_id = l.id \
             GROUP BY l.id, l.name, l.country, l.sport_id, s.name \
             ORDER BY l.name ASC, l.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Teams ordered by name, optionally restricted to one league.
    pub async fn list_teams(
        pool: &PgPool,
        league_id: Option<&str>,
    ) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!(
            "SELECT {TEAM_COLUMNS} FROM teams \
             WHERE ($1::TEXT IS NULL OR league_id = $1) \
             ORDER BY name ASC, id ASC"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(league_id)
            .fetch_all(pool)
            .await
    }
}

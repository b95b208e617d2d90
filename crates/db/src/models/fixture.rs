//! Sports, leagues, teams and matches.
//!
//! These rows belong to the fixture sync. This service reads them and owns
//! only the `matches.is_featured` column. Create DTOs exist so tests and
//! local tooling can seed data.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use matchday_core::error::CoreError;
use matchday_core::featured::selector::MatchCandidate;
use matchday_core::featured::stats::FeaturedMatchSummary;
use matchday_core::match_status::MatchStatus;
use matchday_core::types::{ExternalId, Timestamp};

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

/// League with its sport name and total match count, for the league picker.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueWithCount {
    pub id: ExternalId,
    pub name: String,
    pub country: Option<String>,
    pub sport_id: ExternalId,
    pub sport_name: String,
    pub match_count: i64,
}

/// A row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: ExternalId,
    pub league_id: Option<ExternalId>,
    pub name: String,
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSport {
    pub id: ExternalId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLeague {
    pub id: ExternalId,
    pub sport_id: ExternalId,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub id: ExternalId,
    pub league_id: Option<ExternalId>,
    pub name: String,
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Matches
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMatch {
    pub id: ExternalId,
    pub sport_id: ExternalId,
    pub league_id: ExternalId,
    pub home_team_id: ExternalId,
    pub away_team_id: ExternalId,
    pub status: String,
    pub start_time: Timestamp,
    pub is_live: bool,
    pub is_featured: bool,
}

/// Columns of `matches` the selector reads.
#[derive(Debug, Clone, FromRow)]
pub struct MatchCandidateRow {
    pub id: ExternalId,
    pub league_id: ExternalId,
    pub home_team_id: ExternalId,
    pub away_team_id: ExternalId,
    pub status: String,
    pub start_time: Timestamp,
    pub is_live: bool,
    pub is_featured: bool,
}

impl TryFrom<MatchCandidateRow> for MatchCandidate {
    type Error = CoreError;

    fn try_from(row: MatchCandidateRow) -> Result<Self, Self::Error> {
        Ok(MatchCandidate {
            status: MatchStatus::from_str_value(&row.status)?,
            id: row.id,
            league_id: row.league_id,
            home_team_id: row.home_team_id,
            away_team_id: row.away_team_id,
            start_time: row.start_time,
            is_live: row.is_live,
            is_featured: row.is_featured,
        })
    }
}

/// Flat join of a match with its sport, league and both teams.
#[derive(Debug, Clone, FromRow)]
pub struct MatchRelationRow {
    pub id: ExternalId,
    pub status: String,
    pub start_time: Timestamp,
    pub is_live: bool,
    pub is_featured: bool,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub sport_id: ExternalId,
    pub sport_name: String,
    pub league_id: ExternalId,
    pub league_name: String,
    pub league_country: Option<String>,
    pub home_team_id: ExternalId,
    pub home_team_name: String,
    pub home_team_logo_url: Option<String>,
    pub away_team_id: ExternalId,
    pub away_team_name: String,
    pub away_team_logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SportRef {
    pub id: ExternalId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueRef {
    pub id: ExternalId,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub id: ExternalId,
    pub name: String,
    pub logo_url: Option<String>,
}

/// A match with its relations nested, as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWithRelations {
    pub id: ExternalId,
    pub status: String,
    pub start_time: Timestamp,
    pub is_live: bool,
    pub is_featured: bool,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub sport: SportRef,
    pub league: LeagueRef,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
}

impl From<MatchRelationRow> for MatchWithRelations {
    fn from(row: MatchRelationRow) -> Self {
        Self {
            id: row.id,
            status: row.status,
            start_time: row.start_time,
            is_live: row.is_live,
            is_featured: row.is_featured,
            home_score: row.home_score,
            away_score: row.away_score,
            sport: SportRef {
                id: row.sport_id,
                name: row.sport_name,
            },
            league: LeagueRef {
                id: row.league_id,
                name: row.league_name,
                country: row.league_country,
            },
            home_team: TeamRef {
                id: row.home_team_id,
                name: row.home_team_name,
                logo_url: row.home_team_logo_url,
            },
            away_team: TeamRef {
                id: row.away_team_id,
                name: row.away_team_name,
                logo_url: row.away_team_logo_url,
            },
        }
    }
}

impl TryFrom<&MatchWithRelations> for FeaturedMatchSummary {
    type Error = CoreError;

    fn try_from(m: &MatchWithRelations) -> Result<Self, Self::Error> {
        Ok(FeaturedMatchSummary {
            id: m.id.clone(),
            league_id: m.league.id.clone(),
            league_name: m.league.name.clone(),
            status: MatchStatus::from_str_value(&m.status)?,
            start_time: m.start_time,
            is_live: m.is_live,
        })
    }
}

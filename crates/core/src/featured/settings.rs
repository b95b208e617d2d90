//! The featured matches settings record.
//!
//! Stored as a single JSON document under [`FEATURED_SETTINGS_KEY`]. Every
//! field has a default, and missing keys in a stored document fall back to
//! those defaults, so a read always yields a complete record.

use std::collections::HashSet;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::ExternalId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Key of the settings row in `app_settings`.
pub const FEATURED_SETTINGS_KEY: &str = "featured_matches_settings";

pub const DEFAULT_TOP_TEAM_RANK_THRESHOLD: i32 = 10;
pub const DEFAULT_MAX_FEATURED_MATCHES: i32 = 10;
pub const DEFAULT_UPCOMING_HOURS: i32 = 24;

/// Upper bound on the featured cap.
pub const MAX_FEATURED_MATCHES_LIMIT: i32 = 500;

/// Upper bound on the upcoming window (30 days).
pub const MAX_UPCOMING_HOURS: i32 = 720;

/// Maximum length of an identifier inside the settings lists.
pub const MAX_ID_LENGTH: usize = 128;

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// A rivalry fixture. The pair is unordered: it matches whichever side is
/// at home.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerbyPair {
    pub home_team_id: ExternalId,
    pub away_team_id: ExternalId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DerbyPair {
    /// True when `{home, away}` is the same two teams as this pair, in
    /// either orientation.
    pub fn matches(&self, home: &str, away: &str) -> bool {
        unordered_pair_eq(
            (self.home_team_id.as_str(), self.away_team_id.as_str()),
            (home, away),
        )
    }

    /// The pair with surrounding whitespace stripped from both team ids.
    fn trimmed(self) -> Self {
        Self {
            home_team_id: self.home_team_id.trim().to_string(),
            away_team_id: self.away_team_id.trim().to_string(),
            name: self.name,
        }
    }
}

/// Compare two pairs as sets of two elements.
pub fn unordered_pair_eq(a: (&str, &str), b: (&str, &str)) -> bool {
    (a.0 == b.0 && a.1 == b.1) || (a.0 == b.1 && a.1 == b.0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedMatchesSettings {
    /// Leagues whose matches are always eligible.
    pub featured_league_ids: Vec<ExternalId>,
    /// Advisory only; stored for the admin UI.
    pub top_team_rank_threshold: i32,
    /// Teams whose matches are eligible in any league.
    pub top_team_ids: Vec<ExternalId>,
    pub derby_pairs: Vec<DerbyPair>,
    /// Cap on the featured set after selection.
    pub max_featured_matches: i32,
    /// Gates scheduled runs only. Manual runs ignore it.
    pub auto_select_enabled: bool,
    pub include_upcoming: bool,
    pub include_live: bool,
    /// Scheduled matches starting later than this many hours from now are
    /// not eligible.
    pub upcoming_hours: i32,
}

impl Default for FeaturedMatchesSettings {
    fn default() -> Self {
        Self {
            featured_league_ids: Vec::new(),
            top_team_rank_threshold: DEFAULT_TOP_TEAM_RANK_THRESHOLD,
            top_team_ids: Vec::new(),
            derby_pairs: Vec::new(),
            max_featured_matches: DEFAULT_MAX_FEATURED_MATCHES,
            auto_select_enabled: false,
            include_upcoming: true,
            include_live: true,
            upcoming_hours: DEFAULT_UPCOMING_HOURS,
        }
    }
}

impl FeaturedMatchesSettings {
    /// Decode the stored JSON document, filling in defaults for absent keys.
    pub fn from_stored(value: serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|e| {
            CoreError::Internal(format!("Stored featured matches settings are corrupt: {e}"))
        })
    }

    /// Encode for storage.
    pub fn to_stored(&self) -> Result<serde_json::Value, CoreError> {
        serde_json::to_value(self)
            .map_err(|e| CoreError::Internal(format!("Failed to encode settings: {e}")))
    }

    /// Merge a validated patch onto this record. Absent fields keep their
    /// current values; identifier lists are de-duplicated in order.
    pub fn apply(&mut self, patch: UpdateFeaturedMatchesSettings) {
        if let Some(ids) = patch.featured_league_ids {
            self.featured_league_ids = dedup_ids(ids);
        }
        if let Some(v) = patch.top_team_rank_threshold {
            self.top_team_rank_threshold = v;
        }
        if let Some(ids) = patch.top_team_ids {
            self.top_team_ids = dedup_ids(ids);
        }
        if let Some(pairs) = patch.derby_pairs {
            self.derby_pairs = pairs.into_iter().map(DerbyPair::trimmed).collect();
        }
        if let Some(v) = patch.max_featured_matches {
            self.max_featured_matches = v;
        }
        if let Some(v) = patch.auto_select_enabled {
            self.auto_select_enabled = v;
        }
        if let Some(v) = patch.include_upcoming {
            self.include_upcoming = v;
        }
        if let Some(v) = patch.include_live {
            self.include_live = v;
        }
        if let Some(v) = patch.upcoming_hours {
            self.upcoming_hours = v;
        }
    }

    /// Length of the upcoming window.
    pub fn upcoming_window(&self) -> Duration {
        Duration::hours(i64::from(self.upcoming_hours.max(0)))
    }

    /// Cap as a `usize`; non-positive stored values select nothing.
    pub fn cap(&self) -> usize {
        usize::try_from(self.max_featured_matches).unwrap_or(0)
    }
}

fn dedup_ids(ids: Vec<ExternalId>) -> Vec<ExternalId> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Partial update for [`FeaturedMatchesSettings`]. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeaturedMatchesSettings {
    pub featured_league_ids: Option<Vec<ExternalId>>,
    #[validate(range(min = 1, message = "topTeamRankThreshold must be a positive integer"))]
    pub top_team_rank_threshold: Option<i32>,
    pub top_team_ids: Option<Vec<ExternalId>>,
    pub derby_pairs: Option<Vec<DerbyPair>>,
    #[validate(range(
        min = 1,
        max = 500,
        message = "maxFeaturedMatches must be a positive integer no greater than 500"
    ))]
    pub max_featured_matches: Option<i32>,
    pub auto_select_enabled: Option<bool>,
    pub include_upcoming: Option<bool>,
    pub include_live: Option<bool>,
    #[validate(range(
        min = 1,
        max = 720,
        message = "upcomingHours must be between 1 and 720"
    ))]
    pub upcoming_hours: Option<i32>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a settings patch before it is merged and persisted.
///
/// Range checks come from the derive; identifier lists and derby pairs are
/// checked here. All problems are reported together, sorted by field.
pub fn validate_settings_update(input: &UpdateFeaturedMatchesSettings) -> Result<(), CoreError> {
    let mut problems: Vec<String> = Vec::new();

    if let Err(errors) = input.validate() {
        for (field, errs) in errors.field_errors() {
            for err in errs {
                match &err.message {
                    Some(msg) => problems.push(msg.to_string()),
                    None => problems.push(format!("{field} is invalid")),
                }
            }
        }
    }

    if let Some(ids) = &input.featured_league_ids {
        check_ids(ids, "featuredLeagueIds", &mut problems);
    }
    if let Some(ids) = &input.top_team_ids {
        check_ids(ids, "topTeamIds", &mut problems);
    }
    if let Some(pairs) = &input.derby_pairs {
        for (i, pair) in pairs.iter().enumerate() {
            let home = pair.home_team_id.trim();
            let away = pair.away_team_id.trim();
            if home.is_empty() || away.is_empty() {
                problems.push(format!("derbyPairs[{i}] must name both teams"));
            } else if home.len() > MAX_ID_LENGTH || away.len() > MAX_ID_LENGTH {
                problems.push(format!(
                    "derbyPairs[{i}] team ids must not exceed {MAX_ID_LENGTH} characters"
                ));
            } else if home == away {
                problems.push(format!("derbyPairs[{i}] must name two different teams"));
            }
        }
    }

    if problems.is_empty() {
        return Ok(());
    }
    problems.sort();
    Err(CoreError::Validation(problems.join("; ")))
}

fn check_ids(ids: &[ExternalId], field: &str, problems: &mut Vec<String>) {
    for (i, id) in ids.iter().enumerate() {
        let id = id.trim();
        if id.is_empty() {
            problems.push(format!("{field}[{i}] must not be empty"));
        } else if id.len() > MAX_ID_LENGTH {
            problems.push(format!(
                "{field}[{i}] exceeds {MAX_ID_LENGTH} characters"
            ));
        }
    }
}

//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional league scope (`?leagueId=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueFilterParams {
    pub league_id: Option<String>,
}

impl LeagueFilterParams {
    /// The league id, treating an empty value as absent.
    pub fn league_id(&self) -> Option<&str> {
        self.league_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

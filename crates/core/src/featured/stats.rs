//! Summary counts over the currently featured matches.

use std::collections::HashMap;

use serde::Serialize;

use crate::match_status::{self, MatchStatus};
use crate::types::{ExternalId, Timestamp};

/// A featured match as needed for aggregation.
#[derive(Debug, Clone)]
pub struct FeaturedMatchSummary {
    pub id: ExternalId,
    pub league_id: ExternalId,
    pub league_name: String,
    pub status: MatchStatus,
    pub start_time: Timestamp,
    pub is_live: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueCount {
    pub league_id: ExternalId,
    pub league_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: MatchStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedMatchesStats {
    pub total_featured: usize,
    /// Sorted by count descending, then league name.
    pub by_league: Vec<LeagueCount>,
    /// Sorted by count descending, then status name.
    pub by_status: Vec<StatusCount>,
    pub live_count: usize,
    pub upcoming_count: usize,
}

/// Aggregate the featured set. The caller passes only featured rows.
pub fn compute_stats(featured: &[FeaturedMatchSummary], now: Timestamp) -> FeaturedMatchesStats {
    let mut leagues: HashMap<&str, (&str, usize)> = HashMap::new();
    let mut statuses: HashMap<MatchStatus, usize> = HashMap::new();
    let mut live_count = 0;
    let mut upcoming_count = 0;

    for m in featured {
        leagues
            .entry(m.league_id.as_str())
            .or_insert((m.league_name.as_str(), 0))
            .1 += 1;
        *statuses.entry(m.status).or_insert(0) += 1;

        if match_status::is_live(m.status, m.is_live) {
            live_count += 1;
        } else if m.status == MatchStatus::Scheduled && m.start_time > now {
            upcoming_count += 1;
        }
    }

    let mut by_league: Vec<LeagueCount> = leagues
        .into_iter()
        .map(|(id, (name, count))| LeagueCount {
            league_id: id.to_string(),
            league_name: name.to_string(),
            count,
        })
        .collect();
    by_league.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.league_name.cmp(&b.league_name))
            .then_with(|| a.league_id.cmp(&b.league_id))
    });

    let mut by_status: Vec<StatusCount> = statuses
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect();
    by_status.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.status.as_str().cmp(b.status.as_str()))
    });

    FeaturedMatchesStats {
        total_featured: featured.len(),
        by_league,
        by_status,
        live_count,
        upcoming_count,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn summary(id: &str, league: &str, status: MatchStatus, starts_in: Duration) -> FeaturedMatchSummary {
        FeaturedMatchSummary {
            id: id.to_string(),
            league_id: league.to_string(),
            league_name: format!("League {league}"),
            status,
            start_time: Utc::now() + starts_in,
            is_live: status == MatchStatus::Live,
        }
    }

    #[test]
    fn empty_set_has_zero_counts() {
        let stats = compute_stats(&[], Utc::now());
        assert_eq!(stats.total_featured, 0);
        assert!(stats.by_league.is_empty());
        assert!(stats.by_status.is_empty());
        assert_eq!(stats.live_count, 0);
        assert_eq!(stats.upcoming_count, 0);
    }

    #[test]
    fn groups_and_sorts_by_count() {
        let featured = vec![
            summary("m1", "A", MatchStatus::Scheduled, Duration::hours(2)),
            summary("m2", "B", MatchStatus::Scheduled, Duration::hours(3)),
            summary("m3", "B", MatchStatus::Live, Duration::hours(-1)),
            summary("m4", "B", MatchStatus::Finished, Duration::hours(-5)),
        ];

        let stats = compute_stats(&featured, Utc::now());

        assert_eq!(stats.total_featured, 4);
        assert_eq!(stats.by_league[0].league_id, "B");
        assert_eq!(stats.by_league[0].count, 3);
        assert_eq!(stats.by_league[0].league_name, "League B");
        assert_eq!(stats.by_league[1].count, 1);
        assert_eq!(stats.by_status[0].status, MatchStatus::Scheduled);
        assert_eq!(stats.by_status[0].count, 2);
        assert_eq!(stats.live_count, 1);
        assert_eq!(stats.upcoming_count, 2);
    }

    #[test]
    fn scheduled_in_the_past_is_not_upcoming() {
        let featured = vec![summary("m1", "A", MatchStatus::Scheduled, Duration::minutes(-10))];
        let stats = compute_stats(&featured, Utc::now());
        assert_eq!(stats.upcoming_count, 0);
    }

    #[test]
    fn serializes_camel_case() {
        let stats = compute_stats(
            &[summary("m1", "A", MatchStatus::Live, Duration::zero())],
            Utc::now(),
        );
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalFeatured"], 1);
        assert_eq!(json["byStatus"][0]["status"], "live");
        assert_eq!(json["byLeague"][0]["leagueName"], "League A");
    }
}

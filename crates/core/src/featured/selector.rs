//! Auto-selection of featured matches.
//!
//! [`select_featured`] is a pure function of the settings, the candidate
//! matches and the current time. [`diff_flags`] turns its result into the set
//! of flag changes needed so the stored flags equal the selection exactly.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::featured::settings::FeaturedMatchesSettings;
use crate::match_status::{self, MatchStatus};
use crate::types::{ExternalId, Timestamp};

/// The subset of a match row the selector needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub id: ExternalId,
    pub league_id: ExternalId,
    pub home_team_id: ExternalId,
    pub away_team_id: ExternalId,
    pub status: MatchStatus,
    pub start_time: Timestamp,
    pub is_live: bool,
    pub is_featured: bool,
}

impl MatchCandidate {
    pub fn is_live_now(&self) -> bool {
        match_status::is_live(self.status, self.is_live)
    }
}

/// Which selection category a candidate falls in. Live sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Live,
    Upcoming,
}

/// Category of a match under the current settings, or `None` if its status
/// or start time keeps it out of the candidate set.
pub fn categorize(
    settings: &FeaturedMatchesSettings,
    m: &MatchCandidate,
    now: Timestamp,
) -> Option<Category> {
    if m.is_live_now() {
        return settings.include_live.then_some(Category::Live);
    }
    if m.status == MatchStatus::Scheduled && settings.include_upcoming {
        let horizon = now + settings.upcoming_window();
        if m.start_time >= now && m.start_time <= horizon {
            return Some(Category::Upcoming);
        }
    }
    None
}

/// Lookup sets built once per selection run.
struct Criteria<'a> {
    leagues: HashSet<&'a str>,
    top_teams: HashSet<&'a str>,
    settings: &'a FeaturedMatchesSettings,
}

impl<'a> Criteria<'a> {
    fn new(settings: &'a FeaturedMatchesSettings) -> Self {
        Self {
            leagues: settings.featured_league_ids.iter().map(String::as_str).collect(),
            top_teams: settings.top_team_ids.iter().map(String::as_str).collect(),
            settings,
        }
    }

    fn qualifies(&self, m: &MatchCandidate) -> bool {
        self.leagues.contains(m.league_id.as_str())
            || self.top_teams.contains(m.home_team_id.as_str())
            || self.top_teams.contains(m.away_team_id.as_str())
            || self
                .settings
                .derby_pairs
                .iter()
                .any(|pair| pair.matches(&m.home_team_id, &m.away_team_id))
    }
}

/// Whether a match is featured-worthy by league, top team, or derby,
/// ignoring status and time.
pub fn qualifies(settings: &FeaturedMatchesSettings, m: &MatchCandidate) -> bool {
    Criteria::new(settings).qualifies(m)
}

/// Compute the featured set, ranked and capped.
///
/// Live matches are featured-worthy on their own; upcoming matches must
/// qualify by league, top team, or derby. Order: live before upcoming, then
/// earliest start time, then match id.
pub fn select_featured(
    settings: &FeaturedMatchesSettings,
    matches: &[MatchCandidate],
    now: Timestamp,
) -> Vec<ExternalId> {
    let criteria = Criteria::new(settings);

    let mut ranked: Vec<(Category, &MatchCandidate)> = matches
        .iter()
        .filter_map(|m| categorize(settings, m, now).map(|c| (c, m)))
        .filter(|(c, m)| *c == Category::Live || criteria.qualifies(m))
        .collect();

    ranked.sort_by(|(ca, a), (cb, b)| rank(*ca, a, *cb, b));

    ranked
        .into_iter()
        .take(settings.cap())
        .map(|(_, m)| m.id.clone())
        .collect()
}

fn rank(ca: Category, a: &MatchCandidate, cb: Category, b: &MatchCandidate) -> Ordering {
    ca.cmp(&cb)
        .then_with(|| a.start_time.cmp(&b.start_time))
        .then_with(|| a.id.cmp(&b.id))
}

/// Flag changes needed to make the stored featured set equal a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagDiff {
    pub to_feature: Vec<ExternalId>,
    pub to_unfeature: Vec<ExternalId>,
}

impl FlagDiff {
    pub fn changed(&self) -> usize {
        self.to_feature.len() + self.to_unfeature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changed() == 0
    }
}

/// Set difference between `selected` and the matches currently flagged.
///
/// `matches` must include every currently featured row, otherwise stale flags
/// outside it are not cleared.
pub fn diff_flags(selected: &[ExternalId], matches: &[MatchCandidate]) -> FlagDiff {
    let selected_set: HashSet<&str> = selected.iter().map(String::as_str).collect();
    let featured_now: HashSet<&str> = matches
        .iter()
        .filter(|m| m.is_featured)
        .map(|m| m.id.as_str())
        .collect();

    let to_feature = selected
        .iter()
        .filter(|id| !featured_now.contains(id.as_str()))
        .cloned()
        .collect();

    let mut to_unfeature: Vec<ExternalId> = matches
        .iter()
        .filter(|m| m.is_featured && !selected_set.contains(m.id.as_str()))
        .map(|m| m.id.clone())
        .collect();
    to_unfeature.sort();
    to_unfeature.dedup();

    FlagDiff {
        to_feature,
        to_unfeature,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::featured::settings::{
        validate_settings_update, DerbyPair, UpdateFeaturedMatchesSettings,
    };

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()
    }

    fn scheduled(id: &str, league: &str, home: &str, away: &str, starts_in: Duration) -> MatchCandidate {
        MatchCandidate {
            id: id.to_string(),
            league_id: league.to_string(),
            home_team_id: home.to_string(),
            away_team_id: away.to_string(),
            status: MatchStatus::Scheduled,
            start_time: now() + starts_in,
            is_live: false,
            is_featured: false,
        }
    }

    fn live(id: &str, league: &str) -> MatchCandidate {
        MatchCandidate {
            status: MatchStatus::Live,
            is_live: true,
            ..scheduled(id, league, "h", "a", Duration::minutes(-30))
        }
    }

    fn leagues(ids: &[&str]) -> FeaturedMatchesSettings {
        FeaturedMatchesSettings {
            featured_league_ids: ids.iter().map(|s| s.to_string()).collect(),
            max_featured_matches: 10,
            upcoming_hours: 24,
            ..Default::default()
        }
    }

    /// Apply a selection to the in-memory corpus, as the store would.
    fn apply(matches: &mut [MatchCandidate], selected: &[ExternalId]) -> usize {
        let diff = diff_flags(selected, matches);
        for m in matches.iter_mut() {
            if diff.to_feature.contains(&m.id) {
                m.is_featured = true;
            }
            if diff.to_unfeature.contains(&m.id) {
                m.is_featured = false;
            }
        }
        diff.changed()
    }

    #[test]
    fn scenario_live_first_then_earliest_upcoming() {
        let settings = FeaturedMatchesSettings {
            max_featured_matches: 2,
            ..leagues(&["L1"])
        };
        let matches = vec![
            scheduled("m1", "L1", "a", "b", Duration::hours(5)),
            scheduled("m2", "L1", "c", "d", Duration::hours(2)),
            scheduled("m3", "L1", "e", "f", Duration::hours(8)),
            live("m4", "L2"),
        ];

        let selected = select_featured(&settings, &matches, now());
        assert_eq!(selected, vec!["m4".to_string(), "m2".to_string()]);
    }

    #[test]
    fn resync_is_idempotent() {
        let settings = leagues(&["L1"]);
        let mut matches = vec![
            scheduled("m1", "L1", "a", "b", Duration::hours(1)),
            scheduled("m2", "L9", "c", "d", Duration::hours(1)),
        ];
        matches[1].is_featured = true;

        let first = select_featured(&settings, &matches, now());
        assert_eq!(apply(&mut matches, &first), 2);

        let second = select_featured(&settings, &matches, now());
        assert_eq!(second, first);
        assert_eq!(apply(&mut matches, &second), 0);
    }

    #[test]
    fn cap_limits_selection() {
        let matches: Vec<_> = (0..7)
            .map(|i| scheduled(&format!("m{i}"), "L1", "a", "b", Duration::hours(i + 1)))
            .collect();

        for cap in [1, 3, 7, 20] {
            let settings = FeaturedMatchesSettings {
                max_featured_matches: cap,
                ..leagues(&["L1"])
            };
            let selected = select_featured(&settings, &matches, now());
            assert_eq!(selected.len(), (cap as usize).min(7));
        }
    }

    #[test]
    fn derby_matches_either_orientation() {
        let settings = FeaturedMatchesSettings {
            derby_pairs: vec![DerbyPair {
                home_team_id: "A".into(),
                away_team_id: "B".into(),
                name: Some("Classic".into()),
            }],
            ..leagues(&[])
        };
        let matches = vec![
            scheduled("m1", "X", "A", "B", Duration::hours(1)),
            scheduled("m2", "X", "B", "A", Duration::hours(2)),
            scheduled("m3", "X", "A", "C", Duration::hours(3)),
        ];

        let selected = select_featured(&settings, &matches, now());
        assert_eq!(selected, vec!["m1".to_string(), "m2".to_string()]);
    }

    #[test]
    fn derby_saved_with_padded_ids_still_selects() {
        let patch = UpdateFeaturedMatchesSettings {
            derby_pairs: Some(vec![DerbyPair {
                home_team_id: " A ".into(),
                away_team_id: "B".into(),
                name: None,
            }]),
            ..Default::default()
        };
        validate_settings_update(&patch).unwrap();
        let mut settings = leagues(&[]);
        settings.apply(patch);

        let matches = vec![scheduled("m1", "X", "A", "B", Duration::hours(1))];

        assert_eq!(select_featured(&settings, &matches, now()), vec!["m1".to_string()]);
    }

    #[test]
    fn include_live_false_excludes_live_matches() {
        let settings = FeaturedMatchesSettings {
            include_live: false,
            ..leagues(&["L1"])
        };
        let matches = vec![live("m1", "L1"), scheduled("m2", "L1", "a", "b", Duration::hours(1))];

        assert_eq!(select_featured(&settings, &matches, now()), vec!["m2".to_string()]);
    }

    #[test]
    fn include_upcoming_false_excludes_scheduled_matches() {
        let settings = FeaturedMatchesSettings {
            include_upcoming: false,
            ..leagues(&["L1"])
        };
        let matches = vec![live("m1", "L1"), scheduled("m2", "L1", "a", "b", Duration::hours(1))];

        assert_eq!(select_featured(&settings, &matches, now()), vec!["m1".to_string()]);
    }

    #[test]
    fn upcoming_window_boundaries() {
        let settings = leagues(&["L1"]);
        let matches = vec![
            scheduled("inside", "L1", "a", "b", Duration::hours(24) - Duration::minutes(1)),
            scheduled("outside", "L1", "c", "d", Duration::hours(24) + Duration::minutes(1)),
            scheduled("started", "L1", "e", "f", Duration::minutes(-1)),
        ];

        assert_eq!(select_featured(&settings, &matches, now()), vec!["inside".to_string()]);
    }

    #[test]
    fn finished_matches_are_never_selected_and_lose_their_flag() {
        let settings = leagues(&["L1"]);
        let mut finished = live("m1", "L1");
        finished.status = MatchStatus::Finished;
        finished.is_featured = true;
        let matches = vec![finished];

        let selected = select_featured(&settings, &matches, now());
        assert!(selected.is_empty());

        let diff = diff_flags(&selected, &matches);
        assert_eq!(diff.to_unfeature, vec!["m1".to_string()]);
        assert!(diff.to_feature.is_empty());
    }

    #[test]
    fn upcoming_outside_criteria_is_not_selected() {
        let settings = leagues(&["L1"]);
        let matches = vec![scheduled("m1", "L2", "a", "b", Duration::hours(1))];
        assert!(select_featured(&settings, &matches, now()).is_empty());
    }

    #[test]
    fn ties_break_on_id() {
        let settings = leagues(&["L1"]);
        let matches = vec![
            scheduled("b", "L1", "a", "b", Duration::hours(1)),
            scheduled("a", "L1", "c", "d", Duration::hours(1)),
        ];
        assert_eq!(
            select_featured(&settings, &matches, now()),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn nothing_qualifying_is_empty() {
        let settings = leagues(&[]);
        let matches = vec![scheduled("m1", "L1", "a", "b", Duration::hours(1))];
        assert!(!qualifies(&settings, &matches[0]));
        assert!(select_featured(&settings, &matches, now()).is_empty());
        assert!(diff_flags(&[], &matches).is_empty());
    }

    #[test]
    fn qualifies_ignores_status() {
        let settings = FeaturedMatchesSettings {
            top_team_ids: vec!["b".into()],
            ..leagues(&[])
        };
        let m = scheduled("m1", "L1", "a", "b", Duration::days(30));
        assert!(qualifies(&settings, &m));
        assert_eq!(categorize(&settings, &m, now()), None);
    }
}

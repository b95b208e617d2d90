//! Match lifecycle status as stored on the `matches` table.
//!
//! The fixture sync owns these values; this crate only reads them to decide
//! which matches are live or upcoming.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_LIVE: &str = "live";
pub const STATUS_FINISHED: &str = "finished";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const STATUS_POSTPONED: &str = "postponed";

/// All valid status strings.
pub const VALID_MATCH_STATUSES: &[&str] = &[
    STATUS_SCHEDULED,
    STATUS_LIVE,
    STATUS_FINISHED,
    STATUS_CANCELLED,
    STATUS_POSTPONED,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Cancelled,
    Postponed,
}

impl MatchStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_SCHEDULED => Ok(Self::Scheduled),
            STATUS_LIVE => Ok(Self::Live),
            STATUS_FINISHED => Ok(Self::Finished),
            STATUS_CANCELLED => Ok(Self::Cancelled),
            STATUS_POSTPONED => Ok(Self::Postponed),
            _ => Err(CoreError::Internal(format!(
                "Invalid match status '{s}'. Must be one of: {}",
                VALID_MATCH_STATUSES.join(", ")
            ))),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => STATUS_SCHEDULED,
            Self::Live => STATUS_LIVE,
            Self::Finished => STATUS_FINISHED,
            Self::Cancelled => STATUS_CANCELLED,
            Self::Postponed => STATUS_POSTPONED,
        }
    }

    /// Statuses after which a match can no longer be in play.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled | Self::Postponed)
    }
}

/// Whether a match is currently in play.
///
/// The feed sometimes sets `is_live` before it moves the status off
/// `scheduled`, so either signal counts unless the match has already ended.
pub fn is_live(status: MatchStatus, is_live_flag: bool) -> bool {
    status == MatchStatus::Live || (is_live_flag && !status.is_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_round_trip() {
        for s in VALID_MATCH_STATUSES {
            let status = MatchStatus::from_str_value(s).unwrap();
            assert_eq!(status.as_str(), *s);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = MatchStatus::from_str_value("abandoned").unwrap_err();
        assert!(err.to_string().contains("abandoned"));
    }

    #[test]
    fn live_flag_counts_only_before_the_match_ends() {
        assert!(is_live(MatchStatus::Live, false));
        assert!(is_live(MatchStatus::Scheduled, true));
        assert!(!is_live(MatchStatus::Scheduled, false));
        assert!(!is_live(MatchStatus::Finished, true));
        assert!(!is_live(MatchStatus::Postponed, true));
    }
}

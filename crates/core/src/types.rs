/// Primary keys of rows this service creates itself (users) are BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Sports, leagues, teams and matches are keyed by the upstream feed's
/// identifiers, stored as text.
pub type ExternalId = String;

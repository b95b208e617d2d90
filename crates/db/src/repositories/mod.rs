//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod app_setting_repo;
pub mod featured_settings_repo;
pub mod fixture_repo;
pub mod match_repo;
pub mod user_repo;

pub use app_setting_repo::AppSettingRepo;
pub use featured_settings_repo::FeaturedSettingsRepo;
pub use fixture_repo::FixtureRepo;
pub use match_repo::MatchRepo;
pub use user_repo::UserRepo;

//! Row structs and DTOs.
//!
//! - [`user`] -- accounts used for bearer-token auth.
//! - [`fixture`] -- sports, leagues, teams and matches (read, plus the
//!   `is_featured` flag).
//! - [`app_setting`] -- generic JSON settings rows.

pub mod app_setting;
pub mod fixture;
pub mod user;

//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the caller identified by a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- settings and flag mutations.
//! - [`rbac::RequireAuth`] -- any signed-in operator.

pub mod auth;
pub mod rbac;

//! Domain types and pure logic for the featured matches service.
//!
//! This crate has no database or HTTP dependencies. Everything here operates
//! on values loaded by the caller, which keeps selection and aggregation
//! testable without a running store.

pub mod error;
pub mod featured;
pub mod match_status;
pub mod roles;
pub mod types;

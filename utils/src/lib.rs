//! Shared utilities for the Backoffice dashboard.
//!
//! Pure helpers with no state, shared by `business` and `ui`:
//! - `format`: currency, number, percentage and date formatting for display
//! - `query`: query-string building for REST list endpoints
//! - `version_info`: build-time environment and version labels

pub mod format;
pub mod query;
pub mod version_info;

//! Platform-agnostic helpers used across views.

pub mod dates;
pub mod format;

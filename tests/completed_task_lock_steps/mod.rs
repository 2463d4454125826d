//! Step definitions for update-time business rule scenarios.

pub mod then;
pub mod when;
pub mod world;

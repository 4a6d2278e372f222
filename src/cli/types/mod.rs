//! Type-safe wrappers for league identifiers and time values.

pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

pub use ids::TeamId;
pub use time::{WeekNumber, Year};

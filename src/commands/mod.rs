//! Command implementations for the league keeper CLI

pub mod common;
pub mod edit_week;
pub mod init_season;
pub mod standings;
pub mod weeks;
pub mod years;

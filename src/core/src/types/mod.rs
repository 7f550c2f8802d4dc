//! Shared types for temporal role management

pub mod time;

// Re-export commonly used types
pub use time::{TimeWindow, Timestamp};

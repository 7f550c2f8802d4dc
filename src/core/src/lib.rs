//! # SessionRole Core
//!
//! Shared types, traits, and error handling for temporal role management.
//! Host authorization engines depend on this crate to talk to a role manager
//! without pulling in any particular implementation.

pub mod types;
pub mod traits;
pub mod error;

// Re-export commonly used types
pub use error::{RoleError, Result};
pub use traits::RoleManager;
pub use types::{TimeWindow, Timestamp};

//! # SessionRole RBAC
//!
//! Role manager with time-limited inheritance for host authorization engines.
//!
//! ## Features
//!
//! - **Temporal links**: every inheritance edge carries a closed `[start, end]` window
//! - **Depth-bounded reachability**: a configured hierarchy level caps every search,
//!   which is also what keeps cyclic graphs from looping
//! - **Direct enumeration**: one-hop role and user listings at a given instant
//! - **Pluggable**: implements [`RoleManager`] from `sessionrole-core`
//! - **Shared handle**: [`SharedSessionRoleManager`] for multi-threaded hosts
//!
//! ## Example
//!
//! ```rust
//! use sessionrole_rbac::{RoleManager, SessionRoleManager, Timestamp};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rm: SessionRoleManager = SessionRoleManager::new(3)?;
//!
//! let now = Timestamp::now();
//! let in_one_hour = now.plus_millis(3_600_000);
//!
//! rm.add_link("alpha", "bravo", &[now, in_one_hour])?;
//!
//! assert!(rm.has_link("alpha", "bravo", &[now])?);
//! assert!(!rm.has_link("alpha", "bravo", &[in_one_hour.plus_millis(1)])?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod session_roles;

// Re-export commonly used types
pub use config::ManagerConfig;
pub use session_roles::{RoleId, RoleNode, RoleStore, Session, SessionRoleManager, SharedSessionRoleManager};
pub use sessionrole_core::{RoleError, RoleManager, Result, TimeWindow, Timestamp};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

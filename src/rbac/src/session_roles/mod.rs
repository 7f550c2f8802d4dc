//! Session roles module
//!
//! Role inheritance where every link is only valid inside a time window.
//!
//! # Structure
//!
//! - **Types**: [`RoleNode`] vertices holding time-windowed [`Session`] edges
//! - **Store**: [`RoleStore`] arena mapping role names to nodes
//! - **Manager**: [`SessionRoleManager`] with the depth-bounded search
//! - **Shared**: [`SharedSessionRoleManager`] mutex handle for threaded hosts
//!
//! # Example
//!
//! ```rust
//! use sessionrole_rbac::session_roles::SessionRoleManager;
//! use sessionrole_rbac::{TimeWindow, Timestamp};
//!
//! let mut rm: SessionRoleManager = SessionRoleManager::new(3).unwrap();
//! let t0 = Timestamp::from_millis(1_000);
//!
//! rm.link("alpha", "bravo", TimeWindow::new(t0, t0.plus_millis(10)));
//! rm.link("bravo", "charlie", TimeWindow::new(t0, t0.plus_millis(10)));
//!
//! // Two hops fit in a level-3 budget
//! assert!(rm.is_reachable("alpha", "charlie", &t0));
//! assert_eq!(rm.direct_roles("alpha", &t0).unwrap(), vec!["bravo"]);
//! ```

pub mod types;
pub mod store;
pub mod manager;
pub mod shared;


pub use types::{RoleId, RoleNode, Session};
pub use store::RoleStore;
pub use manager::SessionRoleManager;
pub use shared::SharedSessionRoleManager;

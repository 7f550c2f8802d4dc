//! Role node and session edge definitions

use serde::{Deserialize, Serialize};
use sessionrole_core::{TimeWindow, Timestamp};

/// Index of a role node inside its [`RoleStore`](super::RoleStore)
///
/// Ids stay valid until the store is cleared; nodes are never removed one by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoleId(pub(crate) usize);

impl RoleId {
    /// Position in the store
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Time-windowed inheritance edge
///
/// The target is referenced by id; the store owns every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session<T = Timestamp> {
    /// Inherited role
    pub target: RoleId,

    /// When the inheritance is active
    pub window: TimeWindow<T>,
}

impl<T: Ord> Session<T> {
    /// Create a new session edge
    pub fn new(target: RoleId, window: TimeWindow<T>) -> Self {
        Self { target, window }
    }

    /// Check whether the edge is active at `t`
    pub fn is_active(&self, t: &T) -> bool {
        self.window.contains(t)
    }
}

/// Named vertex with its outbound sessions in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleNode<T = Timestamp> {
    name: String,
    sessions: Vec<Session<T>>,
}

impl<T: Ord> RoleNode<T> {
    /// Create a role with no sessions
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sessions: Vec::new(),
        }
    }

    /// Role name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outbound sessions in insertion order
    pub fn sessions(&self) -> &[Session<T>] {
        &self.sessions
    }

    /// Append a session; identical sessions are kept side by side
    pub fn add_session(&mut self, session: Session<T>) {
        self.sessions.push(session);
    }

    /// Drop every session pointing at `target`, whatever its window
    ///
    /// Returns the number of sessions removed.
    pub fn delete_sessions(&mut self, target: RoleId) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.target != target);
        before - self.sessions.len()
    }

    /// Targets of sessions active at `t`, first occurrence order, no duplicates
    pub fn session_roles(&self, t: &T) -> Vec<RoleId> {
        let mut roles = Vec::new();
        for session in self.sessions.iter().filter(|s| s.is_active(t)) {
            if !roles.contains(&session.target) {
                roles.push(session.target);
            }
        }
        roles
    }

    /// Check for at least one session to `target` active at `t`
    pub fn has_direct_role(&self, target: RoleId, t: &T) -> bool {
        self.sessions
            .iter()
            .any(|s| s.target == target && s.is_active(t))
    }
}

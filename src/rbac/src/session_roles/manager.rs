//! Session role manager with depth-bounded temporal reachability
//!
//! The manager owns a [`RoleStore`] and a maximum hierarchy level fixed at
//! construction. Mutations create roles lazily; queries never do.
//!
//! # Reachability
//!
//! `has_link(a, b, t)` searches from `a` with a budget equal to the hierarchy
//! level:
//!
//! - budget 1: compare the current role with `b`, look at no edges
//! - otherwise: for every session active at `t`, in insertion order, succeed
//!   if it targets `b`, else search its target with budget - 1
//!
//! A chain of N links therefore needs a level of at least N + 1. The budget
//! drops on every step, so cycles terminate without any visited set.

use super::store::RoleStore;
use super::types::{RoleId, Session};
use crate::config::ManagerConfig;
use sessionrole_core::{RoleError, RoleManager, Result, TimeWindow, Timestamp};
use std::fmt;
use tracing::{debug, info, trace, warn};

/// One pending level of the reachability search
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Role whose sessions are being scanned
    role: RoleId,
    /// Remaining depth budget at this role
    budget: usize,
    /// Next session index to examine
    next: usize,
}

/// Role manager with time-limited inheritance links
///
/// Single-owner and lock-free; wrap it in
/// [`SharedSessionRoleManager`](super::SharedSessionRoleManager) to share it
/// between threads.
#[derive(Debug, Clone)]
pub struct SessionRoleManager<T = Timestamp> {
    /// All roles and their sessions
    store: RoleStore<T>,

    /// Depth budget for reachability queries
    max_hierarchy_level: usize,
}

impl<T: Ord + Clone> SessionRoleManager<T> {
    /// Create a manager with the given maximum hierarchy level
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the level is 0.
    pub fn new(max_hierarchy_level: usize) -> Result<Self> {
        Self::with_config(ManagerConfig::new(max_hierarchy_level))
    }

    /// Create a manager from a configuration
    pub fn with_config(config: ManagerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store: RoleStore::new(),
            max_hierarchy_level: config.max_hierarchy_level,
        })
    }

    /// Configured depth budget
    pub fn max_hierarchy_level(&self) -> usize {
        self.max_hierarchy_level
    }

    /// Underlying role store
    pub fn store(&self) -> &RoleStore<T> {
        &self.store
    }

    /// Number of known roles
    pub fn role_count(&self) -> usize {
        self.store.len()
    }

    /// Check whether a role has been mentioned by any mutation
    pub fn contains_role(&self, name: &str) -> bool {
        self.store.exists(name)
    }

    /// Remove every role and session; the hierarchy level is kept
    pub fn clear(&mut self) {
        debug!(roles = self.store.len(), "clearing session roles");
        self.store.clear();
    }

    /// Let `name1` inherit `name2` during `window`
    ///
    /// Both roles are created if needed. Repeated calls add repeated sessions.
    pub fn link(&mut self, name1: &str, name2: &str, window: TimeWindow<T>) {
        let from = self.store.get_or_create(name1);
        let to = self.store.get_or_create(name2);

        let node = self.store.node_mut(from);
        node.add_session(Session::new(to, window));

        debug!(from = name1, to = name2, sessions = node.sessions().len(), "added session link");
    }

    /// Remove every session from `name1` to `name2`
    ///
    /// # Errors
    ///
    /// Returns `RoleNotFound` if either role is unknown.
    pub fn unlink(&mut self, name1: &str, name2: &str) -> Result<()> {
        let (from, to) = match (self.store.id_of(name1), self.store.id_of(name2)) {
            (Some(from), Some(to)) => (from, to),
            (from, _) => {
                let missing = if from.is_none() { name1 } else { name2 };
                warn!(from = name1, to = name2, missing, "cannot delete link to unknown role");
                return Err(RoleError::role_not_found(missing));
            }
        };

        let removed = self.store.node_mut(from).delete_sessions(to);
        debug!(from = name1, to = name2, removed, "deleted session links");
        Ok(())
    }

    /// Check whether `name1` inherits `name2` at `t`
    ///
    /// Reflexive for every name, known or not. Unknown names are never
    /// reachable and are not an error.
    pub fn is_reachable(&self, name1: &str, name2: &str, t: &T) -> bool {
        if name1 == name2 {
            return true;
        }

        let (from, to) = match (self.store.id_of(name1), self.store.id_of(name2)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                trace!(from = name1, to = name2, "reachability miss: unknown role");
                return false;
            }
        };

        let reachable = self.search(from, to, t);
        trace!(from = name1, to = name2, reachable, "reachability query");
        reachable
    }

    /// Depth-first search with an explicit frame stack
    ///
    /// Visits sessions in the same order as the recursive formulation and
    /// stops at the first hit. The stack never holds more than
    /// `max_hierarchy_level` frames.
    fn search(&self, root: RoleId, target: RoleId, t: &T) -> bool {
        let mut stack = Vec::with_capacity(self.max_hierarchy_level);
        stack.push(Frame {
            role: root,
            budget: self.max_hierarchy_level,
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            // Terminal level: name comparison only, no edges examined
            if frame.budget == 1 {
                let role = frame.role;
                stack.pop();
                if role == target {
                    return true;
                }
                continue;
            }

            let Some(session) = self.store.node(frame.role).sessions().get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            if !session.is_active(t) {
                continue;
            }
            if session.target == target {
                return true;
            }

            let child = Frame {
                role: session.target,
                budget: frame.budget - 1,
                next: 0,
            };
            stack.push(child);
        }

        false
    }

    /// Roles `name` directly inherits at `t`
    ///
    /// First-occurrence order, duplicates removed, one hop only.
    ///
    /// # Errors
    ///
    /// Returns `RoleNotFound` if the role is unknown.
    pub fn direct_roles(&self, name: &str, t: &T) -> Result<Vec<String>> {
        let id = self
            .store
            .id_of(name)
            .ok_or_else(|| RoleError::role_not_found(name))?;

        Ok(self
            .store
            .node(id)
            .session_roles(t)
            .into_iter()
            .map(|target| self.store.name_of(target).to_string())
            .collect())
    }

    /// Roles directly inheriting `name` at `t`, sorted ascending
    ///
    /// An unknown role simply has no users.
    pub fn direct_users(&self, name: &str, t: &T) -> Vec<String> {
        let Some(target) = self.store.id_of(name) else {
            return Vec::new();
        };

        let mut users: Vec<String> = self
            .store
            .iter()
            .filter(|(_, node)| node.has_direct_role(target, t))
            .map(|(_, node)| node.name().to_string())
            .collect();
        users.sort();
        users
    }

    /// One diagnostic line per role, in creation order
    pub fn role_lines(&self) -> Vec<String>
    where
        T: fmt::Display,
    {
        self.store.iter().map(|(id, _)| self.store.describe(id)).collect()
    }
}

impl<T: Ord + Clone> Default for SessionRoleManager<T> {
    fn default() -> Self {
        Self {
            store: RoleStore::new(),
            max_hierarchy_level: ManagerConfig::default().max_hierarchy_level,
        }
    }
}

impl<T> RoleManager for SessionRoleManager<T>
where
    T: Ord + Clone + fmt::Display + Send + Sync,
{
    type Time = T;

    fn clear(&mut self) {
        SessionRoleManager::clear(self);
    }

    fn add_link(&mut self, name1: &str, name2: &str, time_range: &[T]) -> Result<()> {
        RoleError::check_arity(time_range, 2, "start and end times")?;
        let window = TimeWindow::new(time_range[0].clone(), time_range[1].clone());
        self.link(name1, name2, window);
        Ok(())
    }

    fn delete_link(&mut self, name1: &str, name2: &str) -> Result<()> {
        self.unlink(name1, name2)
    }

    fn has_link(&self, name1: &str, name2: &str, time: &[T]) -> Result<bool> {
        RoleError::check_arity(time, 1, "request time")?;
        Ok(self.is_reachable(name1, name2, &time[0]))
    }

    fn get_roles(&self, name: &str, time: &[T]) -> Result<Vec<String>> {
        RoleError::check_arity(time, 1, "request time")?;
        self.direct_roles(name, &time[0])
    }

    fn get_users(&self, name: &str, time: &[T]) -> Result<Vec<String>> {
        RoleError::check_arity(time, 1, "request time")?;
        Ok(self.direct_users(name, &time[0]))
    }

    fn print_roles(&self) -> Vec<String> {
        let lines = self.role_lines();
        for line in &lines {
            info!("{}", line);
        }
        lines
    }
}

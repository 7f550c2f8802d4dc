//! Mutex-guarded handle for sharing one manager between threads
//!
//! The manager itself has no locking. This handle serializes every operation
//! behind a single `parking_lot::Mutex`; clones share the same manager.

use super::manager::SessionRoleManager;
use crate::config::ManagerConfig;
use parking_lot::{Mutex, MutexGuard};
use sessionrole_core::{RoleManager, Result, Timestamp};
use std::fmt;
use std::sync::Arc;

/// Cloneable, thread-safe handle to a [`SessionRoleManager`]
pub struct SharedSessionRoleManager<T = Timestamp> {
    inner: Arc<Mutex<SessionRoleManager<T>>>,
}

impl<T: Ord + Clone> SharedSessionRoleManager<T> {
    /// Wrap an existing manager
    pub fn new(manager: SessionRoleManager<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Create a shared manager from a configuration
    pub fn with_config(config: ManagerConfig) -> Result<Self> {
        Ok(Self::new(SessionRoleManager::with_config(config)?))
    }

    /// Lock the manager for a batch of operations
    pub fn lock(&self) -> MutexGuard<'_, SessionRoleManager<T>> {
        self.inner.lock()
    }
}

impl<T> Clone for SharedSessionRoleManager<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> RoleManager for SharedSessionRoleManager<T>
where
    T: Ord + Clone + fmt::Display + Send + Sync,
{
    type Time = T;

    fn clear(&mut self) {
        self.inner.lock().clear();
    }

    fn add_link(&mut self, name1: &str, name2: &str, time_range: &[T]) -> Result<()> {
        self.inner.lock().add_link(name1, name2, time_range)
    }

    fn delete_link(&mut self, name1: &str, name2: &str) -> Result<()> {
        self.inner.lock().delete_link(name1, name2)
    }

    fn has_link(&self, name1: &str, name2: &str, time: &[T]) -> Result<bool> {
        self.inner.lock().has_link(name1, name2, time)
    }

    fn get_roles(&self, name: &str, time: &[T]) -> Result<Vec<String>> {
        self.inner.lock().get_roles(name, time)
    }

    fn get_users(&self, name: &str, time: &[T]) -> Result<Vec<String>> {
        self.inner.lock().get_users(name, time)
    }

    fn print_roles(&self) -> Vec<String> {
        self.inner.lock().print_roles()
    }
}

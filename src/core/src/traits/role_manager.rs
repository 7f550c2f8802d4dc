//! Role manager capability trait
//!
//! This is the surface a host authorization engine calls. Time tokens arrive
//! as slices because hosts forward whatever trailing fields a policy line or
//! request carries; implementations reject the wrong count with
//! [`RoleError::InvalidArgument`](crate::error::RoleError::InvalidArgument).

use crate::error::Result;

/// Pluggable role resolution with time-aware inheritance
pub trait RoleManager: Send + Sync {
    /// Time token type, ordered chronologically
    type Time: Ord + Clone + Send + Sync;

    /// Remove every role and link
    fn clear(&mut self);

    /// Let `name1` inherit `name2` during `time_range = [start, end]`
    fn add_link(&mut self, name1: &str, name2: &str, time_range: &[Self::Time]) -> Result<()>;

    /// Remove every link from `name1` to `name2`, whatever its time range
    fn delete_link(&mut self, name1: &str, name2: &str) -> Result<()>;

    /// Check whether `name1` inherits `name2` at `time = [t]`
    fn has_link(&self, name1: &str, name2: &str, time: &[Self::Time]) -> Result<bool>;

    /// Roles `name` directly inherits at `time = [t]`
    fn get_roles(&self, name: &str, time: &[Self::Time]) -> Result<Vec<String>>;

    /// Roles directly inheriting `name` at `time = [t]`, sorted
    fn get_users(&self, name: &str, time: &[Self::Time]) -> Result<Vec<String>>;

    /// Log one line per role and return the lines
    fn print_roles(&self) -> Vec<String>;
}

//! Role manager configuration
//!
//! Environment variables:
//! - `SESSIONROLE_MAX_HIERARCHY_LEVEL` - search depth budget (default: 10)

use serde::{Deserialize, Serialize};
use sessionrole_core::{RoleError, Result};

/// Environment variable holding the maximum hierarchy level
pub const MAX_HIERARCHY_LEVEL_ENV: &str = "SESSIONROLE_MAX_HIERARCHY_LEVEL";

/// Default maximum hierarchy level
pub const DEFAULT_MAX_HIERARCHY_LEVEL: usize = 10;

/// Role manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Depth budget for reachability queries
    ///
    /// A chain of N links is reachable only when this is at least N + 1.
    pub max_hierarchy_level: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            max_hierarchy_level: DEFAULT_MAX_HIERARCHY_LEVEL,
        }
    }
}

impl ManagerConfig {
    /// Create a configuration with the given hierarchy level
    pub fn new(max_hierarchy_level: usize) -> Self {
        Self { max_hierarchy_level }
    }

    /// Load from the environment, falling back to defaults for unset values
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var(MAX_HIERARCHY_LEVEL_ENV) {
            Ok(raw) => Self::from_level_str(&raw)?,
            Err(_) => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn from_level_str(raw: &str) -> Result<Self> {
        let level = raw.trim().parse::<usize>().map_err(|e| {
            RoleError::invalid_argument(format!(
                "{} must be a positive integer, got '{}': {}",
                MAX_HIERARCHY_LEVEL_ENV, raw, e
            ))
        })?;
        Ok(Self::new(level))
    }

    /// Reject a zero budget, which would never reach the terminal check
    pub fn validate(&self) -> Result<()> {
        if self.max_hierarchy_level == 0 {
            return Err(RoleError::invalid_argument(
                "max hierarchy level must be at least 1",
            ));
        }
        Ok(())
    }
}

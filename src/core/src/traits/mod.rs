//! Shared traits for temporal role management

pub mod role_manager;

// Re-export commonly used traits
pub use role_manager::RoleManager;

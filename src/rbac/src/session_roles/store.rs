//! Role store: name-indexed arena of role nodes
//!
//! Nodes live in a vector and sessions point at them by [`RoleId`], so edges
//! never own their targets and cycles need no reference counting. Nodes are
//! only ever appended; `clear` drops everything at once.

use super::types::{RoleId, RoleNode, Session};
use sessionrole_core::Timestamp;
use std::collections::HashMap;
use std::fmt;

/// Mapping from role name to role node
#[derive(Debug, Clone)]
pub struct RoleStore<T = Timestamp> {
    /// Nodes in creation order
    nodes: Vec<RoleNode<T>>,

    /// Name lookup into `nodes`
    index: HashMap<String, RoleId>,
}

impl<T: Ord> RoleStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Check whether a role with this name exists
    pub fn exists(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a role id without creating anything
    pub fn id_of(&self, name: &str) -> Option<RoleId> {
        self.index.get(name).copied()
    }

    /// Return the existing role or insert an empty one
    pub fn get_or_create(&mut self, name: &str) -> RoleId {
        if let Some(id) = self.index.get(name) {
            return *id;
        }

        let id = RoleId(self.nodes.len());
        self.nodes.push(RoleNode::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Node for an id handed out by this store
    ///
    /// # Panics
    ///
    /// Panics if `id` came from another store or predates a `clear`.
    pub fn node(&self, id: RoleId) -> &RoleNode<T> {
        &self.nodes[id.0]
    }

    /// Mutable node for an id handed out by this store
    pub fn node_mut(&mut self, id: RoleId) -> &mut RoleNode<T> {
        &mut self.nodes[id.0]
    }

    /// Role name for an id
    pub fn name_of(&self, id: RoleId) -> &str {
        self.nodes[id.0].name()
    }

    /// All nodes in creation order
    pub fn iter(&self) -> impl Iterator<Item = (RoleId, &RoleNode<T>)> {
        self.nodes.iter().enumerate().map(|(i, node)| (RoleId(i), node))
    }

    /// Number of roles
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the store holds no roles
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every role and session
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    /// Diagnostic line for one role
    ///
    /// Format: `name < target1 (until: end1), target2 (until: end2)`
    pub fn describe(&self, id: RoleId) -> String
    where
        T: fmt::Display,
    {
        let node = self.node(id);
        let targets: Vec<String> = node
            .sessions()
            .iter()
            .map(|s: &Session<T>| format!("{} (until: {})", self.name_of(s.target), s.window.end))
            .collect();
        format!("{} < {}", node.name(), targets.join(", "))
    }
}

impl<T: Ord> Default for RoleStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

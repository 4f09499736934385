//! # Node Catalogue
//!
//! Source of node snapshots for the listing. The in-memory store keeps
//! nodes in insertion order; every read hands out clones.

use std::fs;
use std::path::Path;
use std::sync::RwLock;

use crate::errors::{AdminError, AdminResult};
use crate::model::{Node, Page, PageStatus};

/// Read access to nodes plus the one write the admin performs
pub trait NodeSource: Send + Sync {
    /// Page `number` (1-based) of `per_page` nodes
    fn page(&self, number: usize, per_page: usize) -> AdminResult<Page>;

    /// Node by id
    fn get(&self, id: &str) -> Option<Node>;

    /// Every node the user contributes to, in catalogue order
    fn nodes_for_user(&self, user_id: &str) -> Vec<Node>;

    /// Flag the given nodes as spam. All ids must exist; returns how many
    /// were newly flagged.
    fn mark_spam(&self, ids: &[String]) -> AdminResult<usize>;
}

/// In-memory catalogue
#[derive(Debug, Default)]
pub struct MemoryNodeStore {
    nodes: RwLock<Vec<Node>>,
}

impl MemoryNodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from nodes, rejecting empty or duplicate ids
    pub fn from_nodes(nodes: Vec<Node>) -> AdminResult<Self> {
        let store = Self::new();
        for node in nodes {
            store.insert(node)?;
        }
        Ok(store)
    }

    /// Load a JSON array of nodes
    pub fn load_fixture(path: &Path) -> AdminResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AdminError::Fixture(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let nodes: Vec<Node> = serde_json::from_str(&content)
            .map_err(|e| AdminError::Fixture(format!("Invalid node JSON: {}", e)))?;
        Self::from_nodes(nodes)
    }

    /// Append a node
    pub fn insert(&self, node: Node) -> AdminResult<()> {
        if node.id.is_empty() {
            return Err(AdminError::Fixture("Node id must not be empty".to_string()));
        }
        let mut nodes = self.write();
        if nodes.iter().any(|n| n.id == node.id) {
            return Err(AdminError::Fixture(format!("Duplicate node id: {}", node.id)));
        }
        nodes.push(node);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Node>> {
        self.nodes.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Node>> {
        self.nodes.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NodeSource for MemoryNodeStore {
    fn page(&self, number: usize, per_page: usize) -> AdminResult<Page> {
        if per_page == 0 {
            return Err(AdminError::InvalidPage(number));
        }
        let nodes = self.read();
        let status = PageStatus::new(number, per_page, nodes.len());
        if number == 0 || number > status.num_pages {
            return Err(AdminError::InvalidPage(number));
        }

        let page_nodes = nodes
            .iter()
            .skip(status.offset())
            .take(per_page)
            .cloned()
            .collect();

        Ok(Page {
            nodes: page_nodes,
            status,
        })
    }

    fn get(&self, id: &str) -> Option<Node> {
        self.read().iter().find(|n| n.id == id).cloned()
    }

    fn nodes_for_user(&self, user_id: &str) -> Vec<Node> {
        self.read()
            .iter()
            .filter(|n| n.has_contributor(user_id))
            .cloned()
            .collect()
    }

    fn mark_spam(&self, ids: &[String]) -> AdminResult<usize> {
        let mut nodes = self.write();

        if let Some(missing) = ids.iter().find(|id| !nodes.iter().any(|n| &n.id == *id)) {
            return Err(AdminError::NodeNotFound(missing.clone()));
        }

        let mut flagged = 0;
        for node in nodes.iter_mut().filter(|n| ids.contains(&n.id)) {
            if !node.spam {
                node.spam = true;
                flagged += 1;
            }
        }
        Ok(flagged)
    }
}

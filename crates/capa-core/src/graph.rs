//! # Graph Store
//!
//! The working-memory graph: a node table and an insertion-ordered edge list.
//!
//! - The node table is a `BTreeMap`, so snapshots list nodes in ascending id order.
//! - Edges are checked against the node table once, when they are created.
//! - Duplicate edges and any salience/weight value are accepted as given.
//! - Every mutation validates before it writes; a failed call changes nothing.

use crate::allocator::IdAllocator;
use crate::formats::Snapshot;
use crate::primitives::DEFAULT_SALIENCE;
use crate::{CapaError, Edge, Node, NodeId};
use std::collections::BTreeMap;

/// The working-memory graph store.
///
/// Owns its tables exclusively; callers only get shared references or owned copies.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node storage: NodeId -> Node
    nodes: BTreeMap<NodeId, Node>,

    /// Edge list in insertion order.
    edges: Vec<Edge>,

    allocator: IdAllocator,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a graph from a decoded snapshot, preserving original ids.
    ///
    /// The allocator resumes after the highest id seen. Edges are re-checked
    /// against the snapshot's node set.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, CapaError> {
        let mut nodes = BTreeMap::new();
        for node in snapshot.nodes {
            nodes.insert(node.id, node);
        }

        for edge in &snapshot.edges {
            for endpoint in [edge.from_id, edge.to_id] {
                if !nodes.contains_key(&endpoint) {
                    return Err(CapaError::NodeNotFound(endpoint));
                }
            }
        }

        let next = nodes
            .keys()
            .next_back()
            .map_or(0, |id: &NodeId| id.0.saturating_add(1));

        Ok(Self {
            nodes,
            edges: snapshot.edges,
            allocator: IdAllocator::starting_at(next),
        })
    }

    /// Insert a node with the default salience (1.0). Returns its id.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        self.add_node_with_salience(label, DEFAULT_SALIENCE)
    }

    /// Insert a node with an explicit salience. Returns its id.
    pub fn add_node_with_salience(&mut self, label: impl Into<String>, salience: f32) -> NodeId {
        let id = self.allocator.next_id();
        let node = Node::new(id, label, salience);
        tracing::debug!(node = %id, label = %node.label, salience, "node added");
        self.nodes.insert(id, node);
        id
    }

    /// Append a directed edge between two existing nodes.
    ///
    /// Returns `CapaError::NodeNotFound` naming the first missing endpoint.
    pub fn add_edge(
        &mut self,
        from_id: NodeId,
        to_id: NodeId,
        weight: f32,
    ) -> Result<(), CapaError> {
        self.require_node(from_id)?;
        self.require_node(to_id)?;
        self.edges.push(Edge::new(from_id, to_id, weight));
        tracing::debug!(from = %from_id, to = %to_id, weight, "edge added");
        Ok(())
    }

    /// Overwrite the salience of an existing node.
    pub fn update_salience(&mut self, id: NodeId, salience: f32) -> Result<(), CapaError> {
        let Some(node) = self.nodes.get_mut(&id) else {
            tracing::warn!(node = %id, "salience update for unknown node");
            return Err(CapaError::NodeNotFound(id));
        };
        node.salience = salience;
        Ok(())
    }

    /// Owned point-in-time copy of all nodes (ascending id) and edges (insertion order).
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self.nodes.values().cloned().collect(),
            edges: self.edges.clone(),
        }
    }

    /// Lookup a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Check if the graph contains a node.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get all nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Get the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The id the next `add_node` call will return.
    #[must_use]
    pub fn next_node_id(&self) -> NodeId {
        self.allocator.peek()
    }

    fn require_node(&self, id: NodeId) -> Result<(), CapaError> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            tracing::warn!(node = %id, "edge references unknown node");
            Err(CapaError::NodeNotFound(id))
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! # Working Memory
//!
//! The boundary surface handed to the embedding host: one owning value that
//! combines the graph store, the relevance filter, the snapshot codec and the
//! journal writer.
//!
//! Not synchronized. One `WorkingMemory` is driven by one thread; wrap it in
//! a lock if it must be shared.

use crate::filter::RelevanceFilter;
use crate::formats::Snapshot;
use crate::graph::Graph;
use crate::journal::{self, JournalEntry};
use crate::{CapaError, Metadata, NodeId};
use std::path::Path;

/// Short-term working memory for one agent.
#[derive(Debug, Clone, Default)]
pub struct WorkingMemory {
    graph: Graph,
    filter: RelevanceFilter,
}

impl WorkingMemory {
    /// Create an empty store with the default keyword policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a custom relevance filter.
    #[must_use]
    pub fn with_filter(filter: RelevanceFilter) -> Self {
        Self {
            graph: Graph::new(),
            filter,
        }
    }

    /// Insert a node with salience 1.0. Does not consult the filter.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        self.graph.add_node(label)
    }

    /// Insert a node with an explicit salience. Does not consult the filter.
    pub fn add_node_with_salience(&mut self, label: impl Into<String>, salience: f32) -> NodeId {
        self.graph.add_node_with_salience(label, salience)
    }

    /// Connect two existing nodes. Fails with `NodeNotFound` and leaves the
    /// edge list untouched if either endpoint is unknown.
    pub fn add_edge(
        &mut self,
        from_id: NodeId,
        to_id: NodeId,
        weight: f32,
    ) -> Result<(), CapaError> {
        self.graph.add_edge(from_id, to_id, weight)
    }

    /// Overwrite the salience of an existing node.
    pub fn update_salience(&mut self, id: NodeId, salience: f32) -> Result<(), CapaError> {
        self.graph.update_salience(id, salience)
    }

    /// Owned copy of the current nodes and edges.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.graph.snapshot()
    }

    /// Encode the current graph into snapshot bytes.
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>, CapaError> {
        self.graph.snapshot().to_bytes()
    }

    /// Run the configured relevance filter. Does not touch the graph.
    #[must_use]
    pub fn is_relevant(&self, label: &str, metadata: &Metadata) -> bool {
        self.filter.is_relevant(label, metadata)
    }

    /// Insert `label` only if it passes the relevance filter.
    ///
    /// Returns the new node id, or `None` when the candidate was discarded.
    pub fn admit(&mut self, label: &str, metadata: &Metadata) -> Option<NodeId> {
        if !self.is_relevant(label, metadata) {
            tracing::info!(label, "candidate discarded by relevance filter");
            return None;
        }
        Some(self.graph.add_node(label))
    }

    /// Append an already-serialized record to the journal at `path`.
    pub fn append_journal(&self, path: impl AsRef<Path>, record: &str) -> Result<(), CapaError> {
        journal::append(path, record)
    }

    /// Append a structured entry to the journal at `path`.
    pub fn log_entry(&self, path: impl AsRef<Path>, entry: &JournalEntry) -> Result<(), CapaError> {
        journal::append_entry(path, entry)
    }

    /// Read-only view of the underlying graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The active relevance filter.
    #[must_use]
    pub fn filter(&self) -> &RelevanceFilter {
        &self.filter
    }
}

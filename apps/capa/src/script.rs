//! # Graph Scripts
//!
//! JSON description of a working-memory graph, replayed into a fresh store by
//! `capa snapshot build`.
//!
//! ```json
//! {
//!   "nodes": [{"label": "concept_A", "salience": 1.5}, {"label": "concept_B"}],
//!   "edges": [{"from": 0, "to": 1, "weight": 0.75}],
//!   "salience": [{"id": 1, "value": 0.2}]
//! }
//! ```
//!
//! Node ids are the ids the store assigns, in listed order starting at 0.
//! Steps run nodes, then edges, then salience updates.

use capa_core::{CapaError, NodeId, WorkingMemory};
use serde::{Deserialize, Serialize};

/// Maximum number of nodes plus edges in one script.
pub const MAX_SCRIPT_STEPS: usize = 100_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphScript {
    pub nodes: Vec<NodeStep>,
    pub edges: Vec<EdgeStep>,
    pub salience: Vec<SalienceStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStep {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salience: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeStep {
    pub from: u64,
    pub to: u64,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalienceStep {
    pub id: u64,
    pub value: f32,
}

impl GraphScript {
    /// Parse a script from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CapaError> {
        let script: Self = serde_json::from_slice(bytes)
            .map_err(|e| CapaError::DeserializationError(format!("Invalid graph script: {}", e)))?;

        let steps = script
            .nodes
            .len()
            .saturating_add(script.edges.len())
            .saturating_add(script.salience.len());
        if steps > MAX_SCRIPT_STEPS {
            return Err(CapaError::DeserializationError(format!(
                "Script has {} steps, maximum is {}",
                steps, MAX_SCRIPT_STEPS
            )));
        }

        Ok(script)
    }

    /// Replay the script into `memory`. Stops at the first failing step.
    pub fn apply(&self, memory: &mut WorkingMemory) -> Result<(), CapaError> {
        for step in &self.nodes {
            match step.salience {
                Some(salience) => memory.add_node_with_salience(step.label.clone(), salience),
                None => memory.add_node(step.label.clone()),
            };
        }

        for step in &self.edges {
            memory.add_edge(NodeId(step.from), NodeId(step.to), step.weight)?;
        }

        for step in &self.salience {
            memory.update_salience(NodeId(step.id), step.value)?;
        }

        Ok(())
    }
}

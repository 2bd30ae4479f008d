//! # Snapshot Codec
//!
//! Deterministic binary encoding of a working-memory graph.
//!
//! The buffer is MessagePack. Records are written as arrays, never maps, so
//! any MessagePack reader sees:
//!
//! ```text
//! [ [ [id, label, salience], ... ], [ [from_id, to_id, weight], ... ] ]
//! ```
//!
//! Ids are unsigned integers, labels are strings, salience and weight are
//! float32 (`0xca`). Field order and types are the contract with external
//! readers. There is no header and no version tag; changing a record breaks
//! every consumer.
//!
//! ## Decoding limits
//!
//! - Buffers above `MAX_SNAPSHOT_SIZE` are rejected before parsing
//! - Trailing bytes after the edge list are rejected

use crate::primitives::MAX_SNAPSHOT_SIZE;
use crate::{CapaError, Edge, Node};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// A decoded (or freshly taken) snapshot: nodes and edges in wire order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Snapshot {
    /// Encode this snapshot. Same as `encode(&self.nodes, &self.edges)`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CapaError> {
        encode(&self.nodes, &self.edges)
    }

    /// Check if the snapshot holds no nodes and no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Serialize nodes and edges into a snapshot buffer.
///
/// This is a pure transformation - no file I/O.
pub fn encode(nodes: &[Node], edges: &[Edge]) -> Result<Vec<u8>, CapaError> {
    rmp_serde::to_vec(&(nodes, edges)).map_err(|e| CapaError::SerializationError(e.to_string()))
}

/// Deserialize a snapshot buffer.
///
/// This is a pure transformation - no file I/O.
pub fn decode(bytes: &[u8]) -> Result<Snapshot, CapaError> {
    if bytes.len() > MAX_SNAPSHOT_SIZE {
        return Err(CapaError::DeserializationError(format!(
            "Snapshot size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_SNAPSHOT_SIZE
        )));
    }

    let mut cursor = Cursor::new(bytes);
    let snapshot = Snapshot::deserialize(&mut rmp_serde::Deserializer::new(&mut cursor))
        .map_err(|e| {
            CapaError::DeserializationError(format!("Failed to decode snapshot: {}", e))
        })?;

    let rest = (bytes.len() as u64).saturating_sub(cursor.position());
    if rest > 0 {
        return Err(CapaError::DeserializationError(format!(
            "{} trailing bytes after snapshot",
            rest
        )));
    }

    Ok(snapshot)
}

// =============================================================================
// TESTS
// =============================================================================

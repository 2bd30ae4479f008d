//! # Core Type Definitions
//!
//! This module contains the data model of the working-memory store:
//! - Node identifiers (`NodeId`)
//! - Graph records (`Node`, `Edge`)
//! - Candidate metadata for the relevance filter (`MetaValue`, `Metadata`)
//! - Error types (`CapaError`)
//!
//! ## Value Ranges
//!
//! Salience and edge weight are plain `f32`. The store never clamps or
//! validates them; negative, huge, or non-finite values are kept as given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

// =============================================================================
// NODE IDENTIFIER
// =============================================================================

/// Identifier of a node in the working-memory graph.
///
/// Issued by the `IdAllocator` of the owning store, starting at 0.
/// Never reused within one store lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// NODE & EDGE
// =============================================================================

/// A labeled, salience-scored vertex.
///
/// Field order is part of the snapshot wire contract: `(id, label, salience)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub salience: f32,
}

impl Node {
    /// Create a new node.
    #[must_use]
    pub fn new(id: NodeId, label: impl Into<String>, salience: f32) -> Self {
        Self {
            id,
            label: label.into(),
            salience,
        }
    }
}

/// A directed, weighted connection between two nodes.
///
/// Field order is part of the snapshot wire contract: `(from_id, to_id, weight)`.
/// Edges carry no identifier of their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from_id: NodeId,
    pub to_id: NodeId,
    pub weight: f32,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(from_id: NodeId, to_id: NodeId, weight: f32) -> Self {
        Self {
            from_id,
            to_id,
            weight,
        }
    }
}

// =============================================================================
// CANDIDATE METADATA
// =============================================================================

/// A dynamically typed metadata value attached to an admission candidate.
///
/// Only `Text` is ever inspected by the relevance filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Other(serde_json::Value),
}

impl MetaValue {
    /// The text payload, if this value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for MetaValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Metadata of an admission candidate or journal entry.
///
/// `BTreeMap` keeps key order stable in serialized journal lines.
pub type Metadata = BTreeMap<String, MetaValue>;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the CAPA core.
///
/// - No silent failures
/// - Validation happens before mutation, so a failed call leaves state untouched
/// - The core never panics
#[derive(Debug, Error)]
pub enum CapaError {
    /// A referenced node does not exist in the store.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// The journal (or another file) could not be opened or written.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Config error: {0}")]
    ConfigError(String),
}

// =============================================================================
// TESTS
// =============================================================================

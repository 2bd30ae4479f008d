//! # capa-core
//!
//! The working-memory core for CAPA - THE STORE.
//!
//! This crate keeps a small directed, weighted graph of labeled concepts
//! that an agent has recently perceived or reasoned about, and hands
//! selected events on to long-term memory.
//!
//! ## Components
//!
//! - `allocator` — strictly increasing node identifiers
//! - `graph` — node table and insertion-ordered edge list
//! - `filter` — keyword-based admission predicate
//! - `formats` — deterministic binary snapshot codec
//! - `journal` — durable append-only hand-off file and its tail reader
//! - `memory` — `WorkingMemory`, the single owning facade over all of the above
//!
//! ## Architectural Constraints
//!
//! - Synchronous: NO async, NO threads, NO network
//! - Single owner: a store is driven by one thread; there is no internal locking
//! - Validation precedes mutation: a failed call never leaves partial state
//! - No node or edge removal, no traversal, no persistence of the live graph

// =============================================================================
// MODULES
// =============================================================================

pub mod allocator;
pub mod filter;
pub mod formats;
pub mod graph;
pub mod journal;
pub mod memory;
pub mod primitives;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{CapaError, Edge, MetaValue, Metadata, Node, NodeId};

// =============================================================================
// RE-EXPORTS: Components
// =============================================================================

pub use allocator::IdAllocator;
pub use filter::{RelevanceFilter, is_relevant};
pub use formats::{Snapshot, decode, encode};
pub use graph::Graph;
pub use journal::{JournalEntry, JournalReader, append, append_entry};
pub use memory::WorkingMemory;

//! # Identifier Allocator
//!
//! Issues strictly increasing node identifiers for one store instance.

use crate::NodeId;

/// Monotonic `NodeId` source, owned exclusively by a `Graph`.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first issued id is `next`.
    #[must_use]
    pub(crate) fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Return the current counter value and advance it.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// The id the next call to `next_id` would return.
    #[must_use]
    pub fn peek(&self) -> NodeId {
        NodeId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_increments() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.next_id(), NodeId(0));
        assert_eq!(alloc.next_id(), NodeId(1));
        assert_eq!(alloc.next_id(), NodeId(2));
    }

    #[test]
    fn peek_does_not_advance() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.peek(), NodeId(0));
        assert_eq!(alloc.peek(), NodeId(0));
        assert_eq!(alloc.next_id(), NodeId(0));
        assert_eq!(alloc.peek(), NodeId(1));
    }

    #[test]
    fn resumes_from_given_value() {
        let mut alloc = IdAllocator::starting_at(10);
        assert_eq!(alloc.next_id(), NodeId(10));
    }
}

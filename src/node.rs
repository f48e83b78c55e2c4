// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

//! Position nodes.
//!
//! A node is an immutable point in a document's offset space. Annotations
//! hold their boundary nodes through `NodeRef` handles, so several
//! annotations can share one node instance. Two nodes at the same offset
//! are still distinct unless they are the same instance; use
//! `Arc::ptr_eq` (or `same_node`) to test for that.

use std::sync::Arc;

use crate::id::NodeId;

/// An offset into a document.
pub type Offset = i64;

/// A shared handle to a node.
pub type NodeRef = Arc<Node>;

/// A point in a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    id: NodeId,
    offset: Offset,
}

impl Node {
    /// Create a node with an explicit id.
    pub fn new(id: NodeId, offset: Offset) -> Node {
        return Node { id, offset };
    }

    /// Create a shared node with a freshly allocated id.
    pub fn at(offset: Offset) -> NodeRef {
        return Arc::new(Node::new(NodeId::next(), offset));
    }

    pub fn id(&self) -> NodeId {
        return self.id;
    }

    pub fn offset(&self) -> Offset {
        return self.offset;
    }
}

/// Check if two handles point at the same node instance.
#[inline]
pub fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
    return Arc::ptr_eq(a, b);
}

// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

//! Identifier types for nodes and annotations.
//!
//! Ids are plain integers wrapped in newtypes so node ids and annotation ids
//! cannot be mixed up. Fresh ids come from process-wide 64-bit counters, so
//! ids allocated through this module are unique within a process. Callers that
//! bring their own ids (e.g. from an external annotation source) may reuse
//! values; nothing in this crate requires uniqueness.

use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);
static NEXT_ANNOTATION_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies a position node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Allocate a fresh node id.
    pub fn next() -> NodeId {
        return NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed));
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "n{}", self.0);
    }
}

/// Identifies an annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnotationId(pub u64);

impl AnnotationId {
    /// Allocate a fresh annotation id.
    pub fn next() -> AnnotationId {
        return AnnotationId(NEXT_ANNOTATION_ID.fetch_add(1, Ordering::Relaxed));
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "a{}", self.0);
    }
}

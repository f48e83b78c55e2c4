// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

//! Incremental assembly of an `AnnotationSet`.
//!
//! The builder keeps one canonical node per start offset and one per end
//! offset. Every ingested annotation is rebuilt over the canonical nodes, so
//! two annotations in the finished set that start at the same offset share
//! the same start node instance (likewise for ends). The first node seen for
//! an offset becomes the canonical one.

use std::collections::hash_map::Entry;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::annotation::Annotation;
use crate::annotation::AnnotationRef;
use crate::error::Error;
use crate::error::Result;
use crate::node::NodeRef;
use crate::node::Offset;
use crate::set::AnnotationSet;

/// Accumulates annotations for a single document.
pub struct AnnotationSetBuilder<D> {
    document: Option<Arc<D>>,
    annotations: Vec<AnnotationRef>,
    start_nodes: FxHashMap<Offset, NodeRef>,
    end_nodes: FxHashMap<Offset, NodeRef>,
}

impl<D> Default for AnnotationSetBuilder<D> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<D> AnnotationSetBuilder<D> {
    pub fn new() -> AnnotationSetBuilder<D> {
        return AnnotationSetBuilder {
            document: None,
            annotations: Vec::new(),
            start_nodes: FxHashMap::default(),
            end_nodes: FxHashMap::default(),
        };
    }

    /// Anchor the set to a document. The last call wins.
    pub fn with_document(mut self, document: Arc<D>) -> Self {
        self.document = Some(document);
        return self;
    }

    /// Add an annotation, rebuilt over the canonical nodes for its offsets.
    pub fn add_annotation(mut self, annotation: &Annotation) -> Self {
        if annotation.start_offset() > annotation.end_offset() {
            tracing::warn!(
                id = %annotation.id(),
                start = annotation.start_offset(),
                end = annotation.end_offset(),
                "annotation ends before it starts"
            );
        }

        let start = canonical(&mut self.start_nodes, annotation.start());
        let end = canonical(&mut self.end_nodes, annotation.end());
        self.annotations.push(Arc::new(annotation.with_nodes(start, end)));
        return self;
    }

    /// Add annotations in iteration order.
    pub fn add_annotations<'a, I>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = &'a Annotation>,
    {
        for annotation in annotations {
            self = self.add_annotation(annotation);
        }
        return self;
    }

    /// Number of annotations added so far.
    pub fn len(&self) -> usize {
        return self.annotations.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.annotations.is_empty();
    }

    /// Finish the set. Fails if no document was given.
    pub fn build(self) -> Result<AnnotationSet<D>> {
        let document = self.document.ok_or(Error::MissingDocument)?;

        tracing::debug!(
            annotations = self.annotations.len(),
            start_nodes = self.start_nodes.len(),
            end_nodes = self.end_nodes.len(),
            "built annotation set"
        );

        return Ok(AnnotationSet::from_parts(document, self.annotations));
    }
}

/// Look up the canonical node for `node`'s offset, registering `node` itself
/// if the offset is new.
fn canonical(nodes: &mut FxHashMap<Offset, NodeRef>, node: &NodeRef) -> NodeRef {
    match nodes.entry(node.offset()) {
        Entry::Occupied(entry) => {
            tracing::trace!(offset = node.offset(), reused = %entry.get().id(), "reusing node");
            return entry.get().clone();
        }
        Entry::Vacant(entry) => {
            return entry.insert(node.clone()).clone();
        }
    }
}

// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

//! Immutable annotation sets and their queries.
//!
//! Every query is a single linear scan over the set with a predicate, in
//! insertion order. Multi-result queries return a new set over the same
//! document that shares annotation storage with this one; single results
//! come back as `Option`.
//!
//! # Interval conventions
//!
//! | Query | Keeps annotations where |
//! |-------|-------------------------|
//! | `overlapping(s, e)` | `start < e && end > s` (touching spans excluded) |
//! | `contained(s, e)` | `start >= s && end <= e` |
//! | `covering(t, s, e)` | `start <= s && end >= e` |
//! | `starting_from(o)` | `start == min { start >= o }` |

use std::fmt;
use std::iter::FusedIterator;
use std::slice;
use std::sync::Arc;

use marginalia_features::FeatureMap;
use rustc_hash::FxHashSet;

use crate::annotation::Annotation;
use crate::annotation::AnnotationRef;
use crate::builder::AnnotationSetBuilder;
use crate::id::AnnotationId;
use crate::node::Node;
use crate::node::NodeRef;
use crate::node::Offset;

/// An immutable collection of annotations over one document.
///
/// Cloning is cheap: the document and the annotations are shared.
pub struct AnnotationSet<D> {
    document: Arc<D>,
    annotations: Arc<[AnnotationRef]>,
}

impl<D> Clone for AnnotationSet<D> {
    fn clone(&self) -> Self {
        return AnnotationSet {
            document: self.document.clone(),
            annotations: self.annotations.clone(),
        };
    }
}

impl<D> fmt::Debug for AnnotationSet<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("AnnotationSet")
            .field("len", &self.len())
            .field("annotations", &self.annotations)
            .finish();
    }
}

#[inline]
fn overlaps(annotation: &Annotation, start: Offset, end: Offset) -> bool {
    return annotation.start_offset() < end && annotation.end_offset() > start;
}

impl<D> AnnotationSet<D> {
    /// Start building a set.
    pub fn builder() -> AnnotationSetBuilder<D> {
        return AnnotationSetBuilder::new();
    }

    pub(crate) fn from_parts(document: Arc<D>, annotations: Vec<AnnotationRef>) -> AnnotationSet<D> {
        return AnnotationSet {
            document,
            annotations: annotations.into(),
        };
    }

    /// The document this set is anchored to, as given to the builder.
    pub fn document(&self) -> &Arc<D> {
        return &self.document;
    }

    /// A set over the same document holding `annotations`.
    fn subset(&self, annotations: Vec<AnnotationRef>) -> AnnotationSet<D> {
        return AnnotationSet::from_parts(self.document.clone(), annotations);
    }

    /// A set of the annotations matching `keep`, in insertion order.
    fn select(&self, keep: impl Fn(&Annotation) -> bool) -> AnnotationSet<D> {
        let annotations = self
            .annotations
            .iter()
            .filter(|a| keep(a))
            .cloned()
            .collect();
        return self.subset(annotations);
    }

    /// The annotations sharing the smallest start offset that is at least
    /// `min_start`. Empty if no annotation starts at or after `min_start`.
    fn cohort(&self, min_start: Offset) -> Vec<AnnotationRef> {
        let first = self
            .iter()
            .map(Annotation::start_offset)
            .filter(|&offset| offset >= min_start)
            .min();

        let Some(first) = first else {
            return Vec::new();
        };

        return self
            .annotations
            .iter()
            .filter(|a| a.start_offset() == first)
            .cloned()
            .collect();
    }

    // -------------------------------------------------------------------------
    // Type and feature queries
    // -------------------------------------------------------------------------

    /// Annotations of type `kind` whose features subsume `constraints`.
    pub fn by_type_and_features(&self, kind: &str, constraints: &FeatureMap) -> AnnotationSet<D> {
        return self.select(|a| a.kind() == kind && a.features().subsumes(constraints));
    }

    /// Annotations of type `kind` that have every one of `keys`, whatever
    /// their values.
    pub fn by_type_with_keys<K: AsRef<str>>(&self, kind: &str, keys: &[K]) -> AnnotationSet<D> {
        return self.select(|a| a.kind() == kind && a.features().contains_keys(keys));
    }

    /// Like `by_type_and_features`, restricted to the annotations starting at
    /// the first start offset at or after `min_start`.
    ///
    /// The restriction happens first: if the first such annotations do not
    /// match, the result is empty even when later ones would.
    pub fn by_type_and_features_from(
        &self,
        kind: &str,
        constraints: &FeatureMap,
        min_start: Offset,
    ) -> AnnotationSet<D> {
        let annotations = self
            .cohort(min_start)
            .into_iter()
            .filter(|a| a.kind() == kind && a.features().subsumes(constraints))
            .collect();
        return self.subset(annotations);
    }

    /// Annotations of type `kind`.
    pub fn by_type(&self, kind: &str) -> AnnotationSet<D> {
        return self.by_types(&[kind]);
    }

    /// Annotations whose type is any of `kinds`.
    pub fn by_types<S: AsRef<str>>(&self, kinds: &[S]) -> AnnotationSet<D> {
        let kinds: FxHashSet<&str> = kinds.iter().map(AsRef::as_ref).collect();
        return self.select(|a| kinds.contains(a.kind()));
    }

    /// The first annotation, in insertion order, with the given id.
    pub fn by_id(&self, id: AnnotationId) -> Option<&Annotation> {
        return self.iter().find(|a| a.id() == id);
    }

    /// This set itself.
    pub fn all(&self) -> &AnnotationSet<D> {
        return self;
    }

    /// The distinct types present in the set.
    pub fn all_types(&self) -> FxHashSet<&str> {
        return self.iter().map(Annotation::kind).collect();
    }

    // -------------------------------------------------------------------------
    // Positional queries
    // -------------------------------------------------------------------------

    /// All annotations starting at the first start offset at or after
    /// `min_start`.
    pub fn starting_from(&self, min_start: Offset) -> AnnotationSet<D> {
        return self.subset(self.cohort(min_start));
    }

    /// Annotations overlapping the half-open range `[start, end)`.
    pub fn overlapping(&self, start: Offset, end: Offset) -> AnnotationSet<D> {
        return self.select(|a| overlaps(a, start, end));
    }

    /// Annotations of type `kind` overlapping `[start, end)`.
    pub fn overlapping_type(&self, kind: &str, start: Offset, end: Offset) -> AnnotationSet<D> {
        return self.select(|a| a.kind() == kind && overlaps(a, start, end));
    }

    /// Annotations of type `kind` that span all of `[start, end]`.
    pub fn covering(&self, kind: &str, start: Offset, end: Offset) -> AnnotationSet<D> {
        return self.select(|a| {
            a.kind() == kind && a.start_offset() <= start && a.end_offset() >= end
        });
    }

    /// Annotations lying entirely within `[start, end]`.
    pub fn contained(&self, start: Offset, end: Offset) -> AnnotationSet<D> {
        return self.select(|a| a.start_offset() >= start && a.end_offset() <= end);
    }

    /// All annotations sorted by start offset. Ties keep insertion order.
    pub fn in_document_order(&self) -> Vec<&Annotation> {
        let mut ordered: Vec<&Annotation> = self.iter().collect();
        ordered.sort_by_key(|a| a.start_offset());
        return ordered;
    }

    // -------------------------------------------------------------------------
    // Node navigation
    // -------------------------------------------------------------------------

    /// The start node of the annotation with the smallest start offset.
    pub fn first_node(&self) -> Option<&NodeRef> {
        return self
            .iter()
            .reduce(|best, a| if a.start_offset() < best.start_offset() { a } else { best })
            .map(Annotation::start);
    }

    /// The start node of the annotation with the largest start offset.
    ///
    /// This is a start node, not the end node of the annotation that ends
    /// last; for annotations of different lengths the two differ.
    pub fn last_node(&self) -> Option<&NodeRef> {
        return self
            .iter()
            .reduce(|best, a| if a.start_offset() > best.start_offset() { a } else { best })
            .map(Annotation::start);
    }

    /// The start node of the first annotation, in document order, that
    /// starts strictly after `node`.
    pub fn next_node(&self, node: &Node) -> Option<&NodeRef> {
        return self
            .in_document_order()
            .into_iter()
            .find(|a| a.start_offset() > node.offset())
            .map(Annotation::start);
    }

    // -------------------------------------------------------------------------
    // Size and iteration
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        return self.annotations.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.annotations.is_empty();
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        return Iter {
            inner: self.annotations.iter(),
        };
    }
}

impl<'a, D> IntoIterator for &'a AnnotationSet<D> {
    type Item = &'a Annotation;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

/// Iterator over the annotations of a set, in insertion order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, AnnotationRef>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Annotation;

    fn next(&mut self) -> Option<Self::Item> {
        return self.inner.next().map(|a| a.as_ref());
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.inner.size_hint();
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        return self.inner.next_back().map(|a| a.as_ref());
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

//! Annotations: typed, featured spans between two nodes.
//!
//! Equality and hashing are by value: type, start offset, end offset and
//! features. The id and the node instances do not take part, so two
//! annotations built separately over the same span compare equal. Use
//! `is_identical` when the distinction matters.

use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

use marginalia_features::FeatureMap;
use marginalia_features::Value;

use crate::error::Error;
use crate::error::Result;
use crate::id::AnnotationId;
use crate::node::same_node;
use crate::node::Node;
use crate::node::NodeRef;
use crate::node::Offset;

/// Feature key under which `AnnotationBuilder` stores the instance value.
pub const INSTANCE: &str = "inst";

/// A labeled span over a document.
#[derive(Clone, Debug)]
pub struct Annotation {
    id: AnnotationId,
    start: NodeRef,
    end: NodeRef,
    kind: String,
    features: FeatureMap,
}

impl Annotation {
    /// Create an annotation from existing nodes.
    ///
    /// `start.offset() <= end.offset()` is expected but not checked.
    pub fn new(
        id: AnnotationId,
        start: NodeRef,
        end: NodeRef,
        kind: impl Into<String>,
        features: FeatureMap,
    ) -> Annotation {
        return Annotation {
            id,
            start,
            end,
            kind: kind.into(),
            features,
        };
    }

    /// Start building an annotation from offsets.
    pub fn builder() -> AnnotationBuilder {
        return AnnotationBuilder::default();
    }

    pub fn id(&self) -> AnnotationId {
        return self.id;
    }

    pub fn start(&self) -> &NodeRef {
        return &self.start;
    }

    pub fn end(&self) -> &NodeRef {
        return &self.end;
    }

    /// The annotation type.
    pub fn kind(&self) -> &str {
        return &self.kind;
    }

    pub fn features(&self) -> &FeatureMap {
        return &self.features;
    }

    #[inline]
    pub fn start_offset(&self) -> Offset {
        return self.start.offset();
    }

    #[inline]
    pub fn end_offset(&self) -> Offset {
        return self.end.offset();
    }

    /// Check if this and `other` are the same annotation rather than equal
    /// ones: same id and the same node instances.
    pub fn is_identical(&self, other: &Annotation) -> bool {
        return self.id == other.id
            && same_node(&self.start, &other.start)
            && same_node(&self.end, &other.end);
    }

    /// Rebuild this annotation over different nodes, keeping everything else.
    pub(crate) fn with_nodes(&self, start: NodeRef, end: NodeRef) -> Annotation {
        return Annotation {
            id: self.id,
            start,
            end,
            kind: self.kind.clone(),
            features: self.features.clone(),
        };
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        return self.start_offset() == other.start_offset()
            && self.end_offset() == other.end_offset()
            && self.kind == other.kind
            && self.features == other.features;
    }
}

impl Eq for Annotation {}

impl Hash for Annotation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.start_offset().hash(state);
        self.end_offset().hash(state);
        self.features.hash(state);
    }
}

/// Incremental construction of an `Annotation` from offsets.
///
/// Each `build` allocates a fresh annotation id and two fresh nodes. The
/// instance value is always written under `INSTANCE`, as `Value::Null` if
/// none was given.
#[derive(Clone, Debug, Default)]
pub struct AnnotationBuilder {
    instance: Option<String>,
    kind: Option<String>,
    start: Option<Offset>,
    end: Option<Offset>,
    features: FeatureMap,
}

impl AnnotationBuilder {
    /// Set the instance value.
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        return self;
    }

    /// Set the annotation type.
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        return self;
    }

    /// Set the start and end offsets.
    pub fn with_offsets(mut self, start: Offset, end: Offset) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        return self;
    }

    /// Add a feature, replacing any earlier value for the key.
    pub fn with_feature(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.features.insert(key, value);
        return self;
    }

    /// Copy offsets, type, instance and features from an existing annotation.
    ///
    /// Features set earlier on this builder are discarded.
    pub fn value_of(mut self, annotation: &Annotation) -> Self {
        self.start = Some(annotation.start_offset());
        self.end = Some(annotation.end_offset());
        self.kind = Some(annotation.kind.clone());
        self.instance = annotation
            .features
            .get(INSTANCE)
            .and_then(Value::as_str)
            .map(str::to_string);
        self.features.clear();
        self.features.extend_from(&annotation.features);
        return self;
    }

    pub fn build(self) -> Result<Annotation> {
        let kind = self.kind.ok_or(Error::MissingType)?;
        let start = self.start.ok_or(Error::MissingOffsets)?;
        let end = self.end.ok_or(Error::MissingOffsets)?;

        let mut features = self.features;
        if self.instance.is_some() || !features.contains_key(INSTANCE) {
            features.insert(INSTANCE, self.instance);
        }

        return Ok(Annotation::new(
            AnnotationId::next(),
            Node::at(start),
            Node::at(end),
            kind,
            features,
        ));
    }
}

/// A shared handle to an annotation, as held by sets.
pub(crate) type AnnotationRef = Arc<Annotation>;

// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

//! Marginalia - immutable annotation sets with positional queries.
//!
//! An annotation is a typed span between two position nodes, carrying a
//! feature map. Annotations are collected into an `AnnotationSet` anchored to
//! a document, which answers queries by type, by features, and by position
//! (overlap, containment, covering, document order, node navigation).
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use marginalia::{Annotation, AnnotationSet, FeatureMap};
//!
//! let person = Annotation::builder()
//!     .with_type("Person")
//!     .with_offsets(0, 5)
//!     .with_feature("gender", "f")
//!     .build()?;
//! let place = Annotation::builder()
//!     .with_type("Location")
//!     .with_offsets(15, 21)
//!     .build()?;
//!
//! let set = AnnotationSet::builder()
//!     .with_document(Arc::new("Alice lives in Lisbon"))
//!     .add_annotations([&person, &place])
//!     .build()?;
//!
//! assert_eq!(set.overlapping(3, 16).len(), 2);
//! assert_eq!(set.contained(10, 30).len(), 1);
//!
//! let constraints: FeatureMap = [("gender", "f")].into_iter().collect();
//! assert_eq!(set.by_type_and_features("Person", &constraints).len(), 1);
//! # Ok::<(), marginalia::Error>(())
//! ```
//!
//! # Node sharing
//!
//! The set builder keeps one node per distinct start offset and one per
//! distinct end offset, so annotations starting at the same offset share a
//! start node instance. Compare node handles with `same_node` to test for
//! "same position" without looking at offsets.

pub mod annotation;
pub mod builder;
pub mod error;
pub mod id;
pub mod node;
pub mod set;

pub use annotation::Annotation;
pub use annotation::AnnotationBuilder;
pub use annotation::INSTANCE;
pub use builder::AnnotationSetBuilder;
pub use error::Error;
pub use error::Result;
pub use id::AnnotationId;
pub use id::NodeId;
pub use marginalia_features::FeatureMap;
pub use marginalia_features::Value;
pub use node::same_node;
pub use node::Node;
pub use node::NodeRef;
pub use node::Offset;
pub use set::AnnotationSet;

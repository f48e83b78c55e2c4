// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

//! Property-based tests for annotation set queries.
//!
//! Each query is checked against a direct model over the list of
//! annotations that went into the builder.

use std::sync::Arc;

use proptest::prelude::*;

use marginalia::same_node;
use marginalia::Annotation;
use marginalia::AnnotationSet;
use marginalia::FeatureMap;
use marginalia::Offset;

// =============================================================================
// Test helpers
// =============================================================================

const KINDS: [&str; 3] = ["Token", "Person", "Sentence"];

/// A span description: kind index, start, length, optional feature value.
#[derive(Clone, Debug)]
struct SpanSpec {
    kind: usize,
    start: Offset,
    len: Offset,
    tag: Option<i64>,
}

fn arbitrary_span() -> impl Strategy<Value = SpanSpec> {
    (0..KINDS.len(), 0..60 as Offset, 0..15 as Offset, prop::option::of(0i64..3))
        .prop_map(|(kind, start, len, tag)| SpanSpec { kind, start, len, tag })
}

fn materialize(specs: &[SpanSpec]) -> Vec<Annotation> {
    return specs
        .iter()
        .map(|spec| {
            let mut builder = Annotation::builder()
                .with_type(KINDS[spec.kind])
                .with_offsets(spec.start, spec.start + spec.len);
            if let Some(tag) = spec.tag {
                builder = builder.with_feature("tag", tag);
            }
            builder.build().unwrap()
        })
        .collect();
}

fn build(annotations: &[Annotation]) -> AnnotationSet<()> {
    return AnnotationSet::builder()
        .with_document(Arc::new(()))
        .add_annotations(annotations)
        .build()
        .unwrap();
}

/// Ids of a query result, in iteration order.
fn ids(set: &AnnotationSet<()>) -> Vec<u64> {
    return set.iter().map(|a| a.id().0).collect();
}

/// Ids of the model annotations matching `keep`, in input order.
fn model_ids(annotations: &[Annotation], keep: impl Fn(&Annotation) -> bool) -> Vec<u64> {
    return annotations.iter().filter(|a| keep(a)).map(|a| a.id().0).collect();
}

fn spans() -> impl Strategy<Value = Vec<SpanSpec>> {
    return prop::collection::vec(arbitrary_span(), 0..40);
}

// =============================================================================
// Builder properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Equal start offsets share one node instance, and so do equal ends.
    #[test]
    fn nodes_are_deduplicated_by_offset(specs in spans()) {
        let set = build(&materialize(&specs));
        let all: Vec<&Annotation> = set.iter().collect();

        for a in &all {
            for b in &all {
                prop_assert_eq!(
                    same_node(a.start(), b.start()),
                    a.start_offset() == b.start_offset()
                );
                prop_assert_eq!(
                    same_node(a.end(), b.end()),
                    a.end_offset() == b.end_offset()
                );
            }
        }
    }

    /// Building keeps every annotation, equal by value, in insertion order.
    #[test]
    fn build_preserves_annotations(specs in spans()) {
        let annotations = materialize(&specs);
        let set = build(&annotations);

        prop_assert_eq!(set.len(), annotations.len());
        for (stored, original) in set.iter().zip(&annotations) {
            prop_assert_eq!(stored, original);
            prop_assert_eq!(stored.id(), original.id());
        }
    }
}

// =============================================================================
// Query properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn overlapping_matches_model(specs in spans(), start in 0..80 as Offset, len in 0..30 as Offset) {
        let annotations = materialize(&specs);
        let set = build(&annotations);
        let end = start + len;

        prop_assert_eq!(
            ids(&set.overlapping(start, end)),
            model_ids(&annotations, |a| a.start_offset() < end && a.end_offset() > start)
        );
        prop_assert_eq!(
            ids(&set.overlapping_type("Person", start, end)),
            model_ids(&annotations, |a| {
                a.kind() == "Person" && a.start_offset() < end && a.end_offset() > start
            })
        );
    }

    #[test]
    fn contained_and_covering_match_model(specs in spans(), start in 0..80 as Offset, len in 0..30 as Offset) {
        let annotations = materialize(&specs);
        let set = build(&annotations);
        let end = start + len;

        prop_assert_eq!(
            ids(&set.contained(start, end)),
            model_ids(&annotations, |a| a.start_offset() >= start && a.end_offset() <= end)
        );
        prop_assert_eq!(
            ids(&set.covering("Sentence", start, end)),
            model_ids(&annotations, |a| {
                a.kind() == "Sentence" && a.start_offset() <= start && a.end_offset() >= end
            })
        );
    }

    /// The cohort is non-empty iff something starts at or after the
    /// threshold, and all its members share the smallest such start.
    #[test]
    fn starting_from_is_a_cohort(specs in spans(), threshold in 0..80 as Offset) {
        let annotations = materialize(&specs);
        let set = build(&annotations);
        let first = annotations
            .iter()
            .map(Annotation::start_offset)
            .filter(|&o| o >= threshold)
            .min();

        let cohort = set.starting_from(threshold);
        match first {
            None => {
                prop_assert!(cohort.is_empty());
            }
            Some(first) => {
                prop_assert_eq!(
                    ids(&cohort),
                    model_ids(&annotations, |a| a.start_offset() == first)
                );
            }
        }
    }

    /// The feature query restricted to a cohort never escapes the cohort.
    #[test]
    fn feature_query_from_offset_is_within_cohort(specs in spans(), threshold in 0..80 as Offset, tag in 0i64..3) {
        let annotations = materialize(&specs);
        let set = build(&annotations);
        let constraints: FeatureMap = [("tag", tag)].into_iter().collect();

        let cohort = ids(&set.starting_from(threshold));
        let result = set.by_type_and_features_from("Token", &constraints, threshold);
        for annotation in &result {
            prop_assert!(cohort.contains(&annotation.id().0));
            prop_assert_eq!(annotation.kind(), "Token");
            prop_assert!(annotation.features().subsumes(&constraints));
        }
    }

    #[test]
    fn type_queries_match_model(specs in spans(), tag in 0i64..3) {
        let annotations = materialize(&specs);
        let set = build(&annotations);
        let constraints: FeatureMap = [("tag", tag)].into_iter().collect();

        prop_assert_eq!(
            ids(&set.by_type_and_features("Token", &constraints)),
            model_ids(&annotations, |a| {
                a.kind() == "Token" && a.features().subsumes(&constraints)
            })
        );
        prop_assert_eq!(
            ids(&set.by_type_with_keys("Token", &["tag"])),
            model_ids(&annotations, |a| a.kind() == "Token" && a.features().contains_key("tag"))
        );
        prop_assert_eq!(
            ids(&set.by_types(&["Token", "Sentence"])),
            model_ids(&annotations, |a| a.kind() != "Person")
        );
        prop_assert_eq!(set.all_types().len(), {
            let mut kinds: Vec<&str> = annotations.iter().map(Annotation::kind).collect();
            kinds.sort();
            kinds.dedup();
            kinds.len()
        });
    }

    /// Document order is sorted by start and stable among equal starts.
    #[test]
    fn document_order_is_sorted_and_stable(specs in spans()) {
        let annotations = materialize(&specs);
        let set = build(&annotations);
        let ordered = set.in_document_order();

        prop_assert_eq!(ordered.len(), annotations.len());
        for pair in ordered.windows(2) {
            prop_assert!(pair[0].start_offset() <= pair[1].start_offset());
            if pair[0].start_offset() == pair[1].start_offset() {
                let i = annotations.iter().position(|a| a.id() == pair[0].id()).unwrap();
                let j = annotations.iter().position(|a| a.id() == pair[1].id()).unwrap();
                prop_assert!(i < j);
            }
        }
    }

    /// Walking next_node from first_node visits every distinct start offset
    /// once, ascending, and ends at last_node.
    #[test]
    fn node_walk_visits_each_start_offset(specs in spans()) {
        let annotations = materialize(&specs);
        let set = build(&annotations);

        let mut expected: Vec<Offset> = annotations.iter().map(Annotation::start_offset).collect();
        expected.sort();
        expected.dedup();

        let mut visited = Vec::new();
        let mut node = set.first_node();
        while let Some(current) = node {
            visited.push(current.offset());
            node = set.next_node(current);
        }

        prop_assert_eq!(&visited, &expected);
        prop_assert_eq!(set.last_node().map(|n| n.offset()), expected.last().copied());
    }
}

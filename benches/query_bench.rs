// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

// Benchmarks for annotation set construction and queries
//
// Sets are generated from a seeded RNG so runs are comparable:
// - build: builder ingestion with node deduplication
// - overlap / contained / covering: positional scans
// - features: type + feature subsumption scan
// - document_order: sort by start offset
// - node_walk: first_node + repeated next_node

use std::sync::Arc;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use marginalia::{Annotation, AnnotationSet, FeatureMap};

const KINDS: [&str; 4] = ["Token", "Person", "Location", "Sentence"];

fn random_annotations(count: usize, seed: u64) -> Vec<Annotation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let doc_len = (count as i64) * 8;
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..doc_len);
            let len = rng.gen_range(1..40);
            Annotation::builder()
                .with_type(KINDS[rng.gen_range(0..KINDS.len())])
                .with_offsets(start, start + len)
                .with_feature("tag", rng.gen_range(0i64..4))
                .build()
                .unwrap()
        })
        .collect()
}

fn build(annotations: &[Annotation]) -> AnnotationSet<()> {
    AnnotationSet::builder()
        .with_document(Arc::new(()))
        .add_annotations(annotations)
        .build()
        .unwrap()
}

// =============================================================================
// Construction
// =============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1000, 10000] {
        let annotations = random_annotations(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &annotations, |b, annotations| {
            b.iter(|| black_box(build(annotations).len()));
        });
    }

    group.finish();
}

// =============================================================================
// Queries
// =============================================================================

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for size in [100, 1000, 10000] {
        let set = build(&random_annotations(size, 7));
        let mid = (size as i64) * 4;
        let constraints: FeatureMap = [("tag", 2i64)].into_iter().collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("overlap", size), &set, |b, set| {
            b.iter(|| black_box(set.overlapping(mid, mid + 100).len()));
        });

        group.bench_with_input(BenchmarkId::new("contained", size), &set, |b, set| {
            b.iter(|| black_box(set.contained(mid, mid + 100).len()));
        });

        group.bench_with_input(BenchmarkId::new("covering", size), &set, |b, set| {
            b.iter(|| black_box(set.covering("Sentence", mid, mid + 5).len()));
        });

        group.bench_with_input(BenchmarkId::new("features", size), &set, |b, set| {
            b.iter(|| black_box(set.by_type_and_features("Token", &constraints).len()));
        });

        group.bench_with_input(BenchmarkId::new("starting_from", size), &set, |b, set| {
            b.iter(|| black_box(set.starting_from(mid).len()));
        });

        group.bench_with_input(BenchmarkId::new("document_order", size), &set, |b, set| {
            b.iter(|| black_box(set.in_document_order().len()));
        });
    }

    group.finish();
}

fn bench_node_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_walk");

    for size in [100, 1000] {
        let set = build(&random_annotations(size, 11));
        group.bench_with_input(BenchmarkId::from_parameter(size), &set, |b, set| {
            b.iter(|| {
                let mut steps = 0;
                let mut node = set.first_node();
                while let Some(current) = node {
                    steps += 1;
                    node = set.next_node(current);
                }
                black_box(steps)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_queries,
    bench_node_walk,
);
criterion_main!(benches);

// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

// Walks a small annotated sentence through the query surface.
//
// RUST_LOG=marginalia=trace cargo run --features cli

use std::sync::Arc;

use marginalia::Annotation;
use marginalia::AnnotationSet;
use marginalia::FeatureMap;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

struct Document {
    text: String,
}

impl Document {
    fn slice(&self, annotation: &Annotation) -> &str {
        let start = annotation.start_offset().max(0) as usize;
        let end = (annotation.end_offset().max(0) as usize).min(self.text.len());
        return self.text.get(start..end).unwrap_or("");
    }
}

fn show(label: &str, set: &AnnotationSet<Document>) {
    let doc = set.document();
    println!("{} ({}):", label, set.len());
    for annotation in set {
        println!(
            "  {:>3}..{:<3} {:<10} {:?}",
            annotation.start_offset(),
            annotation.end_offset(),
            annotation.kind(),
            doc.slice(annotation),
        );
    }
}

fn main() -> marginalia::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "marginalia=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let document = Arc::new(Document {
        text: "Ada Lovelace met Charles Babbage in London in 1833.".to_string(),
    });

    let spans = [
        ("Person", 0, 12, Some("f")),
        ("Token", 0, 3, None),
        ("Token", 4, 12, None),
        ("Person", 17, 32, Some("m")),
        ("Location", 36, 42, None),
        ("Date", 46, 50, None),
        ("Sentence", 0, 51, None),
    ];

    let mut annotations = Vec::new();
    for (kind, start, end, gender) in spans {
        let mut builder = Annotation::builder().with_type(kind).with_offsets(start, end);
        if let Some(gender) = gender {
            builder = builder.with_feature("gender", gender);
        }
        annotations.push(builder.build()?);
    }

    let set = AnnotationSet::builder()
        .with_document(document)
        .add_annotations(&annotations)
        .build()?;

    let mut types: Vec<&str> = set.all_types().into_iter().collect();
    types.sort();
    println!("types: {:?}", types);

    let women: FeatureMap = [("gender", "f")].into_iter().collect();
    show("women", &set.by_type_and_features("Person", &women));
    show("overlapping 10..20", &set.overlapping(10, 20));
    show("contained in 0..12", &set.contained(0, 12));
    show("covering 36..42", &set.covering("Sentence", 36, 42));
    show("starting from 13", &set.starting_from(13));

    let mut node = set.first_node().cloned();
    print!("start nodes:");
    while let Some(current) = node {
        print!(" {}@{}", current.id(), current.offset());
        node = set.next_node(&current).cloned();
    }
    println!();

    return Ok(());
}

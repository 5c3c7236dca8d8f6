use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mx_compressor::assemble;
use mx_core::{field_map, FieldDefinition, SortOrder, TypeDefinition};
use mx_parser::parse_tree;

fn labels_type() -> TypeDefinition {
    TypeDefinition::new(
        "CustomLabels",
        field_map([FieldDefinition::array(
            "labels",
            field_map([
                FieldDefinition::scalar("fullName"),
                FieldDefinition::scalar("language"),
                FieldDefinition::boolean("protected"),
                FieldDefinition::scalar("shortDescription"),
                FieldDefinition::scalar("value"),
            ]),
        )
        .sorted_by(["fullName"])]),
    )
}

fn generate_document(entries: usize) -> String {
    let mut doc = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<CustomLabels xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n",
    );
    for i in (0..entries).rev() {
        doc.push_str(&format!(
            "    <labels>\n        <fullName>Label_{i}</fullName>\n        <language>en_US</language>\n        <protected>false</protected>\n        <value>Value number {i}</value>\n    </labels>\n"
        ));
    }
    doc.push_str("</CustomLabels>");
    doc
}

fn bench_assemble(c: &mut Criterion) {
    let td = labels_type();
    for entries in [10, 100, 1000] {
        let doc = generate_document(entries);
        let tree = parse_tree(&doc, true).unwrap();
        let root = tree.child("CustomLabels").unwrap();
        c.bench_function(&format!("assemble_labels_{entries}"), |b| {
            b.iter(|| {
                black_box(
                    assemble("CustomLabels", black_box(root), &td, SortOrder::AlphabetAsc)
                        .unwrap(),
                )
            })
        });
    }
}

fn bench_parse(c: &mut Criterion) {
    let doc = generate_document(100);
    c.bench_function("parse_labels_100", |b| {
        b.iter(|| black_box(parse_tree(black_box(&doc), true).unwrap()))
    });
}

criterion_group!(benches, bench_assemble, bench_parse);
criterion_main!(benches);

use amanita::impurity::{entropy, information_gain};
use amanita::synthesis::{boolean, predicate};
use amanita::{Dataset, Record, Schema, Tree};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Synthetic categorical dataset: `n` records over five attributes
/// with small value vocabularies, labelled by a rule over the first
/// two attributes so the tree has real structure to find.
fn synthetic_dataset(n: usize) -> Dataset {
    let schema = Schema::new(
        ["odor", "cap-shape", "cap-color", "gill-size", "habitat"]
            .iter()
            .map(|a| a.to_string())
            .collect(),
    );
    let vocab = [
        vec!["Almond", "Anise", "Pungent", "Foul", "None"],
        vec!["Convex", "Bell", "Flat"],
        vec!["Brown", "Yellow", "White", "Gray"],
        vec!["Broad", "Narrow"],
        vec!["Woods", "Grasses", "Urban"],
    ];
    let records = (0..n)
        .map(|i| {
            let values: Vec<String> = vocab
                .iter()
                .enumerate()
                .map(|(a, v)| v[(i * (a + 7)) % v.len()].to_string())
                .collect();
            let positive = values[0] == "Almond" || (values[0] == "None" && values[1] != "Flat");
            Record::new(values, positive)
        })
        .collect();
    Dataset::new(schema, records).unwrap()
}

pub fn tree_benchmarks(c: &mut Criterion) {
    let data = synthetic_dataset(10_000);
    let idx = data.full_index();

    c.bench_function("entropy 10k", |b| b.iter(|| entropy(black_box(&data), black_box(&idx))));
    c.bench_function("information gain 10k", |b| {
        b.iter(|| information_gain(black_box(&data), black_box(&idx), black_box(0)))
    });
    c.bench_function("fit 10k", |b| b.iter(|| Tree::fit(black_box(&data))));

    let tree = Tree::fit(&data).unwrap();
    c.bench_function("predict 10k", |b| {
        b.iter(|| {
            for record in data.records() {
                black_box(tree.predict(record).unwrap());
            }
        })
    });
    c.bench_function("boolean synthesis", |b| {
        b.iter(|| boolean::synthesize(black_box(&tree)).render(&tree.schema))
    });
    c.bench_function("predicate synthesis", |b| {
        b.iter(|| predicate::synthesize(black_box(&tree)).render(&tree.schema))
    });
}

criterion_group!(benches, tree_benchmarks);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use balanced_tree::{BalancedTree, Traversal};

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("tree_insert", |b| {
        b.iter(|| {
            let mut tree = BalancedTree::new();
            for value in &values {
                tree.insert(*value);
            }
            tree
        })
    });

    let mut tree = BalancedTree::new();
    for value in &values {
        tree.insert(*value);
    }

    c.bench_function("tree_get", |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.get(value));
            }
        })
    });

    c.bench_function("tree_iter", |b| {
        b.iter(|| {
            for value in &tree {
                black_box(value);
            }
        })
    });

    c.bench_function("tree_traverse_level_order", |b| {
        b.iter(|| {
            for value in tree.traverse(Traversal::LevelOrder) {
                black_box(value);
            }
        })
    });

    c.bench_function("tree_remove", |b| {
        let mut tree = tree.clone();
        b.iter(|| {
            for value in &values {
                tree.remove(value);
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);

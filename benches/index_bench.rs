//! Benchmarks for the ordered index

use catalogo::OrderedIndex;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Deterministic pseudo-random permutation of 0..n, enough to keep the
/// tree from degenerating into a spine
fn shuffled_codes(n: i64) -> Vec<i64> {
    let mut codes: Vec<i64> = (0..n).collect();
    let mut state: u64 = 0x9E3779B97F4A7C15;
    for i in (1..codes.len()).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = (state % (i as u64 + 1)) as usize;
        codes.swap(i, j);
    }
    codes
}

fn index_benchmarks(c: &mut Criterion) {
    let codes = shuffled_codes(10_000);

    c.bench_function("insert_10k_shuffled", |b| {
        b.iter(|| {
            let mut index = OrderedIndex::new();
            for &code in &codes {
                index.insert(black_box(code), "Produto", 1.0);
            }
            index
        })
    });

    let mut index = OrderedIndex::new();
    for &code in &codes {
        index.insert(code, "Produto", 1.0);
    }

    c.bench_function("search_hit", |b| {
        b.iter(|| index.search(black_box(codes[codes.len() / 2])))
    });

    c.bench_function("search_miss", |b| b.iter(|| index.search(black_box(-1))));

    c.bench_function("inorder_10k", |b| b.iter(|| index.inorder()));
}

criterion_group!(benches, index_benchmarks);
criterion_main!(benches);

//! Rope edit benchmarks: random inserts and deletes against a growing rope.

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rope::{Rope, append, delete_range, insert, rebalance};

/// A single patch: (position, delete_count, insert_content)
#[derive(Debug, Clone)]
struct Patch(usize, usize, String);

/// Generates a reproducible edit trace that keeps the document non-empty.
fn random_trace(len: usize, seed: u64) -> Vec<Patch> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut doc_len = 0usize;
    let mut patches = Vec::with_capacity(len);

    for _ in 0..len {
        let pos = rng.gen_range(0..=doc_len);
        let del = if doc_len > pos && rng.gen_bool(0.3) {
            rng.gen_range(0..=(doc_len - pos).min(8))
        } else {
            0
        };
        let ins: String = (0..rng.gen_range(1..6))
            .map(|_| rng.gen_range(b'a'..=b'z') as char)
            .collect();
        doc_len = doc_len - del + ins.len();
        patches.push(Patch(pos, del, ins));
    }

    patches
}

/// Replays a trace, returning the final length.
fn replay(trace: &[Patch]) -> usize {
    let mut rope = Rope::default();
    for Patch(pos, del, ins) in trace {
        if *del > 0 {
            rope = delete_range(rope, *pos, pos + del).expect("trace stays in bounds");
        }
        rope = insert(rope, ins.as_str(), *pos).expect("trace stays in bounds");
    }
    rope.total_size()
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    for len in [1_000, 10_000] {
        let trace = random_trace(len, 42);
        group.bench_with_input(BenchmarkId::from_parameter(len), &trace, |b, trace| {
            b.iter(|| replay(black_box(trace)))
        });
    }
    group.finish();
}

fn bench_char_at(c: &mut Criterion) {
    let rope = (0..10_000).fold(Rope::default(), |rope, i| append(rope, format!("{:05}", i)));
    let len = rope.total_size();
    c.bench_function("char_at", |b| {
        let mut pos = 0;
        b.iter(|| {
            pos = (pos + 7919) % len;
            black_box(rope.char_at(pos))
        })
    });
}

fn bench_rebalance(c: &mut Criterion) {
    let chain = (0..2_000).fold(Rope::new("x"), |rope, i| {
        Rope::branch(None, i.to_string(), Some(rope))
    });
    c.bench_function("rebalance_chain", |b| {
        b.iter(|| rebalance(black_box(chain.clone())))
    });
}

criterion_group!(benches, bench_replay, bench_char_at, bench_rebalance);
criterion_main!(benches);

//! Directory performance benchmarks
//!
//! Run with: cargo bench --bench directory_ops
//!
//! Benchmarks are labeled by operation and directory size:
//! - insert/bulk: indexing throughput over parsed contacts
//! - fetch/hot_query: ranked lookup of a word shared by many contacts
//! - fetch/miss_query: lookup of a word indexed nowhere
//! - delete/top_ranked: deletion including the ranked fetch it performs

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rolodex::{ContactHandle, ContactRecord, Directory};

// ============================================================================
// Constants and Utilities
// ============================================================================

/// Fixed seed for reproducible benchmarks
const BENCH_SEED: u64 = 0x1262_0FF1_CE00_D1A5;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Grace", "Alan", "Ada", "Linus", "Barbara", "Dennis", "Margaret", "Ken",
];

const LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Hopper", "Turing", "Lovelace", "Ritchie", "Liskov", "Thompson", "Hamilton",
    "Kernighan",
];

/// Pre-generate contacts the way the parsing collaborator delivers them.
fn pregenerate_contacts(count: usize) -> Vec<ContactHandle> {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            ContactRecord::handle(
                format!("{} {}", first, last),
                "Bench Org",
                vec![format!("555-{:07}", i)],
            )
            .expect("bench names are non-empty")
        })
        .collect()
}

fn populated_directory(count: usize) -> Directory {
    let mut dir = Directory::new();
    dir.extend(pregenerate_contacts(count));
    dir
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &count in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("bulk", count), &count, |b, &count| {
            let contacts = pregenerate_contacts(count);
            b.iter_batched(
                || contacts.clone(),
                |contacts| {
                    let mut dir = Directory::new();
                    dir.extend(contacts);
                    dir
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_fetch(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch");
    for &count in &[100usize, 1_000, 10_000] {
        let dir = populated_directory(count);

        group.bench_with_input(BenchmarkId::new("hot_query", count), &dir, |b, dir| {
            b.iter(|| dir.fetch_ranked("Grace Hopper"));
        });

        group.bench_with_input(BenchmarkId::new("miss_query", count), &dir, |b, dir| {
            b.iter(|| dir.fetch_ranked("Unindexed"));
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    for &count in &[100usize, 1_000] {
        group.bench_with_input(
            BenchmarkId::new("top_ranked", count),
            &count,
            |b, &count| {
                b.iter_batched(
                    || populated_directory(count),
                    |mut dir| dir.delete_contact("Smith"),
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_fetch, bench_delete);
criterion_main!(benches);

//! # PS-01 Merkle Tree Benchmarks
//!
//! Claims to validate:
//! - Tree construction: O(n log n) (dominated by the leaf sort)
//! - Path generation: O(log n) after the O(1) index lookup
//! - Proof verification: O(log n) hash evaluations
//! - Cache hit: no rebuild
//!
//! Stress conditions:
//! - 100,000 holders (depth 17)
//! - Many independent snapshots built in parallel

use std::time::Duration;

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use ps_01_merkle_tree::{
    build_snapshots_parallel, CacheConfig, HashFunction, InMemoryHolderSource, MerkleConfig,
    MerkleTree, SnapshotBatch, SnapshotCache,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{Address, SnapshotId};

use crate::fixtures::random_holders;

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

pub fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("ps-01-build");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(0x5EED);
    for size in SIZES {
        let holders = random_holders(size, &mut rng);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("keccak256", size), &holders, |b, holders| {
            b.iter(|| {
                black_box(MerkleTree::build(holders.clone(), HashFunction::Keccak256).is_ok())
            })
        });
    }
    group.finish();
}

pub fn bench_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ps-01-proof");

    let mut rng = StdRng::seed_from_u64(0x5EED);
    for size in SIZES {
        let holders = random_holders(size, &mut rng);
        let Ok(tree) = MerkleTree::build(holders.clone(), HashFunction::Keccak256) else {
            continue;
        };
        let target = holders[size / 2].clone();

        group.bench_with_input(BenchmarkId::new("path_to", size), &tree, |b, tree| {
            b.iter(|| black_box(tree.path_to(&target)))
        });
        group.bench_with_input(BenchmarkId::new("proof_for", size), &tree, |b, tree| {
            b.iter(|| black_box(tree.proof_for(&target.address)))
        });
    }
    group.finish();
}

pub fn bench_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("ps-01-verify");

    let mut rng = StdRng::seed_from_u64(0x5EED);
    for size in SIZES {
        let holders = random_holders(size, &mut rng);
        let Ok(tree) = MerkleTree::build(holders.clone(), HashFunction::Keccak256) else {
            continue;
        };
        let Some(proof) = tree.proof_for(&holders[0].address) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::new("wallet_proof", size), &proof, |b, proof| {
            b.iter(|| black_box(proof.verify(tree.root_hash(), HashFunction::Keccak256)))
        });
    }
    group.finish();
}

pub fn bench_parallel_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("ps-01-parallel");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let batches: Vec<SnapshotBatch> = (0..16u64)
        .map(|block| SnapshotBatch {
            snapshot: SnapshotId::new(1, Address::from_low_u64_be(0xC0DE), block),
            holders: random_holders(5_000, &mut rng),
        })
        .collect();

    group.throughput(Throughput::Elements(batches.len() as u64));
    group.bench_function("16x5000", |b| {
        b.iter(|| black_box(build_snapshots_parallel(batches.clone(), HashFunction::Keccak256)))
    });
    group.finish();
}

pub fn bench_cache_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("ps-01-cache");

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let snapshot = SnapshotId::new(1, Address::from_low_u64_be(0xC0DE), 1);
    let source = InMemoryHolderSource::new();
    source.insert(snapshot, random_holders(10_000, &mut rng));
    let cache = SnapshotCache::new(&CacheConfig::default(), &MerkleConfig::default());
    let _ = cache.get_or_build(&snapshot, &source);

    group.bench_function("get_or_build_hit", |b| {
        b.iter(|| black_box(cache.get_or_build(&snapshot, &source).is_ok()))
    });
    group.finish();
}

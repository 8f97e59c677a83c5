//! # Payout Snapshot Benchmarks
//!
//! | Area | Claim | Target |
//! |------|-------|--------|
//! | Build | O(n log n) | 100k holders < 2s |
//! | Path / proof | O(log n) | < 50µs |
//! | Verify | O(depth) hashes | < 50µs |
//! | Cache hit | No rebuild | < 1µs |

use criterion::{criterion_group, criterion_main};
use snapshot_tests::benchmarks::ps_01_merkle_tree::{
    bench_cache_hit, bench_parallel_snapshots, bench_proof_generation, bench_proof_verification,
    bench_tree_build,
};

criterion_group!(
    benches,
    bench_tree_build,
    bench_proof_generation,
    bench_proof_verification,
    bench_parallel_snapshots,
    bench_cache_hit,
);

criterion_main!(benches);

//! Sharded parallel counting
//!
//! Fork-join variant of the counting scan: the dataset is split into
//! contiguous shards, each shard runs the sequential scan on a rayon worker,
//! and the per-shard results are reduced. Counts sum, neighbors take
//! max/min, so the reduction is associative and commutative and the merged
//! result is bit-identical to a full sequential scan no matter how the
//! scheduler interleaves the shards.
//!
//! Workers only read the shared dataset slice; no synchronization is needed
//! beyond the join.

use rayon::prelude::*;

use super::scan::{scan, PartitionCounts};

/// Scan a dataset in `nshards` contiguous shards and reduce the results.
///
/// Shard size is `max(1, n / nshards)`; the trailing shard may be shorter.
/// Every element is examined by exactly one shard. A shard count of 1 (or a
/// dataset too small to split) degrades to the sequential scan.
pub fn scan_sharded(data: &[f64], partition: f64, nshards: usize) -> PartitionCounts {
    if nshards <= 1 || data.len() <= 1 {
        return scan(data, partition);
    }

    let shard_len = (data.len() / nshards).max(1);
    data.par_chunks(shard_len)
        .map(|shard| scan(shard, partition))
        .reduce(PartitionCounts::identity, |mut acc, counts| {
            acc.combine(&counts);
            acc
        })
}

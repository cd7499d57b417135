//! Partition counting
//!
//! The counting primitive behind the median solver: given a dataset and a
//! candidate partition value, produce the four statistics the solver steers
//! by — how many elements sit at or below the partition, how many at or
//! above, and the tightest strict neighbors on either side.
//!
//! Both a sequential scan and a sharded parallel scan are provided; they are
//! observably equivalent for every shard count.
//!
//! # Example
//!
//! ```
//! use medscan::counting::count;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let c = count(&data, 3.0, None);
//!
//! assert_eq!(c.nlow, 3);
//! assert_eq!(c.nhigh, 3);
//! assert_eq!(c.below, 2.0);
//! assert_eq!(c.above, 4.0);
//! assert_eq!(c.nsame(data.len()), 1);
//! ```

mod scan;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
mod parallel;

pub use scan::{scan, PartitionCounts};

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub use parallel::scan_sharded;

/// Count elements relative to a partition value.
///
/// `shards` is a hint for the parallel scan: `None` or `Some(1)` runs the
/// sequential scan, larger values shard the dataset across rayon workers.
/// When the `parallel` feature is disabled the hint is ignored and the scan
/// runs sequentially; the result is identical either way.
pub fn count(data: &[f64], partition: f64, shards: Option<usize>) -> PartitionCounts {
    match shards {
        #[cfg(feature = "parallel")]
        Some(n) if n > 1 => scan_sharded(data, partition, n),
        _ => scan(data, partition),
    }
}

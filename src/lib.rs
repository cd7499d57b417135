//! # Medscan
//!
//! Exact median of large numeric datasets without sorting and with O(1)
//! extra memory beyond the input buffer.
//!
//! Medscan converges on the median with an iterative partition search: each
//! round counts how many elements fall on either side of a candidate value
//! and nudges the candidate with an adaptive, overshoot-correcting step until
//! the imbalance collapses. The dataset is only ever read, never reordered,
//! so the algorithm suits buffers too large to comfortably sort or settings
//! where sorting cost is unacceptable.
//!
//! ## Features
//!
//! - **Exact results**: the true median for odd lengths, the correctly
//!   averaged middle pair for even lengths, including duplicate-heavy input
//! - **Constant extra memory**: a handful of scalars of state, no sorted copy
//! - **Parallel counting**: the dominant cost (one scan per round) fans out
//!   over contiguous shards and reduces deterministically
//! - **Read-only input**: the data slice is borrowed, never mutated
//!
//! ## Quick Start
//!
//! ```rust
//! use medscan::median;
//!
//! let data = [4.0, 2.0, 1.0, 7.0, 3.0, 6.0, 5.0];
//! assert_eq!(median(&data), 4.0);
//! ```
//!
//! ## Parallel counting
//!
//! The counting scan is associative, so it can be sharded across worker
//! threads and reduced without changing the result:
//!
//! ```rust
//! use medscan::{median_with, SolverConfig};
//!
//! let data: Vec<f64> = (0..100_000).map(|i| (i % 997) as f64).collect();
//! let config = SolverConfig { shards: 4, ..SolverConfig::default() };
//! let m = median_with(&data, &config);
//! assert_eq!(m, medscan::median(&data));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support; enables the file loader,
//!   environment configuration, and the bundled self-check suite
//! - `parallel` (default): rayon-based sharded counting
//! - `cli` (default): the `medstats` command-line binary
//!
//! Without `std` the crate is `no_std`: the counting scan and the solver
//! remain available, with float intrinsics routed through `libm`.
//!
//! ## Limitations
//!
//! Input containing NaN yields undefined comparison behavior; the solver
//! does not defend against it. An empty dataset reports NaN rather than an
//! error, so callers must check.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod counting;
mod math;
pub mod solver;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod config;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod loader;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod selfcheck;

pub mod prelude {
    pub use crate::counting::{count, PartitionCounts};
    pub use crate::solver::{median, median_with, SolverConfig};
}

pub use counting::{count, PartitionCounts};
pub use solver::{median, median_with, SolverConfig};

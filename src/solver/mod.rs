//! Median solver
//!
//! Iterative partition search for the exact median. The solver repeatedly
//! asks the [counting](crate::counting) layer how a candidate partition
//! splits the dataset, then either terminates (the imbalance is absorbed by
//! ties at the partition) or moves the candidate with an adaptive,
//! overshoot-correcting step.
//!
//! # Example
//!
//! ```
//! use medscan::solver::median;
//!
//! assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]), 4.0);
//! assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
//! assert!(median(&[]).is_nan());
//! ```

mod search;

pub use search::{median, median_with, SolverConfig};

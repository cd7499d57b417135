//! Iterative partition search
//!
//! The candidate partition starts at the arithmetic mean and is moved each
//! round by a signal derived from the counting statistics. The step size is
//! `diff * fact * delta` where `diff` is the unresolved imbalance, `delta`
//! the `above - below` spread at the last reset point, and `fact` a scaling
//! factor that shrinks whenever a step overshoots. Overshoot is detected by
//! comparing imbalance magnitudes across resets; the corrected step is
//! re-taken from the reset point, not the overshot one.
//!
//! Once the imbalance drops to within the tie count at the partition, the
//! exact median falls out of `below`, `above`, and the partition itself.

use log::{debug, log_enabled, trace, Level};

use crate::counting::{self, PartitionCounts};
use crate::math;

/// Tuning parameters for the partition search.
///
/// The defaults reproduce the reference behavior; there is rarely a reason
/// to change `factor` or `decrease`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Imbalance threshold below which the partition snaps directly to the
    /// nearest strict neighbor instead of taking an adaptive step.
    ///
    /// A negative value is interpreted as relative: the effective threshold
    /// is `-max_diff * n`.
    pub max_diff: f64,
    /// Initial step scaling factor, restored at every reset point.
    pub factor: f64,
    /// Ratio applied to the scaling factor when a step overshoots.
    pub decrease: f64,
    /// Shard count for the counting scan; 1 means sequential.
    ///
    /// Purely a throughput knob: the counting reduction is deterministic,
    /// so the numerical result never depends on it.
    pub shards: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_diff: 5.0,
            factor: 0.2,
            decrease: 0.5,
            shards: 1,
        }
    }
}

/// Adaptive-step bookkeeping carried across iterations.
///
/// `prevdiff`, `delta`, and `prevpartition` are snapshots from the last
/// reset point; a correction after overshoot re-steps from there.
#[derive(Debug)]
struct StepState {
    fact: f64,
    prevdiff: f64,
    delta: f64,
    prevpartition: f64,
}

impl StepState {
    /// Take one adaptive step. `diff` is signed: negative moves the
    /// partition down (low-heavy), positive up (high-heavy).
    fn step(&mut self, config: &SolverConfig, partition: f64, diff: f64, counts: &PartitionCounts) -> f64 {
        if math::fabs(self.prevdiff) < math::fabs(diff) {
            // The previous step overestimated the change; retry from the
            // last reset point with a smaller scaling factor.
            self.fact *= config.decrease;
            trace!("overshoot, rescaled fact = {}", self.fact);
            self.prevpartition + self.prevdiff * self.fact * self.delta
        } else {
            // Accept the current point as the new reset point.
            self.fact = config.factor;
            self.prevdiff = diff;
            self.delta = counts.above - counts.below;
            self.prevpartition = partition;
            partition + diff * self.fact * self.delta
        }
    }
}

/// Terminal partition when the imbalance is absorbed by ties.
///
/// `neighbor` is the strict neighbor on the heavy side (`below` when the low
/// half is heavy, `above` when the high half is), `opposite` the other one.
/// The even-length `nsame == 1` averaging rule is deliberate and exact; do
/// not simplify it.
fn resolve(nsame: usize, evenlen: bool, neighbor: f64, opposite: f64, partition: f64) -> f64 {
    if nsame > 0 {
        if evenlen && nsame == 1 {
            (neighbor + partition) / 2.0
        } else {
            partition
        }
    } else if evenlen {
        (neighbor + opposite) / 2.0
    } else {
        neighbor
    }
}

/// Median with the default [`SolverConfig`].
pub fn median(data: &[f64]) -> f64 {
    median_with(data, &SolverConfig::default())
}

/// Median with explicit tuning parameters.
///
/// Returns NaN for an empty dataset; single- and two-element datasets
/// short-circuit to the element and the pair mean. The input is only read,
/// never reordered, so repeated calls yield identical results.
pub fn median_with(data: &[f64], config: &SolverConfig) -> f64 {
    let len = data.len();
    match len {
        0 => return f64::NAN,
        1 => return data[0],
        2 => return (data[0] + data[1]) / 2.0,
        _ => {}
    }

    let max_diff = if config.max_diff >= 0.0 {
        config.max_diff
    } else {
        -config.max_diff * len as f64
    };
    let evenlen = len % 2 == 0;
    let shards = if config.shards > 1 {
        Some(config.shards)
    } else {
        None
    };

    let sum: f64 = data.iter().sum();
    let mut partition = sum / len as f64;
    let mut state = StepState {
        fact: config.factor,
        prevdiff: f64::INFINITY,
        delta: 0.0,
        prevpartition: partition,
    };

    if log_enabled!(Level::Debug) {
        let mut min = data[0];
        let mut max = data[0];
        for &value in data {
            if value < min {
                min = value;
            } else if value > max {
                max = value;
            }
        }
        debug!(
            "n = {}, range = [{}, {}], start partition (mean) = {}, max_diff = {}",
            len, min, max, partition, max_diff
        );
    }

    let mut rounds: u64 = 0;
    loop {
        rounds += 1;
        let counts = counting::count(data, partition, shards);
        let nsame = counts.nsame(len);
        trace!(
            "round {}: partition = {}, nlow = {}, nhigh = {}, below = {}, above = {}, nsame = {}",
            rounds,
            partition,
            counts.nlow,
            counts.nhigh,
            counts.below,
            counts.above,
            nsame
        );

        if counts.nlow == counts.nhigh {
            if nsame == 0 {
                // The median sits strictly between the two neighbors.
                partition = (counts.below + counts.above) / 2.0;
            }
            break;
        } else if counts.nlow > counts.nhigh {
            let excess = counts.nlow - counts.nhigh;
            if excess <= nsame {
                partition = resolve(nsame, evenlen, counts.below, counts.above, partition);
                break;
            }
            let diff = (excess - nsame) as f64;
            partition = if diff > max_diff {
                state.step(config, partition, -diff, &counts)
            } else {
                counts.below
            };
        } else {
            let excess = counts.nhigh - counts.nlow;
            if excess <= nsame {
                partition = resolve(nsame, evenlen, counts.above, counts.below, partition);
                break;
            }
            let diff = (excess - nsame) as f64;
            partition = if diff > max_diff {
                state.step(config, partition, diff, &counts)
            } else {
                counts.above
            };
        }
    }

    debug!("converged after {} rounds, median = {}", rounds, partition);
    partition
}

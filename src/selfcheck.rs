//! Bundled self-check suite
//!
//! A table of known-median scenarios the `medstats` binary runs when invoked
//! without arguments. These mirror the regression battery in the unit tests
//! so a deployed binary can be sanity-checked without a test harness.

use crate::solver::median;

const EPS: f64 = 2.0 * f64::EPSILON;

const CASES: &[(&[f64], f64)] = &[
    (&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 4.0),
    (&[1.0, 1.0, 1.0, 4.0, 5.0, 6.0, 1.0], 1.0),
    (&[1.0, 1.0, 2.0, 4.0, 5.0, 6.0, 1.0], 2.0),
    (&[4.0, 2.0, 1.0, 7.0, 3.0, 6.0, 5.0], 4.0),
    (&[7.0, 7.0, 1.0, 1.0, 5.0, 4.0, 3.0], 4.0),
    (&[5.0, 3.0, 4.0, 7.0, 1.0, 6.0, 2.0], 4.0),
    (&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 4.5),
    (&[3.0, 5.0, 4.0, 8.0, 1.0, 7.0, 2.0, 6.0], 4.5),
    (&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0, 4.0], 3.0),
    (&[1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0, 4.0], 3.0),
    (&[1.0, 2.0, 3.0, 4.0, 4.0, 5.0, 6.0, 7.0], 4.0),
    (&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 6.0, 20.0], 4.5),
    (&[1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 6.0, 6.0], 4.5),
    (&[1.0, 2.0, 3.0, 5.0], 2.5),
    (&[1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0], 16.0),
];

/// Run every scenario, printing each mismatch to stderr.
///
/// Returns the number of failed scenarios; zero means all passed.
pub fn run() -> usize {
    let mut failures = 0;
    for (i, (data, expected)) in CASES.iter().enumerate() {
        let got = median(data);
        if (got - expected).abs() > EPS {
            eprintln!("scenario {}: median = {}, expected {}", i, got, expected);
            failures += 1;
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_scenarios_pass() {
        assert_eq!(run(), 0);
    }
}

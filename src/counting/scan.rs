//! Sequential counting scan
//!
//! One linear pass over the dataset accumulating the four partition
//! statistics. This is the leaf primitive of the crate; the parallel variant
//! runs it per shard and reduces.

/// Statistics of a dataset relative to a partition value.
///
/// Elements exactly equal to the partition are counted in both `nlow` and
/// `nhigh`, so `nlow + nhigh - n` recovers the tie count (see
/// [`nsame`](PartitionCounts::nsame)).
///
/// `below` and `above` are the tightest strict neighbors of the partition in
/// the dataset. An absent neighbor is reported as the matching infinity
/// sentinel (`below = -inf`, `above = +inf`); callers relying on neighbor
/// arithmetic must treat the sentinels per IEEE-754.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartitionCounts {
    /// Count of elements `<=` partition
    pub nlow: usize,
    /// Count of elements `>=` partition
    pub nhigh: usize,
    /// Greatest element strictly below the partition, or `-inf` if none
    pub below: f64,
    /// Least element strictly above the partition, or `+inf` if none
    pub above: f64,
}

impl PartitionCounts {
    /// The identity element of the shard reduction: zero counts, sentinel
    /// neighbors.
    pub(crate) fn identity() -> Self {
        Self {
            nlow: 0,
            nhigh: 0,
            below: f64::NEG_INFINITY,
            above: f64::INFINITY,
        }
    }

    /// Number of elements exactly equal to the partition, given the dataset
    /// length the counts were taken over.
    pub fn nsame(&self, len: usize) -> usize {
        self.nlow + self.nhigh - len
    }

    /// Fold another shard's counts into this one.
    ///
    /// Counts sum; neighbors take the max of `below` and the min of `above`.
    /// All four accumulators are associative and commutative, so the merged
    /// result is independent of shard order.
    pub(crate) fn combine(&mut self, other: &Self) {
        self.nlow += other.nlow;
        self.nhigh += other.nhigh;
        if other.below > self.below {
            self.below = other.below;
        }
        if other.above < self.above {
            self.above = other.above;
        }
    }
}

/// Scan a dataset sequentially, counting elements relative to `partition`.
pub fn scan(data: &[f64], partition: f64) -> PartitionCounts {
    let mut counts = PartitionCounts::identity();
    for &value in data {
        if value <= partition {
            counts.nlow += 1;
        }
        if value >= partition {
            counts.nhigh += 1;
        }
        if value < partition && counts.below < value {
            counts.below = value;
        }
        if value > partition && counts.above > value {
            counts.above = value;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_counts() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let c = scan(&data, 3.0);

        assert_eq!(c.nlow, 3);
        assert_eq!(c.nhigh, 3);
        assert_eq!(c.below, 2.0);
        assert_eq!(c.above, 4.0);
        assert_eq!(c.nsame(data.len()), 1);
    }

    #[test]
    fn test_partition_between_elements() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let c = scan(&data, 2.5);

        assert_eq!(c.nlow, 2);
        assert_eq!(c.nhigh, 2);
        assert_eq!(c.below, 2.0);
        assert_eq!(c.above, 3.0);
        assert_eq!(c.nsame(data.len()), 0);
    }

    #[test]
    fn test_duplicates_counted_both_sides() {
        let data = [2.0, 2.0, 2.0, 5.0];
        let c = scan(&data, 2.0);

        assert_eq!(c.nlow, 3);
        assert_eq!(c.nhigh, 4);
        assert_eq!(c.nsame(data.len()), 3);
        assert_eq!(c.below, f64::NEG_INFINITY);
        assert_eq!(c.above, 5.0);
    }

    #[test]
    fn test_sentinels_when_no_neighbors() {
        let data = [7.0, 7.0];
        let c = scan(&data, 7.0);

        assert_eq!(c.below, f64::NEG_INFINITY);
        assert_eq!(c.above, f64::INFINITY);
        assert_eq!(c.nsame(data.len()), 2);
    }

    #[test]
    fn test_partition_outside_range() {
        let data = [1.0, 2.0, 3.0];

        let lo = scan(&data, 0.0);
        assert_eq!(lo.nlow, 0);
        assert_eq!(lo.nhigh, 3);
        assert_eq!(lo.below, f64::NEG_INFINITY);
        assert_eq!(lo.above, 1.0);

        let hi = scan(&data, 10.0);
        assert_eq!(hi.nlow, 3);
        assert_eq!(hi.nhigh, 0);
        assert_eq!(hi.below, 3.0);
        assert_eq!(hi.above, f64::INFINITY);
    }

    #[test]
    fn test_empty_dataset() {
        let c = scan(&[], 1.0);
        assert_eq!(c, PartitionCounts::identity());
    }

    #[test]
    fn test_combine_matches_full_scan() {
        let data = [5.0, 1.0, 4.0, 2.0, 8.0, 2.0, 9.0];
        let full = scan(&data, 4.0);

        let mut merged = scan(&data[..3], 4.0);
        merged.combine(&scan(&data[3..], 4.0));

        assert_eq!(merged, full);
    }

    #[test]
    fn test_combine_identity() {
        let data = [3.0, 1.0, 2.0];
        let mut c = scan(&data, 2.0);
        let before = c;
        c.combine(&PartitionCounts::identity());
        assert_eq!(c, before);
    }
}

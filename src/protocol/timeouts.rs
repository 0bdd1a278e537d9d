use std::time::Duration;

/// Named timeout class for one RPC operation.
///
/// Every call type selects one bucket statically; the bucket maps to a fixed
/// per-request deadline. The table is immutable and process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeoutBucket {
    /// Quick queries against a live daemon.
    Urgent,
    Fast,
    Normal,
    /// Long-running storage or migration work.
    Slow,
    FourHours,
    OneDay,
}

impl TimeoutBucket {
    /// Per-request deadline in seconds for this bucket.
    pub const fn seconds(self) -> u64 {
        match self {
            TimeoutBucket::Urgent => 60,
            TimeoutBucket::Fast => 5 * 60,
            TimeoutBucket::Normal => 15 * 60,
            TimeoutBucket::Slow => 3600,
            TimeoutBucket::FourHours => 4 * 3600,
            TimeoutBucket::OneDay => 86400,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::from_secs(self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_seconds_table() {
        assert_eq!(TimeoutBucket::Urgent.seconds(), 60);
        assert_eq!(TimeoutBucket::Fast.seconds(), 300);
        assert_eq!(TimeoutBucket::Normal.seconds(), 900);
        assert_eq!(TimeoutBucket::Slow.seconds(), 3600);
        assert_eq!(TimeoutBucket::FourHours.seconds(), 14400);
        assert_eq!(TimeoutBucket::OneDay.seconds(), 86400);
    }

    #[test]
    fn test_buckets_strictly_increasing() {
        let buckets = [
            TimeoutBucket::Urgent,
            TimeoutBucket::Fast,
            TimeoutBucket::Normal,
            TimeoutBucket::Slow,
            TimeoutBucket::FourHours,
            TimeoutBucket::OneDay,
        ];
        for pair in buckets.windows(2) {
            assert!(pair[0].seconds() < pair[1].seconds());
        }
    }

    #[test]
    fn test_duration_matches_seconds() {
        assert_eq!(
            TimeoutBucket::Normal.duration(),
            Duration::from_secs(TimeoutBucket::Normal.seconds())
        );
    }
}

//! Shard-count configuration from the environment
//!
//! The counting scan's shard count is a throughput knob, so it is wired to
//! an environment variable rather than the library API. Malformed values
//! are recovered locally with a warning; they never fail a solve.

use std::env;

use log::warn;

/// Environment variable holding the counting shard count.
pub const SHARDS_ENV: &str = "MEDSCAN_SHARDS";

/// Shard count used when the environment does not override it.
pub const DEFAULT_SHARDS: usize = 2;

/// Read the shard count from [`SHARDS_ENV`].
///
/// Returns [`DEFAULT_SHARDS`] when the variable is unset, and also when it
/// is malformed or zero (with a logged warning).
pub fn shards_from_env() -> usize {
    match env::var(SHARDS_ENV) {
        Ok(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                warn!(
                    "invalid {} value {:?}, using default of {}",
                    SHARDS_ENV, raw, DEFAULT_SHARDS
                );
                DEFAULT_SHARDS
            }
        },
        Err(_) => DEFAULT_SHARDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the variable is process-global and tests run in parallel.
    #[test]
    fn test_env_override_and_fallback() {
        env::remove_var(SHARDS_ENV);
        assert_eq!(shards_from_env(), DEFAULT_SHARDS);

        env::set_var(SHARDS_ENV, "8");
        assert_eq!(shards_from_env(), 8);

        env::set_var(SHARDS_ENV, "not-a-number");
        assert_eq!(shards_from_env(), DEFAULT_SHARDS);

        env::set_var(SHARDS_ENV, "0");
        assert_eq!(shards_from_env(), DEFAULT_SHARDS);

        env::remove_var(SHARDS_ENV);
    }
}

//! Rate limiter settings for callers that queue allocation requests.
//!
//! Both tunables are optional; [`LimiterConfig::set_defaults`] fills in whatever is missing.
//! The wait time is a whole number of seconds whether it comes from serde or the environment.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

/// Queue length used when none is configured.
pub const DEFAULT_MAX_QUEUE_SIZE: usize = 1000;
/// Wait time used when none is configured.
pub const DEFAULT_MAX_WAIT_TIME: Duration = Duration::from_secs(15);

const ENV_MAX_QUEUE_SIZE: &str = "LIMITER_MAX_QUEUE_SIZE";
const ENV_MAX_WAIT_TIME_SECS: &str = "LIMITER_MAX_WAIT_TIME_SECS";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LimiterConfig {
    #[serde(default)]
    pub max_queue_size: Option<usize>,
    #[serde(default)]
    pub max_wait_time_secs: Option<u64>,
}

impl LimiterConfig {
    /// Fill unset fields with [`DEFAULT_MAX_QUEUE_SIZE`] and [`DEFAULT_MAX_WAIT_TIME`].
    pub fn set_defaults(mut self) -> LimiterConfig {
        self.max_queue_size.get_or_insert(DEFAULT_MAX_QUEUE_SIZE);
        self.max_wait_time_secs
            .get_or_insert(DEFAULT_MAX_WAIT_TIME.as_secs());
        self
    }

    pub fn max_queue_size(&self) -> usize {
        self.max_queue_size.unwrap_or(DEFAULT_MAX_QUEUE_SIZE)
    }

    pub fn max_wait_time(&self) -> Duration {
        self.max_wait_time_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_MAX_WAIT_TIME)
    }

    /// Read `LIMITER_MAX_QUEUE_SIZE` and `LIMITER_MAX_WAIT_TIME_SECS` from the environment.
    ///
    /// Unset variables stay `None`; a set but unparsable value is an error.
    pub fn from_env() -> Result<LimiterConfig, Box<dyn Error>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<LimiterConfig, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_queue_size = match lookup(ENV_MAX_QUEUE_SIZE) {
            Some(v) => Some(
                v.trim()
                    .parse::<usize>()
                    .map_err(|e| format!("Invalid {ENV_MAX_QUEUE_SIZE}={v}: {e}"))?,
            ),
            None => None,
        };
        let max_wait_time_secs = match lookup(ENV_MAX_WAIT_TIME_SECS) {
            Some(v) => Some(
                v.trim()
                    .parse::<u64>()
                    .map_err(|e| format!("Invalid {ENV_MAX_WAIT_TIME_SECS}={v}: {e}"))?,
            ),
            None => None,
        };
        log::debug!(
            "limiter config from env: queue={max_queue_size:?} wait_secs={max_wait_time_secs:?}"
        );
        Ok(LimiterConfig {
            max_queue_size,
            max_wait_time_secs,
        })
    }
}

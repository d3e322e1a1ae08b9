//! Exponential backoff for operations that fail transiently, such as the
//! first connection to the database while it is still starting up.

use std::future::Future;
use std::hash::{BuildHasher, RandomState};
use std::time::{Duration, SystemTime};
use tracing::warn;

/// How many times to retry and how long to wait in between
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    /// Retries after the first attempt
    pub retries: u32,
    pub first_delay: Duration,
    pub max_delay: Duration,
    /// Shorten each wait to a random 50%..100% so restarted replicas spread out
    pub jitter: bool,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            retries: 3,
            first_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            jitter: true,
        }
    }
}

impl Backoff {
    /// Wait before retry `n` (0-based): doubles every time, capped at `max_delay`.
    fn delay(&self, n: u32) -> Duration {
        let nominal = self
            .first_delay
            .saturating_mul(2u32.saturating_pow(n))
            .min(self.max_delay);

        if self.jitter {
            nominal.mul_f64(jitter_factor())
        } else {
            nominal
        }
    }
}

fn jitter_factor() -> f64 {
    let noise = RandomState::new().hash_one(SystemTime::now()) % 500;
    0.5 + noise as f64 / 1000.0
}

/// Run `operation` until it succeeds or the retries are spent, returning the
/// last error in the latter case.
pub async fn retry<F, Fut, T, E>(backoff: Backoff, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut n = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if n < backoff.retries => {
                let wait = backoff.delay(n);
                warn!(
                    attempt = n + 1,
                    wait_ms = wait.as_millis() as u64,
                    error = %e,
                    "Attempt failed, retrying"
                );
                tokio::time::sleep(wait).await;
                n += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

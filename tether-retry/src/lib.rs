//! Unified retry logic for Tether remote calls
//!
//! This crate provides the single retry policy used around every call to the
//! remote object store, and around temporary-file cleanup during uploads.
//! The policy is deliberately simple: a fixed attempt count with a fixed
//! sleep between attempts, retrying on *any* failure and re-raising the last
//! failure unchanged so callers always see the real cause.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed-interval retry policy.
///
/// Blocks the calling thread for `delay` between attempts; no sleep happens
/// after the final attempt. The wrapped operation is assumed to be safe to
/// re-invoke (remote reads/writes and temp-file deletion all are).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// Create a policy with the given attempt count and inter-attempt delay.
    ///
    /// An attempt count of zero is treated as one: the operation always runs
    /// at least once.
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    /// A policy that runs the operation exactly once. Useful in tests.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Total number of attempts this policy will make.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Sleep interval between attempts.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Execute `op`, retrying on any failure until the attempt budget is
    /// exhausted, then return the last failure unchanged.
    pub fn invoke<T, E, F>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => {
                    if attempt > 1 {
                        debug!(attempt, "operation succeeded after retries");
                    }
                    return Ok(value);
                }
                Err(err) => {
                    if attempt >= self.attempts {
                        warn!(attempt, error = %err, "retry attempts exhausted");
                        return Err(err);
                    }
                    debug!(attempt, error = %err, "operation failed; retrying");
                    thread::sleep(self.delay);
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(100))
    }
}

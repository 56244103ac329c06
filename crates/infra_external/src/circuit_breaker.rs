//! Circuit breaker for upstream calls
//!
//! Closed: calls go through. After `failure_threshold` consecutive failures
//! the circuit opens and calls are short-circuited. Once
//! `reset_timeout_secs` have elapsed since the last failure the circuit is
//! half-open and lets calls through again; `success_threshold` successes
//! close it, another failure re-opens it.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use core_kernel::CircuitBreakerConfig;

#[derive(Debug)]
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    failure_count: AtomicU64,
    success_count: AtomicU64,
    is_open: AtomicBool,
    last_failure_time: RwLock<Option<Instant>>,
}

impl CircuitBreaker {
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            failure_count: AtomicU64::new(0),
            success_count: AtomicU64::new(0),
            is_open: AtomicBool::new(false),
            last_failure_time: RwLock::new(None),
        }
    }

    /// True when the circuit is open, regardless of the reset timeout
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::Relaxed)
    }

    /// True when a call may be attempted (closed or half-open)
    pub async fn is_available(&self) -> bool {
        if !self.is_open() {
            return true;
        }

        let last_failure = self.last_failure_time.read().await;
        match *last_failure {
            Some(time) => time.elapsed() >= Duration::from_secs(self.config.reset_timeout_secs),
            None => true,
        }
    }

    pub fn record_success(&self) {
        if !self.is_open() {
            self.failure_count.store(0, Ordering::Relaxed);
            return;
        }
        let success = self.success_count.fetch_add(1, Ordering::Relaxed) + 1;
        if success >= self.config.success_threshold as u64 {
            self.is_open.store(false, Ordering::Relaxed);
            self.success_count.store(0, Ordering::Relaxed);
            self.failure_count.store(0, Ordering::Relaxed);
        }
    }

    /// Records a failed call
    ///
    /// Any failure while half-open re-opens the circuit and restarts the
    /// reset timeout.
    pub async fn record_failure(&self) {
        self.success_count.store(0, Ordering::Relaxed);
        if self.is_open() {
            *self.last_failure_time.write().await = Some(Instant::now());
            return;
        }
        let failures = self.failure_count.fetch_add(1, Ordering::Relaxed) + 1;
        if failures >= self.config.failure_threshold as u64 {
            self.is_open.store(true, Ordering::Relaxed);
            *self.last_failure_time.write().await = Some(Instant::now());
        }
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new(CircuitBreakerConfig::default())
    }
}

//! Logger metrics for observability
//!
//! Counters for monitoring logger health: emitted and filtered record
//! counts, sink write failures, and buffer pool traffic.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics shared by a buffer pool and every logger created from it.
///
/// # Example
///
/// ```
/// use cascade_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.records_emitted(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records serialized and handed to a sink successfully
    records_emitted: AtomicU64,

    /// Records skipped by the severity threshold
    records_filtered: AtomicU64,

    /// Sink write calls that returned an error
    write_failures: AtomicU64,

    /// Buffer acquisitions served from the freelist
    pool_hits: AtomicU64,

    /// Buffer acquisitions that had to allocate fresh
    pool_misses: AtomicU64,

    /// Buffers dropped because the freelist was full at release time
    pool_discards: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            records_emitted: AtomicU64::new(0),
            records_filtered: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            pool_hits: AtomicU64::new(0),
            pool_misses: AtomicU64::new(0),
            pool_discards: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_emitted(&self) -> u64 {
        self.records_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_filtered(&self) -> u64 {
        self.records_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn pool_hits(&self) -> u64 {
        self.pool_hits.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn pool_misses(&self) -> u64 {
        self.pool_misses.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn pool_discards(&self) -> u64 {
        self.pool_discards.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.records_emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.records_filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_pool_hit(&self) -> u64 {
        self.pool_hits.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_pool_miss(&self) -> u64 {
        self.pool_misses.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_pool_discard(&self) -> u64 {
        self.pool_discards.fetch_add(1, Ordering::Relaxed)
    }

    /// Write failure rate as a percentage (0.0 - 100.0).
    ///
    /// Returns 0.0 when nothing has been emitted yet.
    pub fn failure_rate(&self) -> f64 {
        let failures = self.write_failures() as f64;
        let total = self.records_emitted() as f64 + failures;
        if total == 0.0 {
            0.0
        } else {
            (failures / total) * 100.0
        }
    }

    /// Reset all counters to zero. Useful for tests.
    pub fn reset(&self) {
        self.records_emitted.store(0, Ordering::Relaxed);
        self.records_filtered.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.pool_hits.store(0, Ordering::Relaxed);
        self.pool_misses.store(0, Ordering::Relaxed);
        self.pool_discards.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            records_emitted: AtomicU64::new(self.records_emitted()),
            records_filtered: AtomicU64::new(self.records_filtered()),
            write_failures: AtomicU64::new(self.write_failures()),
            pool_hits: AtomicU64::new(self.pool_hits()),
            pool_misses: AtomicU64::new(self.pool_misses()),
            pool_discards: AtomicU64::new(self.pool_discards()),
        }
    }
}

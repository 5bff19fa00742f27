//! Bounded pool of recycled backing buffers
//!
//! Each pooled slot pairs a shared byte buffer with a lease cell. A
//! lineage (one logger and all of its branches) leases a slot for its
//! lifetime; on release the buffer is cleared and returned to a bounded
//! freelist so the next lineage skips the allocation. Acquire and release
//! never block: a pool miss allocates fresh, a pool-full release discards
//! the slot. Buffers are a performance resource, not a correctness one.

use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use super::metrics::LoggerMetrics;

/// Slots retained by the process-wide pool.
pub const DEFAULT_POOL_CAPACITY: usize = 100;

/// Initial capacity of a freshly allocated backing buffer.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Generation cell shared by every alias of one lineage.
///
/// The cell holds the currently active generation: odd while leased, even
/// while idle. An alias captures the odd generation at creation and is
/// live exactly while the cell still holds it. Because generations only
/// grow, an alias left over from a previous lineage can never come back to
/// life when the slot is recycled.
#[derive(Debug, Clone)]
pub(crate) struct Lease {
    cell: Arc<AtomicU64>,
}

impl Lease {
    fn new() -> Self {
        Self {
            cell: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Begin a new lineage; returns the generation its aliases must carry.
    /// Only the pool calls this, on slots it knows to be idle.
    pub(crate) fn activate(&self) -> u64 {
        self.cell.fetch_add(1, Ordering::AcqRel) + 1
    }

    #[inline]
    pub(crate) fn is_live(&self, generation: u64) -> bool {
        self.cell.load(Ordering::Acquire) == generation
    }

    /// End the lineage. Returns false when the generation was already
    /// retired, which makes release idempotent: only the first caller may
    /// hand the slot back to the pool.
    pub(crate) fn retire(&self, generation: u64) -> bool {
        self.cell
            .compare_exchange(
                generation,
                generation.wrapping_add(1),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

/// One recyclable buffer plus its lease. Cloning shares both.
#[derive(Debug, Clone)]
pub(crate) struct PoolSlot {
    pub(crate) bytes: Arc<Mutex<Vec<u8>>>,
    pub(crate) lease: Lease,
}

impl PoolSlot {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Arc::new(Mutex::new(Vec::with_capacity(capacity))),
            lease: Lease::new(),
        }
    }
}

/// Bounded, non-blocking freelist of buffer slots.
///
/// Safe for concurrent acquisition from independent lineages; the freelist
/// is a bounded channel, so no slot is ever handed out twice and capacity
/// is respected without locking the callers against each other.
pub struct BufferPool {
    idle_tx: Sender<PoolSlot>,
    idle_rx: Receiver<PoolSlot>,
    buffer_capacity: usize,
    metrics: Arc<LoggerMetrics>,
}

impl BufferPool {
    /// A pool retaining at most `capacity` idle slots.
    pub fn new(capacity: usize) -> Self {
        Self::with_buffer_capacity(capacity, DEFAULT_BUFFER_CAPACITY)
    }

    /// A pool whose fresh buffers start at `buffer_capacity` bytes.
    pub fn with_buffer_capacity(capacity: usize, buffer_capacity: usize) -> Self {
        let (idle_tx, idle_rx) = bounded(capacity);
        Self {
            idle_tx,
            idle_rx,
            buffer_capacity,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// The process-wide shared pool used by [`crate::Logger::new`].
    pub fn global() -> Arc<BufferPool> {
        static GLOBAL: OnceLock<Arc<BufferPool>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(BufferPool::new(DEFAULT_POOL_CAPACITY))))
    }

    /// Take an idle slot, or allocate a fresh one on a pool miss.
    /// Never blocks.
    pub(crate) fn acquire(&self) -> PoolSlot {
        match self.idle_rx.try_recv() {
            Ok(slot) => {
                self.metrics.record_pool_hit();
                slot
            }
            Err(_) => {
                self.metrics.record_pool_miss();
                PoolSlot::with_capacity(self.buffer_capacity)
            }
        }
    }

    /// Clear a slot's buffer (capacity retained) and return it to the
    /// freelist. A full freelist discards the slot silently.
    pub(crate) fn release(&self, slot: PoolSlot) {
        slot.bytes.lock().clear();
        if self.idle_tx.try_send(slot).is_err() {
            self.metrics.record_pool_discard();
        }
    }

    /// Number of idle slots currently retained.
    pub fn idle_count(&self) -> usize {
        self.idle_rx.len()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub(crate) fn shared_metrics(&self) -> Arc<LoggerMetrics> {
        Arc::clone(&self.metrics)
    }
}

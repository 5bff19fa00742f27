//! Main logger implementation
//!
//! A [`Logger`] is a cheap handle onto a leased pool slot. Branching clones
//! the handle and extends the shared buffer with serialized context, so a
//! lineage pays for each context attribute exactly once no matter how many
//! records reuse it. Emission serializes the per-record suffix past the
//! handle's logical length, flushes the whole range to the sink, and rolls
//! the buffer back, leaving the persistent context untouched.

use super::{
    attr::Attr,
    buffer_pool::{BufferPool, PoolSlot},
    encoder,
    error::Result,
    level::Level,
    metrics::LoggerMetrics,
};
use crate::sinks::Sink;
use parking_lot::Mutex;
use std::sync::Arc;

/// A leveled JSON event logger over a pooled buffer.
///
/// Cloning (or [`branch`](Logger::branch)ing) produces aliases of the same
/// lineage: one shared buffer, one lease, one sink. The shared buffer is
/// mutex-guarded and every alias keeps its own logical length, so aliases
/// may be used from different threads; records never interleave mid-object.
///
/// Release is explicit and idempotent. Dropping a handle does nothing: any
/// alias may still be live, and recycling is an optimization the pool can
/// survive missing.
///
/// # Example
///
/// ```
/// use cascade_logger::{Attr, Level, Logger};
/// use cascade_logger::sinks::MemorySink;
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(sink.clone(), Level::Debug);
/// let request_logger = logger.branch(&[Attr::string("request_id", "abc-123")]);
///
/// request_logger.error("something went wrong", &[Attr::int("count", 2)]);
/// assert!(sink.contents().contains("\"request_id\":\"abc-123\""));
///
/// logger.release();
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Arc<Mutex<Box<dyn Sink>>>,
    threshold: Level,
    slot: PoolSlot,
    generation: u64,
    /// Committed bytes this alias considers its own. Sibling bytes past it
    /// are never read and are overwritten by this alias's next operation.
    len: usize,
    pool: Arc<BufferPool>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a logger over the process-wide buffer pool.
    pub fn new<S: Sink + 'static>(sink: S, threshold: Level) -> Logger {
        Self::with_pool(sink, threshold, BufferPool::global())
    }

    /// Create a logger leasing its buffer from a specific pool.
    pub fn with_pool<S: Sink + 'static>(
        sink: S,
        threshold: Level,
        pool: Arc<BufferPool>,
    ) -> Logger {
        Self::from_parts(Box::new(sink), threshold, pool)
    }

    pub(crate) fn from_parts(
        sink: Box<dyn Sink>,
        threshold: Level,
        pool: Arc<BufferPool>,
    ) -> Logger {
        let slot = pool.acquire();
        let generation = slot.lease.activate();
        {
            let mut buf = slot.bytes.lock();
            buf.clear();
            buf.push(b'{');
        }
        let metrics = pool.shared_metrics();
        Logger {
            sink: Arc::new(Mutex::new(sink)),
            threshold,
            slot,
            generation,
            len: 1,
            pool,
            metrics,
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use cascade_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .threshold(Level::Debug)
    ///     .sink(ConsoleSink::new())
    ///     .build();
    /// logger.release();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// Whether this lineage has not been released yet.
    pub fn is_live(&self) -> bool {
        self.slot.lease.is_live(self.generation)
    }

    /// A new alias carrying this handle's context plus `attrs`.
    ///
    /// The attributes are serialized once, now; every record emitted
    /// through the returned handle reuses those bytes. The caller's own
    /// view is unchanged, so sibling branches stay independent. Branching
    /// a released lineage returns an inert alias.
    #[must_use]
    pub fn branch(&self, attrs: &[Attr<'_>]) -> Logger {
        let mut alias = self.clone();
        let mut guard = self.slot.bytes.lock();
        if !self.is_live() {
            return alias;
        }
        let buf = &mut *guard;
        buf.truncate(self.len);
        encoder::push_attrs(buf, attrs);
        alias.len = buf.len();
        alias
    }

    /// Serialize and flush one record: `message`, `level`, the lineage
    /// context, then `attrs`, as a single JSON object handed to the sink
    /// in one write call.
    ///
    /// A no-op when the lineage is released or the level is filtered; the
    /// filter check runs before any serialization work. Sink failures are
    /// reported to the diagnostic channel and counted, never surfaced to
    /// the caller.
    pub fn emit(&self, level: Level, message: &str, attrs: &[Attr<'_>]) {
        if !self.is_live() {
            return;
        }
        if !level.enabled_for(self.threshold) {
            self.metrics.record_filtered();
            return;
        }

        let mut guard = self.slot.bytes.lock();
        // re-check under the lock so a concurrent release cannot slip a
        // flush onto a buffer the pool already reclaimed
        if !self.is_live() {
            return;
        }
        let buf = &mut *guard;
        buf.truncate(self.len);
        if matches!(buf.last(), Some(b) if *b != b'{') {
            buf.push(b',');
        }
        buf.extend_from_slice(b"\"message\":\"");
        encoder::push_escaped(buf, message);
        buf.extend_from_slice(b"\",\"level\":\"");
        encoder::push_level(buf, level);
        buf.push(b'"');
        encoder::push_attrs(buf, attrs);
        buf.push(b'}');

        {
            let mut sink = self.sink.lock();
            if let Err(e) = sink.write(buf) {
                self.metrics.record_write_failure();
                eprintln!("[LOGGER ERROR] sink '{}' write failed: {}", sink.name(), e);
            } else {
                self.metrics.record_emitted();
            }
        }

        // the record suffix is flushed, not persisted
        buf.truncate(self.len);
    }

    #[inline]
    pub fn error(&self, message: &str, attrs: &[Attr<'_>]) {
        self.emit(Level::Error, message, attrs);
    }

    #[inline]
    pub fn warning(&self, message: &str, attrs: &[Attr<'_>]) {
        self.emit(Level::Warning, message, attrs);
    }

    #[inline]
    pub fn debug(&self, message: &str, attrs: &[Attr<'_>]) {
        self.emit(Level::Debug, message, attrs);
    }

    /// Retire the lineage and return its buffer to the pool.
    ///
    /// Every alias of the lineage becomes permanently inert, including
    /// after the slot is recycled by a later lineage. Calling release more
    /// than once, or through several aliases, is safe: only the first call
    /// returns the slot.
    pub fn release(&self) {
        if self.slot.lease.retire(self.generation) {
            self.pool.release(self.slot.clone());
        }
    }

    /// Flush the underlying sink.
    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use cascade_logger::prelude::*;
/// use std::sync::Arc;
///
/// let pool = Arc::new(BufferPool::new(10));
/// let logger = Logger::builder()
///     .threshold(Level::Debug)
///     .sink(ConsoleSink::stderr())
///     .pool(pool)
///     .build();
/// logger.release();
/// ```
pub struct LoggerBuilder {
    threshold: Level,
    sink: Option<Box<dyn Sink>>,
    pool: Option<Arc<BufferPool>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: Level::Error,
            sink: None,
            pool: None,
        }
    }

    /// Set the severity threshold (fixed for the logger's lifetime)
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Level) -> Self {
        self.threshold = level;
        self
    }

    /// Set the destination sink. Defaults to [`crate::sinks::ConsoleSink`].
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Lease the buffer from a specific pool instead of the global one
    #[must_use = "builder methods return a new value"]
    pub fn pool(mut self, pool: Arc<BufferPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(crate::sinks::ConsoleSink::new()));
        let pool = self.pool.unwrap_or_else(BufferPool::global);
        Logger::from_parts(sink, self.threshold, pool)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    fn test_pool() -> Arc<BufferPool> {
        Arc::new(BufferPool::new(8))
    }

    #[test]
    fn test_emit_respects_threshold() {
        let sink = MemorySink::new();
        let logger = Logger::with_pool(sink.clone(), Level::Error, test_pool());

        logger.warning("filtered out", &[]);
        logger.debug("also filtered", &[]);
        assert!(sink.contents().is_empty());

        logger.error("kept", &[]);
        assert!(!sink.contents().is_empty());
        logger.release();
    }

    #[test]
    fn test_exact_record_bytes() {
        let sink = MemorySink::new();
        let logger = Logger::with_pool(sink.clone(), Level::Debug, test_pool());

        logger.emit(
            Level::Error,
            "something went wrong",
            &[Attr::int("count", 2), Attr::string("info", "foo bar")],
        );

        assert_eq!(
            sink.contents(),
            "{\"message\":\"something went wrong\",\"level\":\"ERROR\",\"count\":2,\"info\":\"foo bar\"}"
        );
        logger.release();
    }

    #[test]
    fn test_branch_isolation() {
        let sink = MemorySink::new();
        let logger = Logger::with_pool(sink.clone(), Level::Debug, test_pool());

        let with_a = logger.branch(&[Attr::string("a", "1")]);
        let _discarded = with_a.branch(&[Attr::string("b", "2")]);

        with_a.debug("test message", &[Attr::int("int", 445)]);

        let out = sink.contents();
        assert!(out.contains("\"a\":\"1\""));
        assert!(!out.contains("\"b\""), "discarded branch leaked: {}", out);
        assert!(out.contains("\"int\":445"));
        logger.release();
    }

    #[test]
    fn test_branch_cascade() {
        let sink = MemorySink::new();
        let logger = Logger::with_pool(sink.clone(), Level::Debug, test_pool());

        let first = logger.branch(&[Attr::string("test1", "foo")]);
        let second = first.branch(&[Attr::string("test2", "bar")]);
        second.debug("test message", &[Attr::int("int", 445)]);

        let out = sink.take();
        assert!(out.contains("\"test1\":\"foo\""));
        assert!(out.contains("\"test2\":\"bar\""));

        // a fresh branch off `first` must not see the earlier sibling
        let third = first.branch(&[Attr::string("test3", "baz")]);
        third.debug("again", &[]);
        let out = sink.contents();
        assert!(out.contains("\"test1\":\"foo\""));
        assert!(out.contains("\"test3\":\"baz\""));
        assert!(!out.contains("\"test2\""), "sibling leaked: {}", out);
        logger.release();
    }

    #[test]
    fn test_sequenced_reuse_no_leakage() {
        let sink = MemorySink::new();
        let logger = Logger::with_pool(sink.clone(), Level::Debug, test_pool())
            .branch(&[Attr::string("foo", "bar")]);

        logger.error("first", &[Attr::int("count", 2)]);
        let first = sink.take();
        assert!(first.contains("\"foo\":\"bar\""));
        assert!(first.contains("\"count\":2"));

        logger.error("second", &[Attr::int("iter_cnt", 12)]);
        let second = sink.take();
        assert!(second.contains("\"foo\":\"bar\""));
        assert!(second.contains("\"iter_cnt\":12"));
        assert!(!second.contains("\"count\""), "previous record leaked");
        logger.release();
    }

    #[test]
    fn test_release_makes_all_aliases_inert() {
        let sink = MemorySink::new();
        let pool = test_pool();
        let logger = Logger::with_pool(sink.clone(), Level::Debug, Arc::clone(&pool));
        let branched = logger.branch(&[Attr::string("foo", "bar")]);

        logger.release();

        logger.error("oops", &[]);
        branched.error("oops", &[]);
        assert!(sink.contents().is_empty());
        assert!(!branched.is_live());

        // releasing again through any alias is a no-op
        branched.release();
        logger.release();
        assert_eq!(pool.idle_count(), 1);
    }

    #[test]
    fn test_stale_alias_inert_after_recycling() {
        let sink = MemorySink::new();
        let pool = test_pool();

        let first = Logger::with_pool(sink.clone(), Level::Debug, Arc::clone(&pool));
        first.release();

        // the new lineage leases the recycled slot
        let second = Logger::with_pool(sink.clone(), Level::Debug, Arc::clone(&pool));
        first.error("stale", &[]);
        assert!(sink.contents().is_empty(), "stale alias wrote after recycle");

        second.error("live", &[]);
        assert!(sink.contents().contains("\"live\""));
        second.release();
    }

    #[test]
    fn test_branch_after_release_is_inert() {
        let sink = MemorySink::new();
        let logger = Logger::with_pool(sink.clone(), Level::Debug, test_pool());
        logger.release();

        let branched = logger.branch(&[Attr::string("a", "1")]);
        branched.error("nope", &[]);
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn test_metrics_counts() {
        let sink = MemorySink::new();
        let pool = test_pool();
        let logger = Logger::with_pool(sink, Level::Warning, Arc::clone(&pool));

        logger.error("kept", &[]);
        logger.warning("kept", &[]);
        logger.debug("filtered", &[]);

        assert_eq!(logger.metrics().records_emitted(), 2);
        assert_eq!(logger.metrics().records_filtered(), 1);
        assert_eq!(pool.metrics().pool_misses(), 1);
        logger.release();
    }

    #[test]
    fn test_builder() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .threshold(Level::Debug)
            .sink(sink.clone())
            .pool(test_pool())
            .build();

        assert_eq!(logger.threshold(), Level::Debug);
        logger.debug("built", &[]);
        assert!(sink.contents().contains("\"built\""));
        logger.release();
    }

    #[test]
    fn test_same_lineage_across_threads_keeps_records_intact() {
        let sink = MemorySink::new();
        let logger = Logger::with_pool(sink.clone(), Level::Debug, test_pool());
        let base = logger.branch(&[Attr::string("service", "api")]);

        let mut handles = Vec::new();
        for t in 0..4 {
            let alias = base.branch(&[Attr::int("thread", t)]);
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    alias.debug("tick", &[Attr::int("i", i)]);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let out = sink.contents();
        let records: Vec<&str> = out.split('\n').filter(|r| !r.is_empty()).collect();
        assert_eq!(records.len(), 200);
        for record in records {
            assert!(record.starts_with('{') && record.ends_with('}'), "torn record: {}", record);
            assert!(record.contains("\"service\":\"api\""));
        }
        logger.release();
    }
}

//! In-memory capture sink
//!
//! Shared record capture for tests and embedding scenarios where the
//! output must be inspected rather than persisted. Cloning shares the
//! captured records, so a test can keep one handle while the logger owns
//! the other.

use super::Sink;
use crate::core::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured records, one per write call.
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|r| String::from_utf8_lossy(r).into_owned())
            .collect()
    }

    /// All captured records joined by newlines (no trailing newline).
    pub fn contents(&self) -> String {
        self.records().join("\n")
    }

    /// Drain and return the captured contents.
    pub fn take(&self) -> String {
        let drained: Vec<Vec<u8>> = std::mem::take(&mut *self.records.lock());
        drained
            .iter()
            .map(|r| String::from_utf8_lossy(r).into_owned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().len()
    }
}

impl Sink for MemorySink {
    fn write(&mut self, record: &[u8]) -> Result<()> {
        self.records.lock().push(record.to_vec());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_records() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write(b"{\"a\":1}").unwrap();
        writer.write(b"{\"b\":2}").unwrap();

        assert_eq!(sink.record_count(), 2);
        assert_eq!(sink.records(), vec!["{\"a\":1}", "{\"b\":2}"]);
        assert_eq!(sink.contents(), "{\"a\":1}\n{\"b\":2}");
    }

    #[test]
    fn test_memory_sink_take_drains() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write(b"{\"a\":1}").unwrap();

        assert_eq!(sink.take(), "{\"a\":1}");
        assert_eq!(sink.record_count(), 0);
        assert!(sink.contents().is_empty());
    }
}

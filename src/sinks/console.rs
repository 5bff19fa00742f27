//! Console sink implementation

use super::Sink;
use crate::core::error::Result;
use std::io::Write;

/// Writes one record per line to stdout or stderr.
pub struct ConsoleSink {
    use_stderr: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_stderr: false }
    }

    /// A console sink targeting stderr instead of stdout.
    pub fn stderr() -> Self {
        Self { use_stderr: true }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &[u8]) -> Result<()> {
        if self.use_stderr {
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            handle.write_all(record)?;
            handle.write_all(b"\n")?;
        } else {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(record)?;
            handle.write_all(b"\n")?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.use_stderr {
            std::io::stderr().flush()?;
        } else {
            std::io::stdout().flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

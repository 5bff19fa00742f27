//! File sink implementation

use super::Sink;
use crate::core::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends one record per line to a file (JSONL).
pub struct FileSink {
    writer: BufWriter<File>,
    path: String,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.as_ref().display().to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &[u8]) -> Result<()> {
        self.writer.write_all(record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

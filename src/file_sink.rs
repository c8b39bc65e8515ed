// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed sink.

use crate::error::ConfigError;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A sink that appends formatted lines to a file.
///
/// The file is opened at configure time; an unusable path surfaces as
/// [`ConfigError::InvalidSink`] there. Write failures after that point are
/// swallowed: a full disk must not crash the host application.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    pub fn create(path: &Path) -> Result<Self, ConfigError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConfigError::InvalidSink {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_record(&self, record: LogRecord) {
        let mut file = self.file.lock();
        for part in record.parts {
            let _ = file.write_all(part.as_bytes());
        }
        let _ = file.write_all(b"\n");
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let sink = FileSink::create(&path).unwrap();

        let mut record = LogRecord::new(Level::Info);
        record.log("first line");
        sink.write_record(record);
        let mut record = LogRecord::new(Level::Info);
        record.log("second line");
        sink.write_record(record);
        sink.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn bad_path_fails_fast() {
        let err = FileSink::create(Path::new("/definitely/missing/dir/out.log"));
        assert!(matches!(err, Err(ConfigError::InvalidSink { .. })));
    }
}

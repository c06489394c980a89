//! Append-only encrypted record log

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};

use tracing::{debug, warn};

use super::PersistenceRoot;
use crate::crypto::{encrypt, EncryptedRecord, EncryptionKey};
use crate::error::Result;
use crate::generator::Password;

/// Destination for record lines that can undo a failed write
pub(crate) trait RecordSink: Write {
    /// Current end of the log in bytes
    fn end_offset(&mut self) -> io::Result<u64>;

    /// Final byte of the log, `None` when empty
    fn last_byte(&mut self) -> io::Result<Option<u8>>;

    /// Push written bytes to stable storage
    fn sync(&mut self) -> io::Result<()>;

    /// Cut the log back to `len` bytes
    fn truncate_to(&mut self, len: u64) -> io::Result<()>;
}

impl RecordSink for File {
    fn end_offset(&mut self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn last_byte(&mut self) -> io::Result<Option<u8>> {
        let len = self.metadata()?.len();
        if len == 0 {
            return Ok(None);
        }
        // Writes still go to the end in append mode
        self.seek(SeekFrom::Start(len - 1))?;
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;
        Ok(Some(byte[0]))
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_data()
    }

    fn truncate_to(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Write one record as a newline-terminated line and sync it.
///
/// A log left without a trailing newline (an interrupted earlier write) gets
/// a separator first, so the fragment stays on its own line. If the write or
/// the sync fails, the sink is truncated back to where it was, so a failed
/// append never leaves its record behind.
pub(crate) fn write_record<S: RecordSink>(sink: &mut S, record: &EncryptedRecord) -> Result<()> {
    let start = sink.end_offset()?;

    let mut line = String::new();
    if start > 0 && sink.last_byte()? != Some(b'\n') {
        warn!(offset = start, "log ends in a partial line, starting a new one");
        line.push('\n');
    }
    line.push_str(&record.to_line());
    line.push('\n');

    let written = sink
        .write_all(line.as_bytes())
        .and_then(|_| sink.flush())
        .and_then(|_| sink.sync());
    if let Err(e) = written {
        warn!(error = %e, offset = start, "record append failed, rolling back");
        if let Err(rollback) = sink.truncate_to(start) {
            warn!(error = %rollback, "rollback of partial record failed");
        }
        return Err(e.into());
    }

    debug!(bytes = line.len(), "appended record");
    Ok(())
}

/// Encrypt `password` under `key` and append it to the record log of `root`.
///
/// Creates the root directory and the log if needed. Existing records are
/// never rewritten. An `Err` means the record is not in the log, so the
/// call can be retried without duplicating it.
pub fn append(
    root: &PersistenceRoot,
    key: &EncryptionKey,
    password: &Password,
) -> Result<EncryptedRecord> {
    let record = encrypt(key, password.as_bytes())?;

    fs::create_dir_all(root.dir())?;
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(root.records_path())?;

    write_record(&mut file, &record)?;

    Ok(record)
}

//! Append-only record store for per-step diagnostics
//!
//! Each append opens the file, writes one line, and closes it before
//! returning, so there is no buffered cross-call state: a crash between
//! calls loses at most the in-flight line. Single writer; concurrent
//! external readers may observe a partial final line.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Truncate-or-create the backing file, discarding any previous run's
    /// records. This is the destructive setup step, so it is logged.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        log::info!("truncating record store at {}", path.display());
        File::create(&path)?;
        Ok(Self { path })
    }

    /// Append one line as a self-contained scoped write.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(f, "{line}")?;
        f.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. Every
//! write goes to a temporary file in the target's directory and is renamed
//! over the target only once it is complete and synced.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ExpenseError, ExpenseResult};

/// Create the parent directory of `path` if it does not exist yet
pub fn ensure_parent<P: AsRef<Path>>(path: P) -> ExpenseResult<()> {
    let path = path.as_ref();
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| ExpenseError::storage("create directory", parent, e)),
        _ => Ok(()),
    }
}

/// Open a CSV file for reading, returning `None` if the file doesn't exist
pub fn open_csv<P: AsRef<Path>>(path: P) -> ExpenseResult<Option<csv::Reader<File>>> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ExpenseError::storage("read", path, e)),
    };

    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    Ok(Some(reader))
}

/// Write a CSV file atomically (write to temp, then rename)
///
/// `write` receives a writer with header handling disabled; it must emit the
/// header record itself. If `write` fails, or anything after it does, the
/// target is left as it was and the temporary file is removed.
pub fn write_csv_atomic<P, F>(path: P, write: F) -> ExpenseResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut csv::Writer<&mut File>) -> csv::Result<()>,
{
    let path = path.as_ref();

    ensure_parent(path)?;

    // Create temp file in same directory (important for atomic rename)
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| ExpenseError::storage("create temporary file for", path, e))?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(temp.as_file_mut());

        write(&mut writer).map_err(|e| ExpenseError::storage("write to", path, e.into()))?;

        writer
            .flush()
            .map_err(|e| ExpenseError::storage("flush", path, e))?;
    }

    // Sync to disk before rename
    temp.as_file()
        .sync_all()
        .map_err(|e| ExpenseError::storage("sync", path, e))?;

    // Dropping the returned temp file on failure deletes it
    temp.persist(path)
        .map_err(|e| ExpenseError::storage("replace", path, e.error))?;

    Ok(())
}

/// Write raw bytes to a file atomically
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> ExpenseResult<()> {
    let path = path.as_ref();

    ensure_parent(path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| ExpenseError::storage("create temporary file for", path, e))?;

    io::Write::write_all(&mut temp, contents)
        .map_err(|e| ExpenseError::storage("write to", path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| ExpenseError::storage("sync", path, e))?;
    temp.persist(path)
        .map_err(|e| ExpenseError::storage("replace", path, e.error))?;

    Ok(())
}

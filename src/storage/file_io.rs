//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Read JSON from a file
///
/// A missing file yields `Ok(None)`. A file that exists but does not parse
/// is reported as [`PlannerError::CorruptStore`]; plain I/O failures map to
/// [`PlannerError::Persistence`].
pub fn read_json<T, P>(path: P) -> PlannerResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path).map_err(|e| {
        PlannerError::Persistence(format!("failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| PlannerError::CorruptStore(format!("{}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all, so a crash
/// or power failure mid-write cannot corrupt existing data.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> PlannerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PlannerError::Persistence(format!(
                "failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| PlannerError::Persistence(format!("failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| PlannerError::Persistence(format!("failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| PlannerError::Persistence(format!("failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PlannerError::Persistence(format!("failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up the temp file if the rename fails
        let _ = fs::remove_file(&temp_path);
        PlannerError::Persistence(format!("failed to rename temp file: {}", e))
    })?;

    Ok(())
}

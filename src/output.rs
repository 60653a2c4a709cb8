use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, StaticStoreError};

/// Writes `value` as compact JSON with no trailing newline.
pub fn write_compact<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

pub fn write_stdout<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    write_compact(stdout.lock(), value)
}

/// Writes `value` to `path`, creating parent directories as needed.
pub fn write_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StaticStoreError::file(parent, e))?;
    }
    let file = File::create(path).map_err(|e| StaticStoreError::file(path, e))?;
    write_compact(file, value)
}

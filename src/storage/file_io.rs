//! Table files on disk
//!
//! Each table (`contas.json`, `situacoes.json`) is one pretty-printed JSON
//! document. A table whose file does not exist yet reads as empty; writes go
//! through a sibling `.tmp` file that replaces the table only once complete.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ContaError, ContaResult};

/// Load a table, or its empty value when the file is missing
pub fn load_table<T, P>(path: P) -> ContaResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(table_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| table_error("parse", path, e))
}

/// Replace a table with `data`
///
/// A failed save leaves the previous table untouched and removes its
/// temporary file.
pub fn save_table<T, P>(path: P, data: &T) -> ContaResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| table_error("create directory for", path, e))?;
    }

    // Renaming within one directory is what makes the swap atomic
    let temp = temp_path(path);
    let result = write_synced(&temp, data).and_then(|()| {
        fs::rename(&temp, path).map_err(|e| table_error("replace", path, e))
    });
    if result.is_err() && temp.is_file() {
        let _ = fs::remove_file(&temp);
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_synced<T: Serialize>(temp: &Path, data: &T) -> ContaResult<()> {
    let file = File::create(temp).map_err(|e| table_error("create", temp, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| table_error("write", temp, e))?;
    writer.flush().map_err(|e| table_error("flush", temp, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| table_error("sync", temp, e))
}

fn table_error(action: &str, path: &Path, err: impl std::fmt::Display) -> ContaError {
    ContaError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

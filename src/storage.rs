//! JSON I/O for the trigram table.
//!
//! The artifact is a single JSON object, one `"KEY": "label"` entry per
//! trigram in generation order. Pretty output uses 4-space indentation.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{TableError, TableResult};
use crate::table::TrigramTable;
use crate::types::{Category, Trigram};

/// Rendering of the serialized table. Formatting is cosmetic; keys, labels
/// and entry order are identical in both.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

/// Render the table to JSON bytes.
pub fn to_json_bytes(table: &TrigramTable, format: OutputFormat) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(32 * table.len());
    match format {
        OutputFormat::Pretty => {
            let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
            table.serialize(&mut ser)?;
        }
        OutputFormat::Compact => serde_json::to_writer(&mut buf, table)?,
    }
    Ok(buf)
}

/// Write the table to `path`, creating parent directories as needed.
pub fn write_table(table: &TrigramTable, path: &Path, format: OutputFormat) -> TableResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| TableError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let bytes = to_json_bytes(table, format).map_err(|source| TableError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source| TableError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::info!(
        path = %path.display(),
        entries = table.len(),
        bytes = bytes.len(),
        "wrote trigram table"
    );
    Ok(())
}

/// Load a persisted table, keeping the file's entry order.
///
/// Every key must be a valid trigram key; unknown labels fail JSON decoding.
pub fn load_table(path: &Path) -> TableResult<TrigramTable> {
    let data = fs::read(path).map_err(|source| TableError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: IndexMap<String, Category> =
        serde_json::from_slice(&data).map_err(|source| TableError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(key) = entries.keys().find(|k| Trigram::from_key(k).is_none()) {
        return Err(TableError::UnknownKey {
            path: path.to_path_buf(),
            key: key.clone(),
        });
    }

    tracing::debug!(path = %path.display(), entries = entries.len(), "loaded trigram table");
    Ok(TrigramTable::from_entries(entries))
}

//! Semicolon-delimited CSV persistence for scraped result sets.
//!
//! Files use the fixed four-column schema from [`crate::types::CSV_COLUMNS`].
//! The header row is written even for an empty set so the schema survives a
//! zero-record scrape. Reads tolerate the legacy export encoding: files that
//! are not valid UTF-8 are decoded as ISO-8859-1 before parsing.

use std::path::Path;

use thiserror::Error;

use crate::types::{ProductRecord, ResultSet, CSV_COLUMNS};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error for {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Writes a result set to `path` as semicolon-delimited UTF-8 CSV with the
/// four French column headers in fixed order.
///
/// # Errors
///
/// Returns [`StoreError`] if the file cannot be created or a row fails to
/// serialize.
pub fn write_csv(path: &Path, set: &ResultSet) -> Result<(), StoreError> {
    let as_store_error = |source: csv::Error| StoreError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        // The header is written explicitly below so an empty set still gets one.
        .has_headers(false)
        .from_path(path)
        .map_err(as_store_error)?;

    writer.write_record(CSV_COLUMNS).map_err(as_store_error)?;
    for record in set {
        writer.serialize(record).map_err(as_store_error)?;
    }
    writer.flush().map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

/// Reads a semicolon-delimited CSV file into a [`ResultSet`].
///
/// A missing file is a non-fatal condition: it yields an empty,
/// correctly-shaped result set and a warning, never an error.
///
/// # Errors
///
/// Returns [`StoreError`] if the file exists but cannot be read or a row
/// fails to parse against the four-column schema.
pub fn read_csv(path: &Path) -> Result<ResultSet, StoreError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "data file not found; returning an empty result set");
        return Ok(ResultSet::new());
    }

    let bytes = std::fs::read(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let decoded = decode_lossy(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(decoded.as_bytes());

    let mut set = ResultSet::new();
    for row in reader.deserialize::<ProductRecord>() {
        let record = row.map_err(|source| StoreError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        set.push(record);
    }
    Ok(set)
}

/// Decodes file bytes as UTF-8, falling back to ISO-8859-1 for legacy
/// exports. Latin-1 maps every byte to the same code point, so the fallback
/// is total and lossless.
fn decode_lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

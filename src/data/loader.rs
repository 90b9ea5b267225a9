use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use super::model::{DatasetCollection, DatasetKind, Table};
use crate::config::resolve_data_root;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures surfaced while loading a dataset file.
///
/// `NotFound` is the only variant the batch loader downgrades to a warning;
/// everything else propagates to the caller untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} file not found at: {}", .kind.title(), .path.display())]
    NotFound { kind: DatasetKind, path: PathBuf },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Single-dataset loader
// ---------------------------------------------------------------------------

/// Load one dataset from `data_dir` (default: `{data root}/raw`) under
/// `filename` (default: the kind's filename).
///
/// The composed path must point at an existing regular file; otherwise the
/// call fails with [`LoadError::NotFound`] carrying the attempted path.
/// Parsing is delegated to the `csv` crate and a malformed file fails
/// however the parser reports it. The whole file is materialised in memory
/// before returning.
pub fn load_dataset(
    kind: DatasetKind,
    filename: Option<&str>,
    data_dir: Option<&Path>,
) -> Result<Table, LoadError> {
    let dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => resolve_data_root().join("raw"),
    };
    let path = dir.join(filename.unwrap_or(kind.default_filename()));

    if !path.is_file() {
        return Err(LoadError::NotFound { kind, path });
    }

    info!("Loading {} from {}", kind, path.display());

    let mut reader = csv::Reader::from_path(&path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    let table = Table::new(columns, rows);

    info!("Loaded {} {}", table.len(), kind.noun());
    Ok(table)
}

/// Load the ratings data.
pub fn load_ratings(filename: Option<&str>, data_dir: Option<&Path>) -> Result<Table, LoadError> {
    load_dataset(DatasetKind::Ratings, filename, data_dir)
}

/// Load the books data.
pub fn load_books(filename: Option<&str>, data_dir: Option<&Path>) -> Result<Table, LoadError> {
    load_dataset(DatasetKind::Books, filename, data_dir)
}

/// Load the to-read data.
pub fn load_to_read(filename: Option<&str>, data_dir: Option<&Path>) -> Result<Table, LoadError> {
    load_dataset(DatasetKind::ToRead, filename, data_dir)
}

/// Load the book tags data.
pub fn load_book_tags(filename: Option<&str>, data_dir: Option<&Path>) -> Result<Table, LoadError> {
    load_dataset(DatasetKind::BookTags, filename, data_dir)
}

/// Load the tags data.
pub fn load_tags(filename: Option<&str>, data_dir: Option<&Path>) -> Result<Table, LoadError> {
    load_dataset(DatasetKind::Tags, filename, data_dir)
}

// ---------------------------------------------------------------------------
// Batch loader
// ---------------------------------------------------------------------------

/// Load every dataset kind in order, tolerating missing files.
///
/// A missing file is logged and its kind simply omitted from the result, so
/// the returned collection may be empty. Any other failure (a malformed
/// file, a permission error) aborts the remaining loads and propagates.
pub fn load_all(data_dir: Option<&Path>) -> Result<DatasetCollection, LoadError> {
    let mut collection = DatasetCollection::new();
    for kind in DatasetKind::ALL {
        match load_dataset(kind, None, data_dir) {
            Ok(table) => {
                collection.insert(kind, table);
            }
            Err(err @ LoadError::NotFound { .. }) => warn!("{err}"),
            Err(err) => return Err(err),
        }
    }
    Ok(collection)
}

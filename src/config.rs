use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Data root used when `DATA_PATH` is not set.
const DEFAULT_DATA_ROOT: &str = "./data";

/// Directory holding the corpus data, from the `DATA_PATH` environment
/// variable or the default.
///
/// The path is not checked for existence here; callers append `raw/` and a
/// filename and validate the final file path themselves.
pub fn resolve_data_root() -> PathBuf {
    data_root_from(env::var_os("DATA_PATH"))
}

/// Applies the default when the variable is absent or empty.
fn data_root_from(value: Option<OsString>) -> PathBuf {
    match value {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => PathBuf::from(DEFAULT_DATA_ROOT),
    }
}

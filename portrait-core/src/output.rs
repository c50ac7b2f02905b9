use crate::error::OutputError;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn to_json_string<T: Serialize>(value: &T) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Write `value` as pretty JSON to `path` in one go, creating parent
/// directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), OutputError> {
    let json = to_json_string(value)?;

    let to_write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, json).map_err(to_write_error)
}

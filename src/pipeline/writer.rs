use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;

/// Sibling test path: `foo/bar.js` -> `foo/bar.test.js`.
///
/// Only a trailing `.js` is replaced; any other name gets `.test.js`
/// appended (`bar.ts` -> `bar.ts.test.js`).
pub fn test_path_for(source: &Path) -> PathBuf {
    let mut name = match (source.file_stem(), source.extension()) {
        (Some(stem), Some(ext)) if ext == OsStr::new("js") => stem.to_os_string(),
        _ => source
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_default(),
    };
    name.push(".test.js");
    source.with_file_name(name)
}

/// Create or truncate `path` and write `code` to it.
pub fn write_test_file(path: &Path, code: &str) -> Result<(), GenerateError> {
    fs::write(path, code).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

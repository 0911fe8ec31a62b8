use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::GenerateError;

/// A JavaScript file read from disk.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path exactly as given on the command line
    pub original: String,
    /// Absolute path resolved against the working directory
    pub path: PathBuf,
    pub content: String,
}

/// Resolve `path_arg` against the current directory and read the file.
///
/// The existence check and the read are separate steps; a file removed in
/// between surfaces as [`GenerateError::Read`].
pub fn resolve_input(path_arg: &str) -> Result<SourceFile, GenerateError> {
    if path_arg.is_empty() {
        return Err(GenerateError::Usage);
    }

    let path = std::path::absolute(path_arg).map_err(|source| GenerateError::Read {
        path: PathBuf::from(path_arg),
        source,
    })?;

    if !path.exists() {
        return Err(GenerateError::NotFound { path });
    }
    if !path.is_file() {
        return Err(GenerateError::NotAFile { path });
    }

    let content = fs::read_to_string(&path).map_err(|source| GenerateError::Read {
        path: path.clone(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    Ok(SourceFile {
        original: path_arg.to_string(),
        path,
        content,
    })
}

//! Filesystem checks for the two paths the tool touches: the config file it
//! reads and the report destination it may write.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest config file the loader will read (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Why a config path cannot be read
#[derive(Debug, Error)]
pub enum ConfigPathError {
    #[error("{0} does not exist or cannot be inspected: {1}")]
    Inaccessible(PathBuf, std::io::Error),

    #[error("Security: {0} is a symbolic link. Config files are only read from regular files.")]
    Symlink(PathBuf),

    #[error("{0} is not a regular file")]
    NotAFile(PathBuf),

    #[error("Security: {path} is too large ({size} bytes). Maximum allowed size is {max} bytes.")]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}

/// Why a report destination cannot be written
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutputTargetError {
    #[error("Parent directory does not exist: {0}")]
    MissingParent(PathBuf),

    #[error("Security: {0} is a symbolic link. Reports are never written through symbolic links.")]
    Symlink(PathBuf),

    #[error("Output path is a directory")]
    Directory,
}

/// Checks that `path` is a regular, non-symlink config file of acceptable
/// size and returns its length in bytes.
///
/// The link itself is inspected (`symlink_metadata`), never its target.
pub fn check_config_file(path: &Path) -> Result<u64, ConfigPathError> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| ConfigPathError::Inaccessible(path.to_path_buf(), e))?;

    if metadata.is_symlink() {
        return Err(ConfigPathError::Symlink(path.to_path_buf()));
    }
    if !metadata.is_file() {
        return Err(ConfigPathError::NotAFile(path.to_path_buf()));
    }
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigPathError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_CONFIG_FILE_SIZE,
        });
    }

    Ok(metadata.len())
}

/// Checks that a report could be written to `path` without touching it.
///
/// A path that does not exist yet is fine as long as its parent directory
/// does. An existing path must be a plain file.
pub fn check_output_target(path: &Path) -> Result<(), OutputTargetError> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(OutputTargetError::MissingParent(parent.to_path_buf()));
        }
    }

    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => {
            Err(OutputTargetError::Symlink(path.to_path_buf()))
        }
        Ok(metadata) if metadata.is_dir() => Err(OutputTargetError::Directory),
        _ => Ok(()),
    }
}

//! File access relative to the executable.
//!
//! Sample assets live next to the binary. During development the binary sits
//! in `target/<profile>/examples/`, so lookups fall back to the workspace
//! `assets/` directory.

use std::path::{Path, PathBuf};

use crate::errors::{PrimerError, Result};

/// Workspace asset root, baked in at compile time.
const WORKSPACE_ASSETS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets");

/// Directory containing the running executable.
pub fn execution_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| PrimerError::FileNotFound(exe.display().to_string()))
}

/// Candidate locations for `relative`, in lookup order.
#[must_use]
pub fn search_paths(relative: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    if relative.is_absolute() {
        paths.push(relative.to_path_buf());
        return paths;
    }
    if let Ok(dir) = execution_dir() {
        paths.push(dir.join(relative));
    }
    paths.push(Path::new(WORKSPACE_ASSETS).join(relative));
    paths
}

/// Resolves `relative` to the first existing file in [`search_paths`].
pub fn resolve_asset(relative: impl AsRef<Path>) -> Result<PathBuf> {
    let relative = relative.as_ref();
    search_paths(relative)
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| PrimerError::FileNotFound(relative.display().to_string()))
}

/// Reads a whole file into memory.
pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| PrimerError::FileLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a whole UTF-8 text file.
pub fn load_text_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| PrimerError::FileLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves an asset and reads its bytes.
pub fn load_asset(relative: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = resolve_asset(relative)?;
    log::debug!("Loading asset {}", path.display());
    load_binary_file(path)
}

/// Resolves an asset and reads it as text.
pub fn load_asset_text(relative: impl AsRef<Path>) -> Result<String> {
    let path = resolve_asset(relative)?;
    log::debug!("Loading asset {}", path.display());
    load_text_file(path)
}

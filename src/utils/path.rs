//! Path resolution against the project root.

use std::{
    env,
    path::{Path, PathBuf},
};

/// Resolve a configured path against `root`.
///
/// `~` is expanded first; relative results are joined onto `root`; the result
/// is then normalized to an absolute path.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
    if expanded.is_relative() {
        normalize_path(&root.join(expanded))
    } else {
        normalize_path(&expanded)
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        // For non-existent paths, manually make them absolute
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

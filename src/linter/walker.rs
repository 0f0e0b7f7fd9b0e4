//! Manifest tree traversal.

use std::path::{Path, PathBuf};

/// Collect every `.yml` file under `root`, recursively.
///
/// Entries are yielded in a name-sorted depth-first order so that a run
/// over an unchanged tree produces identical output. A missing root is
/// not an error: the check simply has nothing to look at.
pub fn manifest_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if !root.exists() {
        log::warn!("manifest root {} does not exist", root.display());
        return files;
    }

    for entry in walkdir::WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("yml") {
            files.push(path.to_path_buf());
        }
    }

    files
}

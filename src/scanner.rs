//! Directory traversal and lossy line reading.

use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

/// Result of walking one area root.
pub struct ScanResult {
    /// Matching files in deterministic (name-sorted) walk order.
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be accessed.
    pub skipped_count: usize,
}

/// Recursively collect files under `root` whose extension (including the
/// leading dot, case-sensitive) is in `extensions`.
///
/// A directory whose name equals one of `skip_dirs` prunes its whole subtree,
/// so build artifacts are never descended into. Entries are visited in sorted
/// order so repeated runs over an unchanged tree produce identical output.
pub fn collect_files(root: &Path, extensions: &[String], skip_dirs: &[String]) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !skip_dirs.iter().any(|d| d == name))
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => {
                skipped_count += 1;
                continue;
            }
        };
        if entry.file_type().is_file() && has_accepted_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_accepted_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions.iter().any(|a| a.strip_prefix('.') == Some(ext)),
        None => false,
    }
}

/// Outcome of reading one file's lines.
///
/// An explicit result so callers make the skip-on-failure decision visibly
/// instead of it hiding inside error suppression.
pub enum FileRead {
    /// Lines decoded lossily: undecodable bytes become U+FFFD, never an error.
    Lines(Vec<String>),
    /// The file could not be opened or read; the reason is kept for verbose output.
    Unreadable(String),
}

pub fn read_lines(path: &Path) -> FileRead {
    match fs::read(path) {
        Ok(bytes) => FileRead::Lines(
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect(),
        ),
        Err(err) => FileRead::Unreadable(err.to_string()),
    }
}

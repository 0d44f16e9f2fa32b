//! Assembly-version propagation across marker files.
//!
//! Walks the project tree, finds every marker file by name, and rewrites its
//! `AssemblyVersion("…")` and `AssemblyFileVersion("…")` declarations to the
//! new version. Matching is tolerant of 1-3 dot-separated numeric or `*`
//! components with an optional pre-release suffix, so partially-filled or
//! wildcard declarations are still picked up.

use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::Result;
use crate::version::Version;

fn declaration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(AssemblyVersion|AssemblyFileVersion)\("(?:\d+|\*)(?:\.(?:\d+|\*)){0,2}(?:-\w+)?"\)"#)
            .expect("valid regex")
    })
}

/// Rewrite the version declarations in every marker file under `root`.
///
/// Every marker file is rewritten even when its declarations already carry the
/// new version; a no-op write is not an error. There is no rollback: an I/O
/// failure partway through aborts the run with earlier files already updated.
///
/// # Arguments
/// * `root` - Directory to walk recursively
/// * `marker_filename` - File name identifying marker files (e.g., "AssemblyInfo.cs")
/// * `version` - Version to write into both declarations
///
/// # Returns
/// Sorted list of the files that were rewritten
pub fn propagate(root: &Path, marker_filename: &str, version: &Version) -> Result<Vec<PathBuf>> {
    let mut updated = Vec::new();

    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_symlink() {
                continue;
            }
            let path = entry.path();
            if file_type.is_dir() {
                stack.push(path);
                continue;
            }
            if entry.file_name().to_str() == Some(marker_filename) {
                rewrite_marker_file(&path, version)?;
                updated.push(path);
            }
        }
    }

    updated.sort();
    Ok(updated)
}

/// Replace both version declarations in a single marker file.
fn rewrite_marker_file(path: &Path, version: &Version) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let rewritten = declaration_re().replace_all(&content, |caps: &Captures| {
        format!("{}(\"{}\")", &caps[1], version)
    });
    fs::write(path, rewritten.as_bytes())?;
    Ok(())
}

//! Package manifest loading and rewriting.
//!
//! The manifest carries the canonical version in a `<version>` element and a
//! multi-line `<releaseNotes>` element. Both are rewritten by splicing bytes at
//! the regex match range, so every other byte of the file survives untouched
//! and note text containing `$` or backslashes is written verbatim.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{ReleaseBumpError, Result};
use crate::version::Version;

fn version_field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<version>([^<]*)</version>").expect("valid regex"))
}

fn release_notes_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<releaseNotes>(.*?)</releaseNotes>").expect("valid regex"))
}

/// A package manifest held in memory between load and save.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    content: String,
}

impl Manifest {
    /// Load the manifest from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Ok(Manifest {
            path: path.to_path_buf(),
            content,
        })
    }

    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Read the current version out of the `<version>` field.
    pub fn current_version(&self) -> Result<Version> {
        let captures = version_field_re().captures(&self.content).ok_or_else(|| {
            ReleaseBumpError::manifest(format!(
                "No <version> field found in '{}'",
                self.path.display()
            ))
        })?;
        Version::parse(captures[1].trim())
    }

    /// Overwrite the `<version>` field with the serialized new version.
    pub fn set_version(&mut self, version: &Version) -> Result<()> {
        let range = version_field_re()
            .captures(&self.content)
            .and_then(|c| c.get(1))
            .ok_or_else(|| {
                ReleaseBumpError::manifest(format!(
                    "No <version> field found in '{}'",
                    self.path.display()
                ))
            })?
            .range();
        self.content.replace_range(range, &version.to_string());
        Ok(())
    }

    /// Prepend a release note to the `<releaseNotes>` field.
    ///
    /// The header uses the numeric triple only; the pre-release label is
    /// intentionally left out of release-note headers.
    pub fn prepend_release_note(&mut self, version: &Version, note: &str) -> Result<()> {
        let existing = release_notes_re()
            .captures(&self.content)
            .and_then(|c| c.get(1))
            .ok_or_else(|| {
                ReleaseBumpError::manifest(format!(
                    "No <releaseNotes> field found in '{}'",
                    self.path.display()
                ))
            })?;

        let header = format!("v{}: {}", version.base(), note);
        let body = if existing.as_str().trim().is_empty() {
            header
        } else {
            format!("{}\n\n{}", header, existing.as_str())
        };
        let range = existing.range();
        self.content.replace_range(range, &body);
        Ok(())
    }

    /// Write the manifest back to its original path.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, &self.content)?;
        Ok(())
    }
}

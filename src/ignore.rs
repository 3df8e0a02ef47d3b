//! Ignore pattern handling for custom template directories.
//! Processes .artisanignore files to exclude specific paths from template
//! loading, similar to .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Patterns excluded from every template directory
pub const DEFAULT_IGNORE_PATTERNS: [&str; 4] =
    ["**/.git/**", "**/.DS_Store", "**/*~", "**/*.swp"];

/// Reads and processes an .artisanignore file into a set of glob patterns.
///
/// # Notes
/// - If the file doesn't exist, only the default patterns apply
/// - Each non-blank, non-comment line is a separate glob pattern
/// - Invalid patterns result in an `IgnoreError`
///
/// # Example
/// ```ignore
/// # Contents of .artisanignore:
/// *.bak
/// drafts/
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(Glob::new(pattern).map_err(|e| {
            Error::IgnoreError(format!(".artisanignore loading failed: {}", e))
        })?);
    }
    if let Ok(contents) = read_to_string(ignore_path.as_ref()) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::IgnoreError(format!(".artisanignore loading failed: {}", e))
            })?);
        }
    } else {
        debug!(".artisanignore does not exist")
    }
    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!(".artisanignore loading failed: {}", e)))
}

//! Materialization of the generated output tree.
//! Renders each template's path pattern and content, creates ancestor
//! directories and writes files, notifying a [`Reporter`] after each
//! step. All writes are serialized; the run stops at the first failure.

use crate::context::SubstitutionContext;
use crate::error::{Error, Result};
use crate::render::render;
use crate::report::Reporter;
use crate::template::TemplateStore;
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Collision policy applied uniformly to one generation run: the module
/// root directory and every file write obey the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Existing destinations abort the run with `DestinationExists`
    Fail,
    /// Existing destinations are replaced
    Overwrite,
}

/// Checks that a rendered relative path is safe to join under the module
/// root: non-empty, relative, free of parent-dir components and `//`.
pub fn is_rendered_path_valid(path: &str) -> bool {
    if path.trim().is_empty() || path.contains("//") {
        return false;
    }
    Path::new(path).components().all(|c| matches!(c, Component::Normal(_)))
}

/// Writes content to a hidden sibling temp file and renames it over the
/// destination, so a crash mid-write cannot leave a half-written file
/// distinguishable from an absent one.
fn write_atomic(dest: &Path, content: &str) -> Result<()> {
    let file_name = dest.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        Error::TemplateError(format!("invalid destination file name: {}", dest.display()))
    })?;
    let tmp = dest.with_file_name(format!(".{}.tmp", file_name));
    fs::write(&tmp, content)
        .map_err(|e| Error::WriteError { dest: dest.display().to_string(), source: e })?;
    if let Err(e) = fs::rename(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::WriteError { dest: dest.display().to_string(), source: e });
    }
    Ok(())
}

/// Materializes the rendered templates of one generation run.
pub struct Processor<'a> {
    store: &'a TemplateStore,
    context: &'a SubstitutionContext,
    output_root: PathBuf,
    policy: OverwritePolicy,
    reporter: &'a dyn Reporter,
}

impl<'a> Processor<'a> {
    pub fn new(
        store: &'a TemplateStore,
        context: &'a SubstitutionContext,
        output_root: &Path,
        policy: OverwritePolicy,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self { store, context, output_root: output_root.to_path_buf(), policy, reporter }
    }

    /// Creates the module root directory.
    ///
    /// # Errors
    /// * `Error::DestinationExists` if the root is present under the
    ///   `Fail` policy
    pub fn prepare(&self) -> Result<()> {
        if self.output_root.exists() && self.policy == OverwritePolicy::Fail {
            return Err(Error::DestinationExists {
                dest: self.output_root.display().to_string(),
            });
        }
        fs::create_dir_all(&self.output_root).map_err(|e| Error::WriteError {
            dest: self.output_root.display().to_string(),
            source: e,
        })?;
        self.reporter.step(&format!("Module root at {}", self.output_root.display()));
        Ok(())
    }

    /// Renders and writes every template in the store, returning the
    /// concrete paths written. Missing canonical assets and unusable
    /// rendered paths are rejected before the first write; afterwards the
    /// run stops at the first I/O failure, whose error names the
    /// destination.
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        self.store.ensure_required()?;

        let mut planned = Vec::with_capacity(self.store.len());
        for template in self.store.iter() {
            let rendered_path = render(&template.path, self.context);
            if !is_rendered_path_valid(&rendered_path) {
                return Err(Error::TemplateError(format!(
                    "template '{}' renders to unusable path '{}'",
                    template.path, rendered_path
                )));
            }
            planned.push((rendered_path, template));
        }

        let mut written = Vec::with_capacity(planned.len());
        for (relative, template) in planned {
            let dest = self.output_root.join(&relative);
            debug!("rendering '{}' -> '{}'", template.path, dest.display());
            let content = render(&template.content, self.context);
            self.write_rendered(&dest, &content)?;
            self.reporter.step(&format!("Created {}", dest.display()));
            written.push(dest);
        }
        Ok(written)
    }

    fn write_rendered(&self, dest: &Path, content: &str) -> Result<()> {
        if dest.exists() && self.policy == OverwritePolicy::Fail {
            return Err(Error::DestinationExists { dest: dest.display().to_string() });
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::WriteError {
                dest: parent.display().to_string(),
                source: e,
            })?;
        }
        write_atomic(dest, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_rendered_path_valid() {
        assert!(is_rendered_path_valid("filename.txt"));
        assert!(is_rendered_path_valid("output/filename.txt"));
        assert!(!is_rendered_path_valid(""));
        assert!(!is_rendered_path_valid("   "));
        assert!(!is_rendered_path_valid("output//filename.txt"));
        assert!(!is_rendered_path_valid("/filename.txt"));
        assert!(!is_rendered_path_valid("../escape.txt"));
        assert!(!is_rendered_path_valid("a/../../escape.txt"));
    }
}

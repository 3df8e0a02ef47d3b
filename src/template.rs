//! Template assets and the template store.
//! The canonical asset set is embedded at compile time so it is always
//! available and versioned with the binary; a custom directory can be
//! loaded instead, mirroring the canonical layout.

use crate::constants::{IGNORE_FILE, REQUIRED_TEMPLATES};
use crate::error::{Error, Result};
use crate::ignore::parse_ignore_file;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// One boilerplate asset: a relative output path pattern and text
/// content, both possibly containing placeholder tokens. Immutable;
/// loaded once, read many times.
#[derive(Debug, Clone)]
pub struct Template {
    pub path: String,
    pub content: String,
}

/// Built-in template manifest: destination path pattern and embedded
/// content for every canonical asset.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("include/{{STEM}}_I.h", include_str!("../templates/include/module_I.h")),
    ("src/{{STEM}}.h", include_str!("../templates/src/module.h")),
    ("src/{{STEM}}.cpp", include_str!("../templates/src/module.cpp")),
    ("tests/{{STEM}}_test.cpp", include_str!("../templates/tests/module_test.cpp")),
    ("examples/{{STEM}}_demo.cpp", include_str!("../templates/examples/module_demo.cpp")),
    ("CMakeLists.txt", include_str!("../templates/CMakeLists.txt")),
    (".github/workflows/ci.yml", include_str!("../templates/ci.yml")),
    (".clang-format", include_str!("../templates/clang-format")),
    (".clang-tidy", include_str!("../templates/clang-tidy")),
    ("scripts/build.sh", include_str!("../templates/build.sh")),
    ("README.md", include_str!("../templates/README.md")),
];

/// Read-only, ordered collection of templates for one generation run.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    /// Returns the canonical built-in template set.
    pub fn builtin() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|(path, content)| Template {
                path: (*path).to_string(),
                content: (*content).to_string(),
            })
            .collect();
        Self { templates }
    }

    /// Loads templates from a custom directory in deterministic (sorted)
    /// order. Relative paths become path patterns verbatim, so file and
    /// directory names may carry tokens. Paths matching .artisanignore
    /// globs are skipped.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the directory does not exist
    /// * `Error::TemplateMissing` if a canonical asset is absent
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::ConfigError(format!(
                "template directory '{}' does not exist",
                dir.display()
            )));
        }
        let ignored = parse_ignore_file(dir.join(IGNORE_FILE))?;

        let mut templates = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(dir)
                .map_err(|e| Error::TemplateError(e.to_string()))?;
            let relative = relative.to_str().ok_or_else(|| {
                Error::TemplateError(format!(
                    "template path is not valid UTF-8: {}",
                    entry.path().display()
                ))
            })?;
            if relative == IGNORE_FILE || ignored.is_match(relative) {
                debug!("skipping ignored template path '{}'", relative);
                continue;
            }
            let content = fs::read_to_string(entry.path())?;
            templates.push(Template { path: relative.to_string(), content });
        }

        let store = Self { templates };
        store.ensure_required()?;
        Ok(store)
    }

    /// Looks a template up by its path pattern.
    ///
    /// # Errors
    /// * `Error::TemplateMissing` if no template carries this pattern
    pub fn get(&self, pattern: &str) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.path == pattern)
            .ok_or_else(|| Error::TemplateMissing { pattern: pattern.to_string() })
    }

    /// Verifies every canonical asset is present. Runs before anything is
    /// written so a broken store cannot leave partial output.
    pub fn ensure_required(&self) -> Result<()> {
        for pattern in REQUIRED_TEMPLATES {
            self.get(pattern)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

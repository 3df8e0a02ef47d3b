//! Layered configuration handling for artisan.
//! A configuration is assembled from up to three layers: the persisted
//! session file, an optional JSON configuration file, and command-line
//! flags. Later layers win field by field. The merged result becomes an
//! immutable [`GenerationRequest`].

use crate::cli::Args;
use crate::constants::DEFAULT_GTEST_URL;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Kind of library target declared in the generated CMakeLists.txt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LibraryKind {
    #[default]
    Static,
    Shared,
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryKind::Static => write!(f, "STATIC"),
            LibraryKind::Shared => write!(f, "SHARED"),
        }
    }
}

/// One configuration layer. Every field is optional so layers can be
/// merged; unset fields fall through to the defaults applied in
/// [`Config::into_request`].
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtest_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtest_is_local: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpp_std: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpp_std_req: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_cmds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib_type: Option<LibraryKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tidy_in_build: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpp_compiler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmake_generator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

fn overlay<T>(base: &mut Option<T>, layer: Option<T>) {
    if layer.is_some() {
        *base = layer;
    }
}

impl Config {
    /// Loads a configuration layer from a JSON file.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("cannot read config file '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("invalid config file '{}': {}", path.display(), e))
        })
    }

    /// Loads the persisted session layer. A missing or corrupt session
    /// file yields an empty layer.
    pub fn load_session(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(err) => {
                    debug!("ignoring corrupt session file '{}': {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persists this configuration so the next run can prefill from it.
    pub fn save_session(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("cannot serialize session: {}", e)))?;
        fs::write(path, json).map_err(Error::IoError)
    }

    /// Overlays another layer on top of this one; set fields win.
    pub fn merge(&mut self, layer: Config) {
        overlay(&mut self.project_name, layer.project_name);
        overlay(&mut self.namespace, layer.namespace);
        overlay(&mut self.prefix, layer.prefix);
        overlay(&mut self.suffix, layer.suffix);
        overlay(&mut self.output_dir, layer.output_dir);
        overlay(&mut self.gtest_url, layer.gtest_url);
        overlay(&mut self.gtest_is_local, layer.gtest_is_local);
        overlay(&mut self.author, layer.author);
        overlay(&mut self.description, layer.description);
        overlay(&mut self.cpp_std, layer.cpp_std);
        overlay(&mut self.cpp_std_req, layer.cpp_std_req);
        overlay(&mut self.export_cmds, layer.export_cmds);
        overlay(&mut self.lib_type, layer.lib_type);
        overlay(&mut self.tidy_in_build, layer.tidy_in_build);
        overlay(&mut self.cpp_compiler, layer.cpp_compiler);
        overlay(&mut self.cmake_generator, layer.cmake_generator);
        overlay(&mut self.overwrite, layer.overwrite);
    }

    /// Overlays command-line flags as the final, highest-precedence layer.
    /// Boolean switches overlay only when actually given.
    pub fn merge_args(&mut self, args: &Args) {
        overlay(&mut self.project_name, args.name.clone());
        overlay(&mut self.namespace, args.namespace.clone());
        overlay(&mut self.prefix, args.prefix.clone());
        overlay(&mut self.suffix, args.suffix.clone());
        overlay(&mut self.gtest_url, args.gtest_url.clone());
        overlay(&mut self.output_dir, args.output.clone());
        if args.gtest_local {
            self.gtest_is_local = Some(true);
        }
        if args.overwrite {
            self.overwrite = Some(true);
        }
    }

    /// Resolves the merged layers into an immutable generation request.
    ///
    /// # Errors
    /// * `Error::InvalidRequest` if no module name was supplied
    pub fn into_request(self) -> Result<GenerationRequest> {
        let project_name = self
            .project_name
            .ok_or_else(|| Error::InvalidRequest("a module name is required".to_string()))?;
        Ok(GenerationRequest {
            project_name,
            namespace: self.namespace,
            prefix: self.prefix.unwrap_or_default(),
            suffix: self.suffix.unwrap_or_default(),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            author: self.author.unwrap_or_else(|| "Artisan".to_string()),
            description: self
                .description
                .unwrap_or_else(|| "A module of great potential".to_string()),
            gtest_url: self.gtest_url.unwrap_or_else(|| DEFAULT_GTEST_URL.to_string()),
            gtest_is_local: self.gtest_is_local.unwrap_or(false),
            cpp_std: self.cpp_std.unwrap_or_else(|| "17".to_string()),
            cpp_std_required: self.cpp_std_req.unwrap_or(true),
            export_commands: self.export_cmds.unwrap_or(true),
            lib_type: self.lib_type.unwrap_or_default(),
            tidy_in_build: self.tidy_in_build.unwrap_or(false),
            cpp_compiler: self.cpp_compiler,
            cmake_generator: self.cmake_generator,
            overwrite: self.overwrite.unwrap_or(false),
        })
    }
}

/// Parameters of one generation run. Immutable after construction.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub project_name: String,
    /// Defaults to the project name when `None`
    pub namespace: Option<String>,
    pub prefix: String,
    pub suffix: String,
    pub output_dir: PathBuf,
    pub author: String,
    pub description: String,
    pub gtest_url: String,
    pub gtest_is_local: bool,
    pub cpp_std: String,
    pub cpp_std_required: bool,
    pub export_commands: bool,
    pub lib_type: LibraryKind,
    pub tidy_in_build: bool,
    pub cpp_compiler: Option<String>,
    pub cmake_generator: Option<String>,
    pub overwrite: bool,
}

impl GenerationRequest {
    /// Decorated module name used for the module root directory and file
    /// stems.
    pub fn stem(&self) -> String {
        format!("{}{}{}", self.prefix, self.project_name, self.suffix)
    }
}

//! Error handling for the artisan application.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while assembling a generation request or
/// materializing a module tree.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The generation request is malformed (empty or illegal project
    /// name, namespace, prefix or suffix)
    #[error("Invalid request: {0}.")]
    InvalidRequest(String),

    /// A required template is not present in the template store
    #[error("Template '{pattern}' is missing from the template store.")]
    TemplateMissing { pattern: String },

    /// A template is present but unusable (bad path pattern, bad encoding)
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// The destination already exists and the overwrite policy is `Fail`
    #[error("Destination '{dest}' already exists. Pass --overwrite to replace it.")]
    DestinationExists { dest: String },

    /// A file or directory could not be written; carries the destination
    /// so callers can report which file failed
    #[error("Failed to write '{dest}': {source}.")]
    WriteError { dest: String, source: io::Error },

    /// Represents errors during configuration or session file handling
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in .artisanignore pattern parsing
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),

    /// Represents errors during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience alias for results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}

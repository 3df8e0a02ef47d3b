//! Artisan generates boilerplate C++ module directory trees from a set of
//! text templates: public interface, private implementation, unit tests,
//! an example program, CMake build files, a CI workflow and lint/format
//! configs. Generation is driven by command-line flags, a JSON
//! configuration file, or an interactive wizard.

/// Command-line interface module for the artisan application
pub mod cli;

/// Layered configuration handling (session file, JSON config, CLI flags)
/// and the immutable generation request derived from it
pub mod config;

/// Common constants used across the application
pub mod constants;

/// Substitution context construction
/// Turns a generation request into the placeholder/value table
pub mod context;

/// Error types and handling for the artisan application
pub mod error;

/// Ignore patterns for custom template directories
/// Processes .artisanignore files to exclude specific paths
pub mod ignore;

/// Logger initialization
pub mod logger;

/// Materialization of the generated output tree
/// Renders path patterns and contents, creates directories, writes files
pub mod processor;

/// Literal placeholder rendering
pub mod render;

/// Progress narration for console output and embedders
pub mod report;

/// Template assets and the template store
/// Holds the built-in manifest and the custom directory loader
pub mod template;

/// Interactive configuration wizard
pub mod wizard;

//! Command-line interface implementation for artisan.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for artisan.
#[derive(Parser, Debug)]
#[command(author, version, about = "artisan: C++ module scaffolding tool", long_about = None)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the module to generate
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// C++ namespace for the generated sources (defaults to the module name)
    #[arg(long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Folder/file prefix
    #[arg(short, long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Folder/file suffix
    #[arg(short, long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// URL of the GoogleTest archive the generated CMake fetches
    #[arg(short, long, value_name = "URL")]
    pub gtest_url: Option<String>,

    /// Use a local GoogleTest checkout instead of fetching an archive
    #[arg(long)]
    pub gtest_local: bool,

    /// Directory the module tree is generated into
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Load templates from a custom directory instead of the built-in set
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Run without interactive prompts; fails if the module name is missing
    #[arg(long)]
    pub silent: bool,

    /// Overwrite an existing module directory
    #[arg(long)]
    pub overwrite: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

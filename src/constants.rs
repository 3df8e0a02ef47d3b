//! Common constants used throughout the artisan application.

/// File that persists the last accepted configuration between runs
pub const SESSION_FILE: &str = "last_session.json";

/// Ignore file recognized inside custom template directories
pub const IGNORE_FILE: &str = ".artisanignore";

/// GoogleTest release fetched by generated CMake when no URL is given
pub const DEFAULT_GTEST_URL: &str =
    "https://github.com/google/googletest/archive/refs/tags/v1.14.0.zip";

/// Template path patterns a usable template store must provide.
/// A store that cannot produce these cannot produce a buildable module.
pub const REQUIRED_TEMPLATES: [&str; 4] = [
    "include/{{STEM}}_I.h",
    "src/{{STEM}}.cpp",
    "tests/{{STEM}}_test.cpp",
    "CMakeLists.txt",
];

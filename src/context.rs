//! Substitution context construction.
//! Turns a [`GenerationRequest`] into the flat placeholder/value table
//! applied to template paths and contents. Building the context performs
//! all request validation; it has no side effects.

use crate::config::GenerationRequest;
use crate::error::{Error, Result};
use cruet::Inflector;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

/// Placeholder/value table for one generation run. Keys are the literal
/// token forms including delimiters, e.g. `{{PROJECT_NAME}}`. The `{{..}}`
/// delimiters guarantee no token literal is a substring of another, so
/// iteration order cannot change rendering results.
pub type SubstitutionContext = IndexMap<String, String>;

fn ident_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("valid pattern"))
}

/// Returns true when `s` is usable as a C++ identifier and as a file or
/// directory name: letters, digits and underscores only, not starting
/// with a digit. This rules out path separators and null bytes as well.
pub fn is_valid_identifier(s: &str) -> bool {
    ident_re().is_match(s)
}

fn validate(request: &GenerationRequest, namespace: &str) -> Result<()> {
    if request.project_name.is_empty() {
        return Err(Error::InvalidRequest("module name must not be empty".to_string()));
    }
    if !is_valid_identifier(&request.project_name) {
        return Err(Error::InvalidRequest(format!(
            "module name '{}' may use only letters, digits and underscores and must not start with a digit",
            request.project_name
        )));
    }
    if !is_valid_identifier(namespace) {
        return Err(Error::InvalidRequest(format!(
            "namespace '{}' may use only letters, digits and underscores and must not start with a digit",
            namespace
        )));
    }
    if !request.prefix.is_empty() && !is_valid_identifier(&request.prefix) {
        return Err(Error::InvalidRequest(format!("illegal prefix '{}'", request.prefix)));
    }
    if !request.suffix.is_empty() && !is_valid_identifier(&request.suffix) {
        return Err(Error::InvalidRequest(format!("illegal suffix '{}'", request.suffix)));
    }
    Ok(())
}

/// CMake FetchContent declaration for GoogleTest, either pointing at a
/// vendored checkout or at a downloadable release archive.
fn gtest_declaration(request: &GenerationRequest) -> String {
    if request.gtest_is_local {
        "FetchContent_Declare(\n    googletest\n    SOURCE_DIR ${CMAKE_CURRENT_SOURCE_DIR}/third_party/googletest\n)"
            .to_string()
    } else {
        format!(
            "FetchContent_Declare(\n    googletest\n    URL {}\n    DOWNLOAD_EXTRACT_TIMESTAMP TRUE\n)",
            request.gtest_url
        )
    }
}

/// Strips surrounding quotes and normalizes separators to forward slashes
/// so the path survives embedding in CMake arguments.
fn normalized_tool_path(raw: Option<&str>) -> String {
    raw.map(|p| p.trim().trim_matches('"').replace('\\', "/")).unwrap_or_default()
}

fn on_off(value: bool) -> String {
    if value { "ON" } else { "OFF" }.to_string()
}

/// Builds the substitution context for a generation request.
///
/// Deterministic: the same request always yields the same table, in the
/// same order.
///
/// # Errors
/// * `Error::InvalidRequest` if the module name is empty or any of the
///   name, namespace, prefix or suffix carries illegal characters
pub fn build_context(request: &GenerationRequest) -> Result<SubstitutionContext> {
    let namespace =
        request.namespace.clone().unwrap_or_else(|| request.project_name.clone());
    validate(request, &namespace)?;

    let stem = request.stem();
    let compiler_path = normalized_tool_path(request.cpp_compiler.as_deref());
    let compiler_arg = if compiler_path.is_empty() {
        String::new()
    } else {
        format!("-DCMAKE_CXX_COMPILER=\"{}\"", compiler_path)
    };
    let generator_name =
        request.cmake_generator.as_deref().map(str::trim).unwrap_or_default().to_string();
    let generator_arg = if generator_name.is_empty() {
        String::new()
    } else {
        format!("-G \"{}\"", generator_name)
    };

    let mut context = SubstitutionContext::new();
    context.insert("{{PROJECT_NAME}}".to_string(), request.project_name.clone());
    context.insert("{{NAMESPACE}}".to_string(), namespace);
    context.insert("{{PREFIX}}".to_string(), request.prefix.clone());
    context.insert("{{SUFFIX}}".to_string(), request.suffix.clone());
    context.insert("{{STEM_UPPER}}".to_string(), stem.to_screaming_snake_case());
    context.insert("{{STEM}}".to_string(), stem);
    context.insert("{{AUTHOR}}".to_string(), request.author.clone());
    context.insert("{{DESCRIPTION}}".to_string(), request.description.clone());
    context.insert("{{GTEST_DECLARATION}}".to_string(), gtest_declaration(request));
    context.insert("{{CPP_STD}}".to_string(), request.cpp_std.clone());
    context.insert("{{CPP_STD_REQ}}".to_string(), on_off(request.cpp_std_required));
    context.insert("{{EXPORT_CMDS}}".to_string(), on_off(request.export_commands));
    context.insert("{{LIB_TYPE}}".to_string(), request.lib_type.to_string());
    context.insert("{{CLANG_TIDY}}".to_string(), on_off(request.tidy_in_build));
    context.insert("{{COMPILER_ARG}}".to_string(), compiler_arg);
    context.insert("{{COMPILER_PATH}}".to_string(), compiler_path);
    context.insert("{{GENERATOR_ARG}}".to_string(), generator_arg);
    context.insert("{{GENERATOR_NAME}}".to_string(), generator_name);
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_validation() {
        assert!(is_valid_identifier("MyModule"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("mod2"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier("has space"));
        assert!(!is_valid_identifier("a/b"));
        assert!(!is_valid_identifier("a\0b"));
    }
}

//! Interactive configuration wizard.
//! Prompts for the fields of a generation request, prefilled with values
//! from the merged configuration layers (typically the persisted
//! session). Identifier fields are validated as the user types.

use crate::config::Config;
use crate::constants::DEFAULT_GTEST_URL;
use crate::context::is_valid_identifier;
use crate::error::{Error, Result};
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

fn prompt_identifier(prompt: &str, default: Option<String>, allow_empty: bool) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .validate_with(move |value: &String| -> std::result::Result<(), String> {
            if value.is_empty() && allow_empty {
                return Ok(());
            }
            if is_valid_identifier(value) {
                Ok(())
            } else {
                Err("use only letters, digits and underscores; must not start with a digit"
                    .to_string())
            }
        });
    if let Some(value) = default.filter(|v| !v.is_empty()) {
        input = input.default(value);
    }
    input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
}

fn prompt_text(prompt: &str, default: String) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(|e| Error::PromptError(e.to_string()))
}

/// Runs the wizard and returns a configuration layer holding the answers.
pub fn run_wizard(defaults: &Config) -> Result<Config> {
    println!("artisan module wizard (press Enter to accept a shown default)\n");

    let name = prompt_identifier("Module name", defaults.project_name.clone(), false)?;
    let namespace = prompt_identifier(
        "C++ namespace",
        defaults.namespace.clone().or_else(|| Some(name.clone())),
        false,
    )?;
    let prefix = prompt_identifier("Folder/file prefix", defaults.prefix.clone(), true)?;
    let suffix = prompt_identifier("Folder/file suffix", defaults.suffix.clone(), true)?;
    let output_dir = prompt_text(
        "Target output directory",
        defaults
            .output_dir
            .clone()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "./".to_string()),
    )?;
    let gtest_url = prompt_text(
        "GoogleTest archive URL",
        defaults.gtest_url.clone().unwrap_or_else(|| DEFAULT_GTEST_URL.to_string()),
    )?;
    let overwrite = Confirm::new()
        .with_prompt("Overwrite an existing module directory?")
        .default(defaults.overwrite.unwrap_or(false))
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))?;

    let mut answers = Config {
        project_name: Some(name),
        namespace: Some(namespace),
        output_dir: Some(PathBuf::from(output_dir)),
        gtest_url: Some(gtest_url),
        overwrite: Some(overwrite),
        ..Config::default()
    };
    if !prefix.is_empty() {
        answers.prefix = Some(prefix);
    }
    if !suffix.is_empty() {
        answers.suffix = Some(suffix);
    }
    Ok(answers)
}

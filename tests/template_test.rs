use artisan::constants::{IGNORE_FILE, REQUIRED_TEMPLATES};
use artisan::error::Error;
use artisan::template::TemplateStore;
use std::fs;
use tempfile::TempDir;

fn seed_required_templates(dir: &std::path::Path) {
    fs::create_dir_all(dir.join("include")).unwrap();
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::create_dir_all(dir.join("tests")).unwrap();
    fs::write(dir.join("include/{{STEM}}_I.h"), "class {{PROJECT_NAME}};\n").unwrap();
    fs::write(dir.join("src/{{STEM}}.cpp"), "// {{PROJECT_NAME}}\n").unwrap();
    fs::write(dir.join("tests/{{STEM}}_test.cpp"), "// tests\n").unwrap();
    fs::write(dir.join("CMakeLists.txt"), "project({{STEM}})\n").unwrap();
}

#[test]
fn test_builtin_store_contains_required_templates() {
    let store = TemplateStore::builtin();
    assert!(store.ensure_required().is_ok());
    assert!(!store.is_empty());
}

#[test]
fn test_builtin_store_lookup() {
    let store = TemplateStore::builtin();
    let template = store.get("CMakeLists.txt").unwrap();
    assert!(template.content.contains("{{STEM}}"));

    match store.get("no/such/template") {
        Err(Error::TemplateMissing { pattern }) => assert_eq!(pattern, "no/such/template"),
        other => panic!("expected TemplateMissing, got {:?}", other.map(|t| &t.path)),
    }
}

#[test]
fn test_builtin_contents_are_not_empty() {
    let store = TemplateStore::builtin();
    for template in store.iter() {
        assert!(!template.content.is_empty(), "empty template {}", template.path);
    }
}

#[test]
fn test_from_dir_loads_templates() {
    let temp_dir = TempDir::new().unwrap();
    seed_required_templates(temp_dir.path());
    fs::write(temp_dir.path().join("NOTES.md"), "extra asset\n").unwrap();

    let store = TemplateStore::from_dir(temp_dir.path()).unwrap();
    assert_eq!(store.len(), REQUIRED_TEMPLATES.len() + 1);
    assert!(store.get("NOTES.md").is_ok());
    assert!(store.get("include/{{STEM}}_I.h").is_ok());
}

#[test]
fn test_from_dir_respects_ignore_file() {
    let temp_dir = TempDir::new().unwrap();
    seed_required_templates(temp_dir.path());
    fs::write(temp_dir.path().join(IGNORE_FILE), "*.bak\n").unwrap();
    fs::write(temp_dir.path().join("draft.bak"), "ignored\n").unwrap();

    let store = TemplateStore::from_dir(temp_dir.path()).unwrap();
    assert!(matches!(store.get("draft.bak"), Err(Error::TemplateMissing { .. })));
    assert!(matches!(store.get(IGNORE_FILE), Err(Error::TemplateMissing { .. })));
    assert_eq!(store.len(), REQUIRED_TEMPLATES.len());
}

#[test]
fn test_from_dir_missing_required_template() {
    let temp_dir = TempDir::new().unwrap();
    seed_required_templates(temp_dir.path());
    fs::remove_file(temp_dir.path().join("CMakeLists.txt")).unwrap();

    match TemplateStore::from_dir(temp_dir.path()) {
        Err(Error::TemplateMissing { pattern }) => assert_eq!(pattern, "CMakeLists.txt"),
        other => panic!("expected TemplateMissing, got {:?}", other.map(|s| s.len())),
    }
}

#[test]
fn test_from_dir_nonexistent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");
    assert!(matches!(TemplateStore::from_dir(&missing), Err(Error::ConfigError(_))));
}

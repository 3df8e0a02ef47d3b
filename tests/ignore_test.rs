use artisan::constants::IGNORE_FILE;
use artisan::ignore::parse_ignore_file;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_parse_ignore_file() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);

    // Without an .artisanignore only the defaults apply
    let glob_set = parse_ignore_file(&ignore_path).unwrap();
    assert!(glob_set.is_match("sub/.DS_Store"));
    assert!(!glob_set.is_match("file.bak"));

    let mut file = File::create(&ignore_path).unwrap();
    writeln!(file, "# junk\n\n*.bak\ndrafts/**").unwrap();

    let glob_set = parse_ignore_file(&ignore_path).unwrap();
    assert!(glob_set.is_match("file.bak"));
    assert!(glob_set.is_match("drafts/one.txt"));
    assert!(glob_set.is_match("sub/.DS_Store"));
    assert!(!glob_set.is_match("kept.txt"));
}

#[test]
fn test_invalid_pattern_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);
    let mut file = File::create(&ignore_path).unwrap();
    writeln!(file, "a[").unwrap();

    assert!(parse_ignore_file(&ignore_path).is_err());
}

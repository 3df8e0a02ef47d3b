use artisan::cli::Args;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("artisan")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(parsed.name.is_none());
    assert!(parsed.config.is_none());
    assert!(parsed.output.is_none());
    assert!(parsed.templates.is_none());
    assert!(!parsed.silent);
    assert!(!parsed.overwrite);
    assert!(!parsed.verbose);
    assert!(!parsed.gtest_local);
}

#[test]
fn test_basic_args() {
    let parsed =
        Args::try_parse_from(make_args(&["--name", "Widget", "--output", "./out"])).unwrap();

    assert_eq!(parsed.name.as_deref(), Some("Widget"));
    assert_eq!(parsed.output, Some(PathBuf::from("./out")));
}

#[test]
fn test_all_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--name",
        "Widget",
        "--namespace",
        "widgets",
        "--prefix",
        "core_",
        "--suffix",
        "_v2",
        "--gtest-url",
        "https://example.com/gtest.zip",
        "--gtest-local",
        "--config",
        "artisan.json",
        "--templates",
        "./my_templates",
        "--silent",
        "--overwrite",
        "--verbose",
    ]))
    .unwrap();

    assert_eq!(parsed.namespace.as_deref(), Some("widgets"));
    assert_eq!(parsed.prefix.as_deref(), Some("core_"));
    assert_eq!(parsed.suffix.as_deref(), Some("_v2"));
    assert_eq!(parsed.gtest_url.as_deref(), Some("https://example.com/gtest.zip"));
    assert_eq!(parsed.config, Some(PathBuf::from("artisan.json")));
    assert_eq!(parsed.templates, Some(PathBuf::from("./my_templates")));
    assert!(parsed.gtest_local);
    assert!(parsed.silent);
    assert!(parsed.overwrite);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "-n", "Widget", "-p", "a_", "-s", "_z", "-o", "out", "-v",
    ]))
    .unwrap();

    assert_eq!(parsed.name.as_deref(), Some("Widget"));
    assert_eq!(parsed.prefix.as_deref(), Some("a_"));
    assert_eq!(parsed.suffix.as_deref(), Some("_z"));
    assert_eq!(parsed.output, Some(PathBuf::from("out")));
    assert!(parsed.verbose);
}

#[test]
fn test_unknown_flag() {
    assert!(Args::try_parse_from(make_args(&["--bogus"])).is_err());
}

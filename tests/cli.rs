//! End-to-end tests driving the built binary.

use std::process::{Command, Output};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_gen-descriptors");

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Entry lines of the generated table, without indentation.
fn entries(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter(|line| line.starts_with("\t\t{"))
        .map(str::trim)
        .collect()
}

#[test]
fn test_no_arguments_is_usage_error() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Usage:"));
    assert_eq!(stderr.trim_end().lines().count(), 1);
}

#[test]
fn test_strips_prefix_and_drops_maps() {
    let output = run(&[
        "--prefix=build/",
        "build/app.js",
        "build/app.js.map",
        "build/style.css",
    ]);
    assert!(output.status.success());
    assert_eq!(
        entries(&stdout(&output)),
        [
            "{\"app.js\", \"text/javascript\"},",
            "{\"style.css\", \"text/css\"},",
        ]
    );
}

#[test]
fn test_debug_keeps_maps() {
    let output = run(&[
        "--prefix=build/",
        "--debug",
        "build/app.js",
        "build/app.js.map",
        "build/style.css",
    ]);
    assert!(output.status.success());
    assert_eq!(
        entries(&stdout(&output)),
        [
            "{\"app.js\", \"text/javascript\"},",
            "{\"app.js.map\", \"application/json\"},",
            "{\"style.css\", \"text/css\"},",
        ]
    );
}

#[test]
fn test_full_output_without_trailing_newline() {
    let output = run(&["-p", "dist/", "dist/index.html", "README"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "package main

type AssetDescriptor struct {
\tPath string
\tMime string
}

func AssetDescriptors() []AssetDescriptor {
\treturn []AssetDescriptor{
\t\t{\"index.html\", \"text/html\"},
\t\t{\"README\", \"None\"},
\t}
}"
    );
}

#[test]
fn test_flags_only_gives_empty_list() {
    let output = run(&["--debug"]);
    assert!(output.status.success());
    let source = stdout(&output);
    assert!(entries(&source).is_empty());
    assert!(source.ends_with("\treturn []AssetDescriptor{\n\n\t}\n}"));
}

#[test]
fn test_order_follows_arguments() {
    let output = run(&["z.png", "a.css", "m.woff2"]);
    assert_eq!(
        entries(&stdout(&output)),
        [
            "{\"z.png\", \"image/png\"},",
            "{\"a.css\", \"text/css\"},",
            "{\"m.woff2\", \"font/woff2\"},",
        ]
    );
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let quiet = run(&["app.js", "app.js.map"]);
    let verbose = run(&["--verbose", "app.js", "app.js.map"]);
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(quiet.stderr.is_empty());
    let stderr = String::from_utf8(verbose.stderr).unwrap();
    assert!(stderr.contains("skipping source map app.js.map"));
}

#[test]
fn test_package_flag() {
    let output = run(&["--package", "assets", "a.js"]);
    assert!(stdout(&output).starts_with("package assets\n"));
}

#[test]
fn test_output_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("assets.go");
    let output = run(&["-o", path.to_str().unwrap(), "a.svg"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(entries(&written), ["{\"a.svg\", \"image/svg+xml\"},"]);
    assert!(written.ends_with('}'));
}

#[test]
fn test_output_file_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing").join("assets.go");
    let output = run(&["-o", path.to_str().unwrap(), "a.svg"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("[error] could not emit generated source"));
    assert!(stderr.contains("assets.go"));
}

#[test]
fn test_repeated_debug_flag() {
    let output = run(&["--debug", "--debug", "a.js.map"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        entries(&stdout(&output)),
        ["{\"a.js.map\", \"application/json\"},"]
    );
}

#[test]
fn test_repeated_prefix_last_wins() {
    let output = run(&["--prefix=a/", "--prefix=b/", "b/x.css"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(entries(&stdout(&output)), ["{\"x.css\", \"text/css\"},"]);
}

#[test]
fn test_abbreviated_long_flags() {
    let output = run(&["--pre=b/", "--deb", "b/x.css", "b/x.css.map"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        entries(&stdout(&output)),
        [
            "{\"x.css\", \"text/css\"},",
            "{\"x.css.map\", \"application/json\"},",
        ]
    );
}

#[test]
fn test_unknown_flag_rejected() {
    let output = run(&["--bogus", "a.js"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

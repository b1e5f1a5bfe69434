#![allow(dead_code)]

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("fixture readable")
}

/// The catalog used throughout the examples: `Class[main]`, then
/// `Class[Foo::Bar]` with `x => 1`, then `Package[foo]`.
pub fn minimal_catalog_json() -> &'static str {
    r#"{"resources":[
        {"type":"Class","title":"main","parameters":{}},
        {"type":"Class","title":"Foo::Bar","parameters":{"x":1}},
        {"type":"Package","title":"foo","parameters":{"ensure":"present"}}
    ]}"#
}

pub fn create_specs() -> Command {
    Command::new(env!("CARGO_BIN_EXE_create-specs"))
}

/// Runs the command, returning its output whatever the exit status.
pub fn run(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

//! Cucumber-driven end-to-end scenarios for the deplens binary.
//!
//! Feature files live at the repo root under `tests/features/`; report
//! fixtures are shared with the golden-file tests.

use assert_cmd::Command;
use camino::Utf8PathBuf;
use cucumber::{World, given, then, when};
use serde_json::Value;

#[allow(deprecated)]
fn deplens_cmd() -> Command {
    Command::cargo_bin("deplens").unwrap()
}

fn repo_root() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

#[derive(Debug, Default, World)]
pub struct DeplensWorld {
    temp: Option<tempfile::TempDir>,
    report_path: Option<Utf8PathBuf>,
    config_path: Option<Utf8PathBuf>,
    exit_code: Option<i32>,
    stdout: String,
    report: Option<Value>,
}

impl DeplensWorld {
    fn diagnostics(&self) -> Vec<Value> {
        self.report.as_ref().unwrap()["diagnostics"]
            .as_array()
            .cloned()
            .unwrap_or_default()
    }
}

#[given(expr = "the report fixture {string}")]
fn report_fixture(world: &mut DeplensWorld, name: String) {
    let dir = repo_root().join("tests").join("fixtures").join(&name);
    world.report_path = Some(dir.join("report.json"));

    // Fixtures that ship a config use it; the rest run on defaults.
    let config = dir.join("deplens.toml");
    if config.as_std_path().exists() {
        world.config_path = Some(config);
    }
}

#[when("I run deplens check")]
fn run_check(world: &mut DeplensWorld) {
    let temp = tempfile::tempdir().unwrap();
    let report_out = temp.path().join("report.json");

    let mut cmd = deplens_cmd();
    cmd.arg("check");
    if let Some(config) = &world.config_path {
        cmd.arg("--config").arg(config);
    }
    let assert = cmd
        .arg("--report")
        .arg(world.report_path.as_ref().unwrap())
        .arg("--package")
        .arg("flask")
        .arg("--package-version")
        .arg("1.0")
        .arg("--report-out")
        .arg(&report_out)
        .assert();

    let output = assert.get_output();
    world.exit_code = output.status.code();
    world.stdout = String::from_utf8_lossy(&output.stdout).to_string();
    world.report = Some(
        serde_json::from_str(&std::fs::read_to_string(&report_out).unwrap()).unwrap(),
    );
    world.temp = Some(temp);
}

#[then(expr = "the exit code is {int}")]
fn exit_code_is(world: &mut DeplensWorld, code: i32) {
    assert_eq!(world.exit_code, Some(code), "stdout:\n{}", world.stdout);
}

#[then(expr = "a diagnostic with code {string} is emitted")]
fn diagnostic_with_code(world: &mut DeplensWorld, code: String) {
    assert!(
        world
            .diagnostics()
            .iter()
            .any(|d| d["code"].as_str() == Some(code.as_str())),
        "no diagnostic with code {code}"
    );
}

#[then(expr = "a diagnostic message contains {string}")]
fn diagnostic_message_contains(world: &mut DeplensWorld, needle: String) {
    assert!(
        world.diagnostics().iter().any(|d| {
            d["message"].as_str().unwrap_or_default().contains(&needle)
        }),
        "no diagnostic message contains {needle:?}"
    );
}

#[then(expr = "no diagnostic message mentions {string}")]
fn no_diagnostic_message_mentions(world: &mut DeplensWorld, needle: String) {
    assert!(
        world.diagnostics().iter().all(|d| {
            !d["message"].as_str().unwrap_or_default().contains(&needle)
        }),
        "a diagnostic message mentions {needle:?}"
    );
}

#[then("no diagnostics are emitted")]
fn no_diagnostics(world: &mut DeplensWorld) {
    assert!(world.diagnostics().is_empty());
}

fn main() {
    let features = repo_root().join("tests").join("features");
    futures::executor::block_on(DeplensWorld::run(features.as_std_path()));
}

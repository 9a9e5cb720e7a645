//! CLI tests for kodegen_parcel.
//!
//! These run the binary against temporary project trees and check the
//! resolved output on stdout and the exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn parcel_cmd() -> Command {
    cargo_bin_cmd!("kodegen_parcel")
}

/// Creates `<tmp>/<name>/Assets` and returns the temp dir and project root.
fn temp_project(name: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join(name);
    std::fs::create_dir_all(project.join("Assets")).unwrap();
    (temp, project)
}

#[test]
fn help_flag_works() {
    parcel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn quiet_prints_android_artifact_path() {
    parcel_cmd()
        .args([
            "--parcel",
            "client",
            "--quiet",
            "--",
            "-buildTarget",
            "android",
            "-baseOutputDir",
            "/builds/",
            "-projectName",
            "Game",
        ])
        .assert()
        .success()
        .stdout("/builds/Android/Game.apk\n");
}

#[test]
fn default_report_on_stdout_status_on_stderr() {
    parcel_cmd()
        .args([
            "--parcel",
            "client",
            "--",
            "-buildTarget",
            "android",
            "-baseOutputDir",
            "/builds/",
            "-projectName",
            "Game",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Build configuration"))
        .stdout(predicate::str::ends_with("/builds/Android/Game.apk\n"))
        .stderr(predicate::str::contains("Output path: /builds/Android/Game.apk"))
        .stderr(predicate::str::contains("Build configuration").not());
}

#[test]
fn parcel_inferred_from_execute_method() {
    let (_temp, project) = temp_project("SpaceGame");

    parcel_cmd()
        .current_dir(&project)
        .args([
            "--json",
            "--",
            "-batchmode",
            "-executeMethod",
            "Build.ClientBuilder.BuildClient_BatchMode",
            "-buildTarget",
            "win64",
            "-baseOutputDir=/ci/out",
            "-phase",
            "qa",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""parcelKind": "client""#))
        .stdout(predicate::str::contains(r#""target": "Windows64""#))
        .stdout(predicate::str::contains(r#""targetGroup": "Standalone""#))
        .stdout(predicate::str::contains(r#""phase": "QA""#))
        .stdout(predicate::str::contains(r#""projectName": "SpaceGame""#))
        .stdout(predicate::str::contains(r#""outputPath": "/ci/out/Windows64/SpaceGame.exe""#))
        .stdout(predicate::str::contains(r#""defineSymbols": "QA_BUILD""#))
        .stdout(predicate::str::contains(r#""batchmode": true"#));
}

#[test]
fn project_path_sets_default_project_name() {
    let (temp, project) = temp_project("Racer");

    parcel_cmd()
        .current_dir(temp.path())
        .arg("--project-path")
        .arg(&project)
        .args(["--parcel", "client", "--quiet", "--", "-buildTarget", "ios", "-outputDir", "/x/iOS/"])
        .assert()
        .success()
        .stdout("/x/iOS\n");

    parcel_cmd()
        .current_dir(temp.path())
        .arg("--project-path")
        .arg(&project)
        .args(["--parcel", "client", "--json", "--", "-buildTarget", "android"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""projectName": "Racer""#));
}

#[test]
fn explicit_option_beats_build_argument() {
    parcel_cmd()
        .args([
            "--parcel",
            "bundle",
            "--target",
            "webgl",
            "--quiet",
            "--",
            "-buildTarget",
            "android",
            "-outputDir",
            "/o",
            "-packageName",
            "Game.unity3d",
        ])
        .assert()
        .success()
        .stdout("/o/Game\n");
}

#[test]
fn unknown_target_fails() {
    parcel_cmd()
        .args(["--parcel", "client", "--", "-buildTarget", "dreamcast"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("dreamcast"))
        .stderr(predicate::str::contains("key: -buildTarget"))
        .stderr(predicate::str::contains("retrying").not());
}

#[test]
fn missing_parcel_points_at_execute_method() {
    parcel_cmd()
        .args(["--", "-buildTarget", "android"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("key: -executeMethod"))
        .stderr(predicate::str::contains("--parcel <client|bundle|package>"));
}

#[test]
fn missing_target_fails() {
    parcel_cmd()
        .args(["--parcel", "client"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("buildTarget"));
}

#[test]
fn unknown_entry_point_fails() {
    parcel_cmd()
        .args(["--", "-executeMethod", "Tools.Baker.Bake", "-buildTarget", "android"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Baker"));
}

#[test]
fn invalid_phase_fails() {
    parcel_cmd()
        .args(["--parcel", "client", "--", "-buildTarget", "android", "-buildPhase", "DEV"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("buildPhase"));
}

#[test]
fn custom_entry_point_table() {
    let temp = TempDir::new().unwrap();
    let table = temp.path().join("entry_points.toml");
    std::fs::write(
        &table,
        "[entry_points]\nNightlyPackager = \"package\"\n",
    )
    .unwrap();

    parcel_cmd()
        .arg("--entry-points")
        .arg(&table)
        .args([
            "--json",
            "--",
            "-executeMethod",
            "Ci.NightlyPackager.Run",
            "-buildTarget",
            "android",
            "-projectName",
            "Game",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""parcelKind": "package""#))
        .stdout(predicate::str::contains("Builds/Packages/Android/Game.apk"));
}

#[test]
fn missing_entry_point_table_fails() {
    parcel_cmd()
        .args(["--entry-points", "/nonexistent/table.toml", "--", "-buildTarget", "android"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry point table not found"));
}

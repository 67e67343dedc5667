//! CLI selector tests

mod common;

use predicates::prelude::*;

#[test]
fn test_fixture_builds_package_and_home() {
    let env = common::TestEnv::with_extension_package("1.0.0").with_crew();
    assert!(env.home.is_dir());
    assert!(env.package.join("package.json").exists());
    assert!(env.package.join("crew/agents/crew-worker.md").exists());
    assert!(env.package.join("skills/pi-messenger-crew/SKILL.md").exists());
}

#[test]
fn test_help_lists_modes_and_directories() {
    let env = common::TestEnv::new();

    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--crew-install"))
        .stdout(predicate::str::contains("--crew-uninstall"))
        .stdout(predicate::str::contains("--remove"))
        .stdout(predicate::str::contains("Extension directory:"))
        .stdout(predicate::str::contains(".pi/agent/skills"));
}

#[test]
fn test_help_takes_priority_and_mutates_nothing() {
    let env = common::TestEnv::with_extension_package("1.0.0").with_crew();

    env.cmd()
        .args(["--crew-install", "-h"])
        .assert()
        .success();

    assert!(!env.home.join(".pi").exists());
}

#[test]
fn test_crew_install_beats_remove() {
    let env = common::TestEnv::with_extension_package("1.0.0").with_crew();
    env.cmd().assert().success();

    env.cmd()
        .args(["--remove", "--crew-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Crew installed"));

    assert!(env.extension_dir().exists());
}

#[test]
fn test_crew_uninstall_beats_remove() {
    let env = common::TestEnv::with_extension_package("1.0.0");
    env.cmd().assert().success();

    env.cmd()
        .args(["--crew-uninstall", "--remove"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to remove"));

    assert!(env.extension_dir().exists());
}

#[test]
fn test_version_flag() {
    let env = common::TestEnv::new();

    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let env = common::TestEnv::new();

    env.cmd().arg("--frobnicate").assert().code(2);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let env = common::TestEnv::with_extension_package("1.0.0");

    env.cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed"))
        .stderr(predicate::str::contains("install state"));
}

#[test]
fn test_home_flag_overrides_environment() {
    let env = common::TestEnv::with_extension_package("1.0.0");
    let other_home = env.temp.path().join("other-home");
    std::fs::create_dir_all(&other_home).unwrap();

    env.cmd().arg("--home").arg(&other_home).assert().success();

    assert!(other_home.join(".pi/agent/extensions/pi-messenger/index.ts").exists());
    assert!(!env.extension_dir().exists());
}

#[test]
fn test_help_shows_directories_under_home_flag() {
    let env = common::TestEnv::new();
    let other_home = env.temp.path().join("help-home");

    env.cmd()
        .arg("--home")
        .arg(&other_home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            other_home
                .join(".pi/agent/extensions/pi-messenger")
                .display()
                .to_string(),
        ));
}

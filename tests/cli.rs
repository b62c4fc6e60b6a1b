use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Creates a small Kotlin project tree with markers of every priority.
fn sample_project() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();

    fs::write(
        src.join("Main.kt"),
        "fun main() {\n    // TODO: wire up the argument parser\n}\n// FIXME crashes on empty input\n",
    )
    .unwrap();
    fs::write(
        src.join("Cache.kt"),
        "// hack: invalidate everything on write\nclass Cache\n",
    )
    .unwrap();
    fs::write(temp.path().join("notes.txt"), "// BUG: not a kotlin file\n").unwrap();

    temp
}

/// Runs `ktodo` inside `dir` with the state file redirected to `home`.
fn ktodo(dir: &TempDir, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ktodo").unwrap();
    cmd.current_dir(dir.path()).env("HOME", home.path());
    cmd
}

#[test]
fn scans_tree_and_groups_by_priority() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .assert()
        .success()
        .stdout(predicate::str::contains("## High (1)"))
        .stdout(predicate::str::contains("FIXME: crashes on empty input"))
        .stdout(predicate::str::contains("## Medium (1)"))
        .stdout(predicate::str::contains("HACK: invalidate everything on write"))
        .stdout(predicate::str::contains("## Low (1)"))
        .stdout(predicate::str::contains("[Main.kt:2] TODO: wire up the argument parser"))
        .stdout(predicate::str::contains("not a kotlin file").not());
}

#[test]
fn filters_by_keyword() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .args(["--filter", "crashes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FIXME: crashes on empty input"))
        .stdout(predicate::str::contains("TODO: wire up").not())
        .stdout(predicate::str::contains("HACK:").not());
}

#[test]
fn keyword_matches_file_name() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .args(["--filter", "cache.kt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HACK: invalidate everything on write"))
        .stdout(predicate::str::contains("FIXME:").not());
}

#[test]
fn filters_by_priority() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .args(["--priority", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FIXME: crashes on empty input"))
        .stdout(predicate::str::contains("TODO:").not())
        .stdout(predicate::str::contains("HACK:").not());
}

#[test]
fn rejects_unknown_priority() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .args(["--priority", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown priority 'urgent'"));
}

#[test]
fn last_flag_reuses_saved_keyword() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .args(["--filter", "crashes"])
        .assert()
        .success();

    ktodo(&temp, &home)
        .arg("--last")
        .assert()
        .success()
        .stdout(predicate::str::contains("FIXME: crashes on empty input"))
        .stdout(predicate::str::contains("HACK:").not());
}

#[test]
fn recent_lists_saved_keywords_most_recent_first() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    for keyword in ["crashes", "cache"] {
        ktodo(&temp, &home)
            .args(["--filter", keyword])
            .assert()
            .success();
    }

    ktodo(&temp, &home)
        .arg("--recent")
        .assert()
        .success()
        .stdout(predicate::str::diff("cache\ncrashes\n"));
}

#[test]
fn custom_extensions_override_defaults() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .args(["--extensions", "txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BUG: not a kotlin file"))
        .stdout(predicate::str::contains("FIXME:").not());
}

#[test]
fn excluded_directories_are_skipped() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    let build = temp.path().join("build");
    fs::create_dir_all(&build).unwrap();
    fs::write(build.join("Generated.kt"), "// TODO: generated noise\n").unwrap();

    ktodo(&temp, &home)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated noise").not());
}

#[test]
fn gitignored_paths_are_skipped() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    fs::write(temp.path().join(".gitignore"), "ignored\n").unwrap();
    let ignored = temp.path().join("ignored");
    fs::create_dir_all(&ignored).unwrap();
    fs::write(ignored.join("Skipped.kt"), "// FIXME: should not appear\n").unwrap();

    ktodo(&temp, &home)
        .assert()
        .success()
        .stdout(predicate::str::contains("should not appear").not())
        .stdout(predicate::str::contains("TODO: wire up the argument parser"));
}

#[test]
fn scans_single_file_argument() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .arg("src/Cache.kt")
        .assert()
        .success()
        .stdout(predicate::str::contains("HACK: invalidate everything on write"))
        .stdout(predicate::str::contains("FIXME:").not());
}

#[test]
fn non_kotlin_file_argument_yields_nothing() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .arg("notes.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("No marker comments found."));
}

#[test]
fn empty_tree_reports_no_items() {
    let temp = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No marker comments found."));
}

#[test]
fn verbose_prints_scan_stats() {
    let temp = sample_project();
    let home = TempDir::new().unwrap();

    ktodo(&temp, &home)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] Visited folders:"))
        .stderr(predicate::str::contains("[INFO] Visited files:"));
}

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("swatchboard")
}

fn temp_path(name: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("swatchboard-cli-{}-{}.{ext}", name, std::process::id()))
}

#[test]
fn test_show_lists_stock_palette() {
    let store = temp_path("stock", "toml");
    let log = temp_path("stock", "log");
    let _ = std::fs::remove_file(&store);

    cmd()
        .args(["--show", "--store"])
        .arg(&store)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("scope: global"))
        .stdout(predicate::str::contains("#ffcc0000"))
        .stdout(predicate::str::contains("(fg)"))
        .stdout(predicate::str::contains("(bg)"));

    let _ = std::fs::remove_file(&log);
}

#[test]
fn test_show_host_scope_falls_back_to_stock() {
    let store = temp_path("host", "toml");
    let log = temp_path("host", "log");
    let _ = std::fs::remove_file(&store);

    cmd()
        .args(["--show", "--host", "rack-1", "--store"])
        .arg(&store)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("scope: rack-1"))
        .stdout(predicate::str::contains("#ffd3d7cf"));

    let _ = std::fs::remove_file(&log);
}

#[test]
fn test_show_reads_store_file() {
    let store = temp_path("stored", "toml");
    let log = temp_path("stored", "log");

    let entries: Vec<String> = (0..16)
        .map(|i| {
            if i == 4 {
                "\"#ff0a0b0c\"".to_string()
            } else {
                format!("\"#ff0000{i:02x}\"")
            }
        })
        .collect();
    let document = format!(
        "[global]\ncolors = [{}]\nforeground = 5\nbackground = 1\n",
        entries.join(", ")
    );
    std::fs::write(&store, document).unwrap();

    cmd()
        .args(["--show", "--store"])
        .arg(&store)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("#ff0a0b0c"))
        .stdout(predicate::str::contains(" 6  #ff000005  (fg)"))
        .stdout(predicate::str::contains(" 2  #ff000001  (bg)"));

    let _ = std::fs::remove_file(&store);
    let _ = std::fs::remove_file(&log);
}

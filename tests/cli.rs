//! End-to-end checks of the `position` binary

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn run(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_position"))
        .args(args)
        .output()
        .expect("Failed to run position binary");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_all_notations_with_compact_presets() {
    let (ok, stdout, _) = run(&["47.6205", "-122.3493"]);
    assert!(ok);
    assert!(stdout.contains("47.620500  -122.349300"));
    assert!(stdout.contains("47°37.230'N  122°20.958'W"));
    assert!(stdout.contains("47°37'13.80\"N  122°20'57.48\"W"));
}

#[test]
fn test_single_notation_with_preset() {
    let (ok, stdout, _) = run(&[
        "48.858553598330445",
        "2.2944812975469286",
        "--to",
        "ddm",
        "--preset",
        "ddm-short",
    ]);
    assert!(ok);
    assert_eq!(stdout.trim(), "DDM  4851.51N  217.67E");
}

#[test]
fn test_json_output() {
    let (ok, stdout, _) = run(&["47.6205", "-122.3493", "--to", "dms", "--json"]);
    assert!(ok);

    let records: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(records[0]["notation"], "dms");
    assert_eq!(records[0]["lat"], "47°37'13.80\"N");
    assert_eq!(records[0]["lon"], "122°20'57.48\"W");
}

#[test]
fn test_config_file_overrides_preset() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "dir_indicator": false, "dm_separator": "", "min_precision": 1 }}"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let (ok, stdout, _) = run(&["47.6205", "-122.3493", "--to", "ddm", "--config", path]);
    assert!(ok);
    assert_eq!(stdout.trim(), "DDM  47°37.2'  122°21.0'");
}

#[test]
fn test_rejects_unknown_preset() {
    let (ok, _, stderr) = run(&["1.0", "2.0", "--preset", "utm"]);
    assert!(!ok);
    assert!(stderr.contains("Unknown format preset"));
}

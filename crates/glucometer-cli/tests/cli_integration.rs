//! CLI integration tests.
//!
//! These run the `glucometer` binary against the mock driver, so no
//! hardware is needed. The `zero` command is not covered here: its
//! confirmation prompt needs a terminal.

use std::process::{Command, Output};

fn run_glucometer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glucometer"))
        .args(args)
        .output()
        .expect("failed to run glucometer binary")
}

#[test]
fn test_help_flag() {
    let output = run_glucometer(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--driver"));
    assert!(stdout.contains("dump"));
    assert!(stdout.contains("datetime"));
    assert!(stdout.contains("zero"));
}

#[test]
fn test_version_flag() {
    let output = run_glucometer(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_driver_is_required() {
    let output = run_glucometer(&["info"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--driver"));
}

#[test]
fn test_unknown_driver() {
    let output = run_glucometer(&["--driver", "otultra2", "info"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("otultra2"));
}

#[test]
fn test_help_command_describes_driver() {
    let output = run_glucometer(&["--driver", "mock", "help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mock glucometer driver"));
}

#[test]
fn test_info_command() {
    let output = run_glucometer(&["--driver", "mock", "info"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mock glucometer"));
    assert!(stdout.contains("Serial Number: MOCK-00001"));
    assert!(stdout.contains("Native Unit: mg/dL"));
    assert!(stdout.contains("Time: "));
}

#[test]
fn test_dump_csv_native_unit() {
    let output = run_glucometer(&["--driver", "mock", "dump"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    // Ketone reading excluded without --with-ketone.
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "\"2018-01-01 07:55:00\",\"98.00\",\"Before Meal\",\"blood sample\",\"(Blood) fasting\""
    );
    assert_eq!(
        lines[1],
        "\"2018-01-01 12:30:00\",\"132.00\",\"After Meal\",\"CGM\",\"(Sensor) lunch\""
    );
}

#[test]
fn test_dump_csv_unit_override() {
    let output = run_glucometer(&["--driver", "mock", "dump", "--unit", "mmol/L"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"5.44\""), "98 mg/dL is 5.44 mmol/L");
    assert!(stdout.contains("\"7.33\""), "132 mg/dL is 7.33 mmol/L");
}

#[test]
fn test_dump_with_ketone() {
    let output = run_glucometer(&["--driver", "mock", "dump", "--with-ketone"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("\"2018-01-01 18:00:00\",\"0.30\""));
}

#[test]
fn test_dump_to_file() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_glucometer(&[
        "--driver",
        "mock",
        "dump",
        "--to-file",
        "--output-folder",
        dir.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "file export prints nothing");

    let export = std::fs::read_dir(dir.path())
        .unwrap()
        .next()
        .expect("export file must exist")
        .unwrap()
        .path();
    assert_eq!(export.extension().and_then(|ext| ext.to_str()), Some("csv"));

    let contents = std::fs::read_to_string(export).unwrap();
    assert!(contents.starts_with("Some guy\r\n# 000000001\r\nID\tTime\tRecord Type\t"));
    assert!(contents.contains("\r\n1\t2018/01/01 07:55\t"));
}

#[test]
fn test_datetime_read() {
    let output = run_glucometer(&["--driver", "mock", "datetime"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // YYYY-MM-DD HH:MM:SS plus the newline.
    assert_eq!(stdout.trim_end().len(), 19);
}

#[test]
fn test_datetime_set_invalid() {
    let output = run_glucometer(&["--driver", "mock", "datetime", "--set", "foo"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("foo: not a valid date"));
}

#[test]
fn test_dump_from_fixture_device() {
    use std::io::Write;

    let fixture_contents = r#"[
        {
            "glucose": {
                "timestamp": "2019-03-01 09:00:00",
                "value": 110.0,
                "meal": "before",
                "comment": "(Blood) breakfast"
            }
        }
    ]"#;

    let mut fixture = tempfile::NamedTempFile::new().unwrap();
    fixture.write_all(fixture_contents.as_bytes()).unwrap();

    let output = run_glucometer(&[
        "--driver",
        "mock",
        "--device",
        fixture.path().to_str().unwrap(),
        "dump",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "\"2019-03-01 09:00:00\",\"110.00\",\"Before Meal\",\"blood sample\",\"(Blood) breakfast\""
    );
}

use pdns2unbound_domain::config::OutputConfig;
use pdns2unbound_infrastructure::output::{write_output, WriteOutcome};

fn file_output(path: &std::path::Path) -> OutputConfig {
    OutputConfig {
        name: path.to_string_lossy().into_owned(),
    }
}

#[test]
fn test_stdout_destination() {
    let output = OutputConfig {
        name: "stdout".to_string(),
    };

    let outcome = write_output(&output, "\nlocal-zone: \"example.com.\" static\n").unwrap();
    assert_eq!(outcome, WriteOutcome::Stdout);
}

#[test]
fn test_first_write_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdns.conf");
    let output = file_output(&path);

    let outcome = write_output(&output, "zone a\n").unwrap();

    assert_eq!(outcome, WriteOutcome::Created);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "zone a\n");
}

#[test]
fn test_identical_content_skips_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdns.conf");
    let output = file_output(&path);

    write_output(&output, "zone a\n").unwrap();
    let outcome = write_output(&output, "zone a\n").unwrap();

    assert_eq!(outcome, WriteOutcome::Unchanged);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "zone a\n");
}

#[test]
fn test_changed_content_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdns.conf");
    let output = file_output(&path);

    write_output(&output, "zone a\n").unwrap();
    let outcome = write_output(&output, "zone b\n").unwrap();

    assert_eq!(outcome, WriteOutcome::Updated);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "zone b\n");
}

#[test]
fn test_unreadable_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("pdns.conf");
    let output = file_output(&path);

    assert!(write_output(&output, "zone a\n").is_err());
}

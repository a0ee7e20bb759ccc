use std::fs;
use std::path::Path;
use std::process::Command;

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_badge-pdf"))
}

fn output_dir() -> &'static Path {
    Path::new("tests/output")
}

fn setup() {
    fs::create_dir_all(output_dir()).expect("Failed to create output directory");
}

fn write_names_file(name: &str, content: &str) -> String {
    setup();
    let path = output_dir().join(name);
    fs::write(&path, content).expect("Failed to write names file");
    path.to_str().unwrap().to_string()
}

fn cleanup_file(name: &str) {
    let path = output_dir().join(name);
    if path.exists() {
        fs::remove_file(&path).ok();
    }
}

#[test]
fn test_basic_generation() {
    let input = write_names_file("basic-names.txt", "Alice\nBob\nCarol\n");
    let output_file = "test-basic.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-i", &input,
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let path = output_dir().join(output_file);
    assert!(path.exists(), "PDF file was not created");

    let metadata = fs::metadata(&path).expect("Failed to get file metadata");
    assert!(metadata.len() > 1000, "PDF file is too small, likely empty or corrupt");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Badges: 3"), "Unexpected stdout: {}", stdout);
    assert!(stdout.contains("Pages: 1"), "Unexpected stdout: {}", stdout);
}

#[test]
fn test_seven_names_span_two_pages() {
    let input = write_names_file(
        "seven-names.txt",
        "Alice\nBob\nCarol\nDave\nErin\nFrank\nGrace\n",
    );
    let output_file = "test-two-pages.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-i", &input,
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Badges: 7"), "Unexpected stdout: {}", stdout);
    assert!(stdout.contains("Pages: 2"), "Unexpected stdout: {}", stdout);
}

#[test]
fn test_json_roster_input() {
    let input = write_names_file(
        "roster.json",
        r#"[{"name": "Alice"}, {"name": "Bob"}]"#,
    );
    let output_file = "test-json-roster.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-i", &input,
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let path = output_dir().join(output_file);
    assert!(path.exists(), "PDF file was not created");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Badges: 2"), "Unexpected stdout: {}", stdout);
}

#[test]
fn test_comma_separated_names() {
    let input = write_names_file("comma-names.txt", "Alice, Bob, Carol, Dave");
    let output_file = "test-comma.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-i", &input,
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Badges: 4"), "Unexpected stdout: {}", stdout);
}

#[test]
fn test_a4_paper_and_template() {
    let input = write_names_file("a4-names.txt", "Alice\nBob\n");
    let output_file = "test-a4-primary.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "-i", &input,
            "-p", "a4",
            "-t", "primary",
            "-o", &format!("tests/output/{}", output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let path = output_dir().join(output_file);
    let metadata = fs::metadata(&path).expect("Failed to get file metadata");
    assert!(metadata.len() > 1000, "PDF file is too small");
}

#[test]
fn test_deterministic_output() {
    let input = write_names_file("det-names.txt", "Alice\nBob\nCarol\n");
    let first_file = "test-det-1.pdf";
    let second_file = "test-det-2.pdf";
    cleanup_file(first_file);
    cleanup_file(second_file);

    for output_file in [first_file, second_file] {
        let output = cargo_bin()
            .args([
                "-i", &input,
                "-c", "#2563EB",
                "-o", &format!("tests/output/{}", output_file),
            ])
            .output()
            .expect("Failed to execute command");
        assert!(output.status.success(), "Command failed: {:?}", output);
    }

    let first = fs::read(output_dir().join(first_file)).expect("Failed to read first PDF");
    let second = fs::read(output_dir().join(second_file)).expect("Failed to read second PDF");
    assert_eq!(first, second, "Identical inputs produced different bytes");
}

#[test]
fn test_invalid_color_fails() {
    let input = write_names_file("color-names.txt", "Alice\n");

    let output = cargo_bin()
        .args([
            "-i", &input,
            "-c", "not-a-color",
            "-o", "tests/output/should-not-exist.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for invalid color");
}

#[test]
fn test_empty_names_file_fails() {
    let input = write_names_file("empty-names.txt", "\n  \n\n");

    let output = cargo_bin()
        .args([
            "-i", &input,
            "-o", "tests/output/should-not-exist.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for an empty name list");
}

#[test]
fn test_missing_input_file_fails() {
    let output = cargo_bin()
        .args([
            "-i", "nonexistent.txt",
            "-o", "tests/output/should-not-exist.pdf",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should have failed for missing input");
}

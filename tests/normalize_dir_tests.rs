use std::fs;
use std::path::Path;

use indoc::indoc;
use tempfile::TempDir;
use transfmt::{Config, EolStyle, Error, Mode, Normalizer, Tag, normalize_dir};

const UNSORTED: &str = indoc! {"
    # Freeplane translation
    menu.file=Datei
    menu.edit = Bearbeiten [auto]
    menu.edit=Bearbeiten

    menu.file=Datei
"};

const NORMALIZED: &str = "menu.edit=Bearbeiten\nmenu.file=Datei\n";

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn test_apply_rewrites_unsorted_file_in_place() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "Resources_de.properties", UNSORTED);

    let config = Config::new(temp_dir.path()).with_eol(EolStyle::Unix);
    let report = normalize_dir(config, Mode::Apply).unwrap();

    assert_eq!(report.requiring_formatting(), 1);
    assert_eq!(report.written(), 1);
    assert_eq!(read(temp_dir.path(), "Resources_de.properties"), NORMALIZED);

    let tags: Vec<Tag> = report.diagnostics().map(|d| d.tag).collect();
    assert_eq!(tags, vec![Tag::Drop, Tag::DropDuplicate]);
    assert!(
        report
            .diagnostics()
            .all(|d| d.file == "Resources_de.properties")
    );
}

#[test]
fn test_second_run_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "Resources_de.properties", UNSORTED);
    let config = Config::new(temp_dir.path()).with_eol(EolStyle::Unix);

    normalize_dir(config.clone(), Mode::Apply).unwrap();
    let report = normalize_dir(config, Mode::Apply).unwrap();

    assert_eq!(report.requiring_formatting(), 0);
    assert_eq!(report.written(), 0);
    assert_eq!(read(temp_dir.path(), "Resources_de.properties"), NORMALIZED);
}

#[test]
fn test_check_on_normalized_file_reports_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "Resources_de.properties", NORMALIZED);

    let config = Config::new(temp_dir.path()).with_eol(EolStyle::Unix);
    let report = normalize_dir(config, Mode::Check).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.requiring_formatting(), 0);
    assert_eq!(report.written(), 0);
}

#[test]
fn test_check_never_writes() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out");
    write(temp_dir.path(), "Resources_de.properties", UNSORTED);

    let config = Config::new(temp_dir.path())
        .with_output_dir(&output_dir)
        .with_write_if_unchanged(true);
    let report = normalize_dir(config, Mode::Check).unwrap();

    assert_eq!(report.requiring_formatting(), 1);
    assert_eq!(report.written(), 0);
    assert_eq!(read(temp_dir.path(), "Resources_de.properties"), UNSORTED);
    assert!(!output_dir.join("Resources_de.properties").exists());
}

#[test]
fn test_different_line_ending_requires_formatting() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "Resources_de.properties", NORMALIZED);

    let config = Config::new(temp_dir.path()).with_eol(EolStyle::Win);
    let report = normalize_dir(config, Mode::Apply).unwrap();

    assert_eq!(report.requiring_formatting(), 1);
    assert_eq!(
        read(temp_dir.path(), "Resources_de.properties"),
        "menu.edit=Bearbeiten\r\nmenu.file=Datei\r\n"
    );
}

#[test]
fn test_output_dir_and_write_if_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("formatted");
    write(temp_dir.path(), "a.properties", NORMALIZED);
    write(temp_dir.path(), "b.properties", UNSORTED);

    let config = Config::new(temp_dir.path())
        .with_output_dir(&output_dir)
        .with_write_if_unchanged(true)
        .with_eol(EolStyle::Unix);
    let report = normalize_dir(config, Mode::Apply).unwrap();

    assert_eq!(report.requiring_formatting(), 1);
    assert_eq!(report.written(), 2);
    assert_eq!(read(&output_dir, "a.properties"), NORMALIZED);
    assert_eq!(read(&output_dir, "b.properties"), NORMALIZED);
    // the input is left alone
    assert_eq!(read(temp_dir.path(), "b.properties"), UNSORTED);
}

#[test]
fn test_includes_and_excludes() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "Resources_de.properties", UNSORTED);
    write(temp_dir.path(), "Resources_en.properties", UNSORTED);
    write(temp_dir.path(), "notes.txt", "b\na\n");

    let config = Config::new(temp_dir.path())
        .with_include("Resources_*.properties")
        .with_exclude("Resources_en.properties")
        .with_eol(EolStyle::Unix);
    let report = normalize_dir(config, Mode::Apply).unwrap();

    assert_eq!(report.files.len(), 1);
    assert!(report.files[0].path.ends_with("Resources_de.properties"));
    assert_eq!(read(temp_dir.path(), "Resources_en.properties"), UNSORTED);
    assert_eq!(read(temp_dir.path(), "notes.txt"), "b\na\n");
}

#[test]
fn test_report_lists_files_in_name_order() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["c.properties", "a.properties", "b.properties"] {
        write(temp_dir.path(), name, "x=1\nx=1\n");
    }

    let config = Config::new(temp_dir.path()).with_eol(EolStyle::Unix);
    let report = normalize_dir(config, Mode::Check).unwrap();

    let files: Vec<String> = report.diagnostics().map(|d| d.file.clone()).collect();
    assert_eq!(files, vec!["a.properties", "b.properties", "c.properties"]);
}

#[test]
fn test_missing_input_dir_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = Normalizer::new(Config::new(temp_dir.path().join("missing")));
    let error = result.err().unwrap();
    assert!(matches!(error, Error::InputDirNotFound(_)));
    assert!(error.is_configuration());
}

#[test]
fn test_invalid_pattern_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = Normalizer::new(Config::new(temp_dir.path()).with_include("[oops"));
    assert!(matches!(result.err().unwrap(), Error::Pattern { .. }));
}

#[test]
fn test_unreadable_file_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("broken.properties"), [0xffu8, 0xfe, b'\n']).unwrap();

    let error = normalize_dir(Config::new(temp_dir.path()), Mode::Check).unwrap_err();
    match error {
        Error::File { path, .. } => assert!(path.ends_with("broken.properties")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_report_serializes_to_json() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "Resources_de.properties", "y=foo\ny=bar\n");

    let config = Config::new(temp_dir.path()).with_eol(EolStyle::Unix);
    let report = normalize_dir(config, Mode::Check).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["mode"], "check");
    let file = &json["files"][0];
    assert_eq!(file["requires_formatting"], true);
    assert_eq!(file["written"], false);
    assert_eq!(file["diagnostics"][0]["tag"], "revisit_keep");
    assert_eq!(file["diagnostics"][1]["detail"], "y=bar");
}

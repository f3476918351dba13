//! Integration tests for the marcvali CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn marcvali() -> Command {
    Command::cargo_bin("marcvali").unwrap()
}

#[test]
fn test_hyphenate_file() {
    marcvali()
        .args(["hyphenate", "--marker", "-", "-i"])
        .arg(fixture_path("georgian-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "სა-ქარ-თვე-ლო არის ლა-მა-ზი ქვე-ყა-ნა.",
        ))
        .stdout(predicate::str::contains(
            "მა-სწავ-ლე-ბე-ლი წიგნს კით-ხუ-ლობს.",
        ));
}

#[test]
fn test_default_marker_is_soft_hyphen() {
    marcvali()
        .args(["hyphenate", "--text", "საქართველო"])
        .assert()
        .success()
        .stdout("სა\u{00AD}ქარ\u{00AD}თვე\u{00AD}ლო\n");
}

#[test]
fn test_hyphenate_stdin() {
    marcvali()
        .args(["hyphenate", "-m", "-"])
        .write_stdin("2024 წელს, Tbilisi თბილისი!\n")
        .assert()
        .success()
        .stdout("2024 წელს, Tbilisi თბი-ლი-სი!\n");
}

#[test]
fn test_hyphenate_html_fixture() {
    marcvali()
        .args(["hyphenate", "-m", "-", "-i"])
        .arg(fixture_path("sample.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>მთავ-რო-ბა</title>"))
        .stdout(predicate::str::contains(".მთავრობა { color: red; }"))
        .stdout(predicate::str::contains("<!-- მთავრობა -->"))
        .stdout(predicate::str::contains(
            "<p class=\"მთავრობა\">მთავ-რო-ბა</p>",
        ))
        .stdout(predicate::str::contains("<code>საქართველო</code>"));
}

#[test]
fn test_html_flag_on_inline_text() {
    marcvali()
        .args(["hyphenate", "-m", "-", "--html", "--text"])
        .arg("<b title=\"თბილისი\">თბილისი</b>")
        .assert()
        .success()
        .stdout("<b title=\"თბილისი\">თბი-ლი-სი</b>\n");
}

#[test]
fn test_bundled_dictionary_and_opt_out() {
    marcvali()
        .args(["hyphenate", "-m", "-", "-t", "ტრანსპორტი"])
        .assert()
        .success()
        .stdout("ტრანს-პორ-ტი\n");

    marcvali()
        .args([
            "hyphenate",
            "-m",
            "-",
            "--no-default-dictionary",
            "-t",
            "ტრანსპორტი",
        ])
        .assert()
        .success()
        .stdout("ტრან-სპორ-ტი\n");
}

#[test]
fn test_extra_dictionary() {
    marcvali()
        .args(["hyphenate", "-m", "-", "-t", "საქართველო", "--dictionary"])
        .arg(fixture_path("exceptions.json"))
        .assert()
        .success()
        .stdout("საქ-არ-თვე-ლო\n");
}

#[test]
fn test_config_file() {
    marcvali()
        .args(["hyphenate", "-t", "მთავრობა საქართველო", "--config"])
        .arg(fixture_path("config.toml"))
        .assert()
        .success()
        .stdout("მთა|ვრობა სა|ქარ|თველო\n");
}

#[test]
fn test_flags_override_config_file() {
    marcvali()
        .args(["hyphenate", "-t", "საქართველო", "--right-min", "2", "-m", "~"])
        .arg("--config")
        .arg(fixture_path("config.toml"))
        .assert()
        .success()
        .stdout("სა~ქარ~თვე~ლო\n");
}

#[test]
fn test_json_output() {
    let output = marcvali()
        .args(["hyphenate", "-m", "-", "-f", "json", "-t", "თბილისი"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["source"], "<text>");
    assert_eq!(records[0]["text"], "თბი-ლი-სი");
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.txt");

    marcvali()
        .args(["hyphenate", "-m", "-", "-t", "ლამაზი", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "ლა-მა-ზი\n");
}

#[test]
fn test_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "თბილისი\n").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "ლამაზი\n").unwrap();

    marcvali()
        .args(["hyphenate", "-q", "-m", "-", "-i"])
        .arg(format!("{}/*.txt", temp_dir.path().display()))
        .assert()
        .success()
        .stdout("თბი-ლი-სი\nლა-მა-ზი\n");
}

#[test]
fn test_missing_file() {
    marcvali()
        .args(["hyphenate", "-i", "nonexistent-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_text_conflicts_with_input() {
    marcvali()
        .args(["hyphenate", "-t", "თბილისი", "-i"])
        .arg(fixture_path("georgian-sample.txt"))
        .assert()
        .failure();
}

#[test]
fn test_syllables_text() {
    marcvali()
        .args(["syllables", "საქართველო", "და"])
        .assert()
        .success()
        .stdout("საქართველო\tსა-ქარ-თვე-ლო\t4\nდა\tდა\t1\n");
}

#[test]
fn test_syllables_json() {
    let output = marcvali()
        .args(["syllables", "-f", "json", "-m", "-", "მთავრობა"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["hyphenated"], "მთავ-რო-ბა");
    assert_eq!(records[0]["count"], 3);
    assert_eq!(records[0]["boundaries"][0]["offset"], 4);
    assert_eq!(records[0]["boundaries"][0]["rule"], "default_split");
}

#[test]
fn test_syllables_markdown_from_word_list() {
    marcvali()
        .args(["syllables", "-f", "markdown", "-i"])
        .arg(fixture_path("words.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("| მთავრობა | მთავ · რო · ბა | 3 |"))
        .stdout(predicate::str::contains("*Total words: 2*"));
}

#[test]
fn test_syllables_requires_words() {
    marcvali().arg("syllables").assert().failure();
}

#[test]
fn test_export_tex() {
    marcvali()
        .args(["export", "საქართველო", "მთავრობა"])
        .assert()
        .success()
        .stdout(".სა1ქარ1თვე1ლო.\n.მთავ1რო1ბა.\n");
}

#[test]
fn test_export_hunspell() {
    marcvali()
        .args(["export", "--format", "hunspell", "-i"])
        .arg(fixture_path("words.txt"))
        .assert()
        .success()
        .stdout("სა=ქარ=თვე=ლო\nმთავ=რო=ბა\n");
}

#[test]
fn test_export_unknown_format() {
    marcvali()
        .args(["export", "--format", "hyph", "საქართველო"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown export format"));
}

#[test]
fn test_validate_fixtures() {
    marcvali()
        .args(["validate", "--config"])
        .arg(fixture_path("config.toml"))
        .arg("--dictionary")
        .arg(fixture_path("exceptions.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"))
        .stdout(predicate::str::contains("✓ Dictionary is valid!"));
}

#[test]
fn test_validate_requires_target() {
    marcvali().arg("validate").assert().failure();
}

#[test]
fn test_validate_malformed_dictionary() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, r#"{"თბილისი": "თბი-ლი"}"#).unwrap();

    marcvali()
        .args(["validate", "--dictionary"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Malformed entries: 1"));
}

#[test]
fn test_generate_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("marcvali.toml");

    marcvali()
        .args(["generate-config", "-o"])
        .arg(&path)
        .assert()
        .success();

    marcvali()
        .args(["validate", "--config"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_list_formats() {
    marcvali()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"))
        .stdout(predicate::str::contains("hunspell"));
}

#[test]
fn test_list_clusters() {
    marcvali()
        .args(["list", "clusters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Harmonic clusters (67):"))
        .stdout(predicate::str::contains("სწ"));
}

#[test]
fn test_help() {
    marcvali()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hyphenate"))
        .stdout(predicate::str::contains("syllables"))
        .stdout(predicate::str::contains("generate-config"));
}

#[test]
fn test_version() {
    marcvali()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("marcvali"));
}

//! Integration tests for the splitkit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn splitkit() -> Command {
    Command::cargo_bin("splitkit").unwrap()
}

#[test]
fn test_split_fields_keeps_blanks() {
    splitkit()
        .args(["split", "-i", &fixture_path("fields.csv"), "--one-of", ",\\n"])
        .args(["--drop-final-blank"])
        .assert()
        .success()
        .stdout("name\nage\n\ncity\nalice\n30\n\nparis\n");
}

#[test]
fn test_split_fields_drop_blanks() {
    splitkit()
        .args(["split", "-i", &fixture_path("fields.csv"), "--one-of", ",\\n"])
        .arg("--drop-blanks")
        .assert()
        .success()
        .stdout("name\nage\ncity\nalice\n30\nparis\n");
}

#[test]
fn test_split_words_by_class() {
    splitkit()
        .args(["split", "-i", &fixture_path("words.txt"), "--class", "whitespace"])
        .arg("--drop-blanks")
        .assert()
        .success()
        .stdout("the\nquick\nbrown\nfox\njumps\nover\n");
}

#[test]
fn test_split_lines_keep_blank_line() {
    splitkit()
        .args(["split", "-i", &fixture_path("lines.txt"), "--one-of", "\\n"])
        .arg("--drop-final-blank")
        .assert()
        .success()
        .stdout("first line\nsecond line\n\nfourth line\n");
}

#[test]
fn test_split_japanese_keep_delims_right() {
    splitkit()
        .args(["split", "-i", &fixture_path("japanese.txt")])
        .args(["--class", "punctuation", "--delims", "right"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "これはテスト。\n日本語の文章、\n分割します。\n",
        ))
        .stdout(predicate::str::contains("\\n"));
}

#[test]
fn test_split_on_sublist_from_stdin() {
    splitkit()
        .args(["split", "-i", "-", "--on", "::", "--delims", "keep"])
        .write_stdin("a::b::::c")
        .assert()
        .success()
        .stdout("a\n::\nb\n::\n\n::\nc\n");
}

#[test]
fn test_split_condense_keep() {
    splitkit()
        .args(["split", "-i", "-", "--one-of", ",", "--delims", "keep", "--condense"])
        .write_stdin("a,,b")
        .assert()
        .success()
        .stdout("a\n,,\nb\n");
}

#[test]
fn test_no_delimiter_is_identity() {
    splitkit()
        .args(["split", "-i", "-"])
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn test_chunking_flags() {
    let cases: [(&[&str], &str, &str); 6] = [
        (&["--every", "3"], "abcdefg", "abc\ndef\ng\n"),
        (&["--sizes", "2,3"], "abcdefg", "ab\ncde\n"),
        (&["--places", "2,3,4"], "abcdefg", "ab\ncde\nfg\n"),
        (&["--places", "2,3,4", "--blanks"], "abc", "ab\nc\n\n"),
        (&["--powers-of-two"], "abcdefghij", "a\nbc\ndefg\n"),
        (&["--window", "3", "--step", "2"], "abcdefg", "abc\ncde\nefg\n"),
    ];

    for (flags, input, expected) in cases {
        splitkit()
            .args(["split", "-i", "-"])
            .args(flags)
            .write_stdin(input)
            .assert()
            .success()
            .stdout(expected.to_string());
    }
}

#[test]
fn test_json_output() {
    let output = splitkit()
        .args(["split", "-i", "-", "--one-of", ",", "-f", "json"])
        .write_stdin("a,é,c")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pieces = json[0]["pieces"].as_array().unwrap();
    assert_eq!(json[0]["source"], "<stdin>");
    assert_eq!(pieces.len(), 3);
    assert_eq!(pieces[1]["text"], "é");
    assert_eq!(pieces[1]["byte_offset"], 2);
    assert_eq!(pieces[1]["byte_len"], 2);
    assert_eq!(pieces[2]["char_offset"], 4);
    assert!(json[0].get("metadata").is_none());
}

#[test]
fn test_markdown_output() {
    splitkit()
        .args(["split", "-i", &fixture_path("fields.csv"), "--one-of", ",\\n"])
        .args(["--drop-blanks", "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## tests/fixtures/fields.csv"))
        .stdout(predicate::str::contains("1. `name`"))
        .stdout(predicate::str::contains("*Total pieces: 6*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("pieces.txt");

    splitkit()
        .args(["split", "-i", "-", "--every", "2", "-o"])
        .arg(&output_file)
        .write_stdin("abcde")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output_file).unwrap(), "ab\ncd\ne\n");
}

#[test]
fn test_glob_pattern_with_parallel() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "1,2").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "3,4").unwrap();
    let pattern = temp_dir.path().join("*.txt");

    splitkit()
        .args(["split", "--one-of", ",", "-q", "-p", "-t", "2", "-i"])
        .arg(pattern.to_str().unwrap())
        .assert()
        .success()
        .stdout("1\n2\n3\n4\n");
}

#[test]
fn test_config_file_strategy() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("splitkit.toml");
    fs::write(
        &config_path,
        r##"
[split.strategy]
type = "delimited"
disposition = "keep_with_following"
leading_blank = "drop_blank"

[split.strategy.delimiter]
type = "on"
text = "#"
"##,
    )
    .unwrap();

    splitkit()
        .args(["split", "-i", "-", "-c"])
        .arg(&config_path)
        .write_stdin("#one#two")
        .assert()
        .success()
        .stdout("#one\n#two\n");

    // Command-line flags override the file
    splitkit()
        .args(["split", "-i", "-", "--delims", "drop", "-c"])
        .arg(&config_path)
        .write_stdin("#one#two")
        .assert()
        .success()
        .stdout("one\ntwo\n");
}

#[test]
fn test_invalid_file() {
    splitkit()
        .args(["split", "-i", "nonexistent.txt", "--one-of", ","])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_zero_chunk_size_rejected() {
    splitkit()
        .args(["split", "-i", "-", "--every", "0"])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_conflicting_flags_rejected() {
    splitkit()
        .args(["split", "-i", "-", "--one-of", ",", "--on", ";"])
        .assert()
        .failure();

    splitkit()
        .args(["split", "-i", "-", "--every", "2", "--window", "2"])
        .assert()
        .failure();

    // A delimiter cannot be combined with a chunking strategy
    splitkit()
        .args(["split", "-i", "-", "--every", "3", "--one-of", ","])
        .write_stdin("a,b,c,d")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_help_command() {
    splitkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("generate-config"));
}

#[test]
fn test_list_commands() {
    splitkit()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));

    splitkit()
        .args(["list", "strategies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("powers_of_two"));

    splitkit()
        .args(["list", "classes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("whitespace"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("splitkit.toml");

    splitkit()
        .args(["generate-config", "-t", "words", "-o"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    splitkit()
        .args(["validate", "-c"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));

    splitkit()
        .args(["split", "-i", &fixture_path("words.txt"), "-c"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout("the\nquick\nbrown\nfox\njumps\nover\n");
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[split.strategy]\ntype = \"sizes\"\nsizes = []\n").unwrap();

    splitkit()
        .args(["validate", "-c"])
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

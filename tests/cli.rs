//! CLI integration tests for rcnb
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn rcnb() -> Command {
    Command::cargo_bin("rcnb").unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rcnb-cli-{}-{}", std::process::id(), name))
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    rcnb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RCNB"))
        .stdout(predicate::str::contains("encode"))
        .stdout(predicate::str::contains("decode"));
}

#[test]
fn test_version() {
    rcnb()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rcnb"));
}

#[test]
fn test_missing_subcommand() {
    rcnb().assert().failure();
}

#[test]
fn test_config_text() {
    rcnb()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Active backend"))
        .stdout(predicate::str::contains("rRŔŕŖŗŘřƦȐȑȒȓɌɍ"))
        .stdout(predicate::str::contains("bBƀƁƃƄƅßÞþ"));
}

#[test]
fn test_config_json() {
    let output = rcnb().args(["config", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["settings"]["max_size"].is_u64());
    assert!(json["acceleration_available"].is_boolean());
    assert_eq!(json["alphabets"]["C"], "cCĆćĈĉĊċČčƇƈÇȻȼ");
}

#[test]
fn test_config_json_scalar() {
    let output = rcnb()
        .args(["--scalar", "config", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["backend"], "scalar");
}

// ============================================================================
// Encoding / Decoding
// ============================================================================

#[test]
fn test_encode() {
    rcnb()
        .arg("encode")
        .write_stdin("rcnb")
        .assert()
        .success()
        .stdout("ɌcńƁȓČņÞ\n");
}

#[test]
fn test_encode_odd_length() {
    rcnb()
        .arg("encode")
        .write_stdin("@")
        .assert()
        .success()
        .stdout("ŖĈ\n");
}

#[test]
fn test_encode_empty() {
    rcnb()
        .arg("encode")
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_encode_scalar_matches() {
    rcnb()
        .args(["--scalar", "encode"])
        .write_stdin("我爱你")
        .assert()
        .success()
        .stdout("ȵÞȒčƝƁŔcǹƄrȼȠþȒĊńƀ\n");
}

#[test]
fn test_encode_wrap() {
    rcnb()
        .args(["encode", "--wrap", "4"])
        .write_stdin("rcnb")
        .assert()
        .success()
        .stdout("ɌcńƁ\nȓČņÞ\n");
}

#[test]
fn test_decode() {
    rcnb()
        .arg("decode")
        .write_stdin("ɌcńƁȓČņÞ\n")
        .assert()
        .success()
        .stdout("rcnb");
}

#[test]
fn test_decode_wrapped_input() {
    rcnb()
        .arg("decode")
        .write_stdin("ɌcńƁ\nȓČņÞ\r\n")
        .assert()
        .success()
        .stdout("rcnb");
}

#[test]
fn test_decode_hex() {
    rcnb()
        .args(["decode", "--hex"])
        .write_stdin("ɌcńƁȓČņÞ")
        .assert()
        .success()
        .stdout("72636e62\n");
}

#[test]
fn test_roundtrip_binary() {
    let data: Vec<u8> = (0..=255u8).rev().collect();

    let encoded = rcnb()
        .arg("encode")
        .write_stdin(data.clone())
        .output()
        .unwrap()
        .stdout;

    rcnb()
        .arg("decode")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout(data);
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_file_input_and_output() {
    let input = temp_path("input.bin");
    let encoded = temp_path("encoded.txt");
    let decoded = temp_path("decoded.bin");
    fs::write(&input, b"file contents\x00\xff").unwrap();

    rcnb()
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&encoded)
        .assert()
        .success()
        .stdout("");

    rcnb()
        .arg("decode")
        .arg(&encoded)
        .arg("--output")
        .arg(&decoded)
        .assert()
        .success();

    assert_eq!(fs::read(&decoded).unwrap(), b"file contents\x00\xff");

    for path in [input, encoded, decoded] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn test_max_size_limit() {
    let input = temp_path("large.bin");
    fs::write(&input, vec![0u8; 64]).unwrap();

    rcnb()
        .args(["--max-size", "32", "encode"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds limit"));

    rcnb()
        .args(["--max-size", "32", "--force", "--quiet", "encode"])
        .arg(&input)
        .assert()
        .success();

    let _ = fs::remove_file(input);
}

#[test]
fn test_stdin_max_size_limit() {
    rcnb()
        .args(["--max-size", "3", "encode"])
        .write_stdin("rcnb")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_decode_odd_length_fails() {
    rcnb()
        .arg("decode")
        .write_stdin("Ɍcń")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_decode_invalid_character_fails() {
    rcnb()
        .arg("decode")
        .write_stdin("ɌcńƁxČņÞ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'x'"))
        .stderr(predicate::str::contains("position 4"));
}

#[test]
fn test_decode_error_position_counts_line_breaks() {
    rcnb()
        .arg("decode")
        .write_stdin("ɌcńƁ\nxČņÞ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'x' at position 5"));
}

#[test]
fn test_decode_overflow_fails() {
    rcnb()
        .arg("decode")
        .write_stdin("ɍČŇÞ")
        .assert()
        .failure();
}

#[test]
fn test_decode_non_utf8_fails() {
    rcnb()
        .arg("decode")
        .write_stdin(vec![0xffu8, 0xfe])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UTF-8"));
}

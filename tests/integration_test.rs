//! Integration tests for the mockcards CLI.
//!
//! These tests run the actual binary and verify the CSV written to stdout.

use assert_cmd::Command;
use predicates::prelude::*;

const CARDS_HEADER: &str = "card_number,owner_name,balance,transaction_count";
const TRANSACTIONS_HEADER: &str = "kind,change_amount,date,card_number";

/// Run the binary with the given arguments and return stdout.
fn run_cli(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("mockcards").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_default_run_prints_ten_card_rows() {
    let output = run_cli(&[]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], CARDS_HEADER);
    assert_eq!(lines.len(), 11); // header + 10 cards
}

#[test]
fn test_explicit_card_count() {
    let output = run_cli(&["3"]);
    assert_eq!(output.lines().count(), 4); // header + 3 cards
}

#[test]
fn test_zero_cards_produces_no_output() {
    let output = run_cli(&["0"]);
    assert!(output.is_empty());
}

#[test]
fn test_card_rows_have_well_formed_numbers() {
    let output = run_cli(&["--seed", "7"]);

    for line in output.lines().skip(1) {
        let number = line.split(',').next().unwrap();
        assert_eq!(number.len(), 16);
        assert!(number.bytes().all(|b| b.is_ascii_digit()));
        assert!(number.starts_with("54"));
    }
}

#[test]
fn test_same_seed_reproduces_the_same_cards() {
    let first = run_cli(&["--seed", "42"]);
    let second = run_cli(&["--seed", "42"]);

    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_diverge() {
    let first = run_cli(&["--seed", "1"]);
    let second = run_cli(&["--seed", "2"]);

    assert_ne!(first, second);
}

#[test]
fn test_transactions_flag_switches_the_output() {
    let output = run_cli(&["--transactions", "--seed", "7"]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], TRANSACTIONS_HEADER);
    assert!(lines.len() > 1);

    for line in &lines[1..] {
        let kind = line.split(',').next().unwrap();
        assert!(matches!(kind, "transfer" | "deposit" | "purchase"));
    }
}

#[test]
fn test_non_numeric_count_fails_with_usage() {
    let mut cmd = Command::cargo_bin("mockcards").unwrap();
    cmd.arg("ten")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: mockcards"));
}

#[test]
fn test_bad_seed_fails_with_usage() {
    let mut cmd = Command::cargo_bin("mockcards").unwrap();
    cmd.args(["--seed", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: mockcards"));
}

#[test]
fn test_missing_seed_value_fails() {
    let mut cmd = Command::cargo_bin("mockcards").unwrap();
    cmd.arg("--seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--seed needs a value"));
}

//! Integration tests for the CLI interface

mod common;

use common::{TestContext, REFERENCE_RETREAT_YAML};
use predicates::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn decimal(value: &serde_json::Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

#[test]
fn test_cli_help_flag() {
    let ctx = TestContext::new().unwrap();
    ctx.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("calculate"));
}

#[test]
fn test_invalid_command() {
    let ctx = TestContext::new().unwrap();
    ctx.command()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_calculate_reference_retreat() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file("retreat.yaml", REFERENCE_RETREAT_YAML).unwrap();

    ctx.command()
        .args(["calculate", "retreat.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lakeside Reset"))
        .stdout(predicate::str::contains("20 attendees, 5 nights"))
        .stdout(predicate::str::contains("$20,000.00"))
        .stdout(predicate::str::contains("$3,500.00"))
        .stdout(predicate::str::contains("Platform fee (30%)"))
        .stdout(predicate::str::contains("$10,500.00"));
}

#[test]
fn test_calculate_json_output() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file("retreat.yaml", REFERENCE_RETREAT_YAML).unwrap();

    let output = ctx
        .command()
        .args(["calculate", "retreat.yaml", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let economics = &report["economics"];
    assert_eq!(decimal(&economics["total_revenue"]), Decimal::from(20000));
    assert_eq!(decimal(&economics["total_team_cost"]), Decimal::from(3500));
    assert_eq!(decimal(&economics["platform_fee"]), Decimal::from(6000));
    assert_eq!(decimal(&economics["host_profit"]), Decimal::from(10500));
    assert_eq!(report["payout_schedule"]["lines"].as_array().unwrap().len(), 3);
    assert_eq!(report["input"]["num_nights"], 5);
}

#[test]
fn test_calculate_with_rate_override() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file("retreat.yaml", REFERENCE_RETREAT_YAML).unwrap();

    ctx.command()
        .args(["calculate", "retreat.yaml", "--platform-fee-rate", "0.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform fee (20%)"))
        .stdout(predicate::str::contains("$12,500.00"));
}

#[test]
fn test_calculate_rejects_rate_above_one() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file("retreat.yaml", REFERENCE_RETREAT_YAML).unwrap();

    ctx.command()
        .args(["calculate", "retreat.yaml", "--platform-fee-rate", "1.5"])
        .assert()
        .failure()
        .code(8)
        .stderr(predicate::str::contains("platform_fee_rate"));
}

#[test]
fn test_calculate_uses_project_config() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file("retreat.yaml", REFERENCE_RETREAT_YAML).unwrap();
    ctx.with_project_config("platform_fee_rate = 0.25\ncurrency_symbol = \"€\"\n")
        .unwrap();

    ctx.command()
        .args(["calculate", "retreat.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform fee (25%)"))
        .stdout(predicate::str::contains("€5,000.00"));
}

#[test]
fn test_calculate_fails_on_negative_fee() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file(
        "retreat.json",
        r#"{
            "price_per_person": 400,
            "max_attendees": 10,
            "num_nights": 2,
            "team_members": [
                { "role": "staff", "fee_type": "flat", "fee_amount": -50 }
            ]
        }"#,
    )
    .unwrap();

    ctx.command()
        .args(["calculate", "retreat.json"])
        .assert()
        .failure()
        .code(8)
        .stderr(predicate::str::contains("team_members[0].fee_amount"));
}

#[test]
fn test_unknown_fee_type_counts_as_zero_by_default() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file(
        "retreat.toml",
        r#"
price_per_person = 500
max_attendees = 10
num_nights = 3

[[team_members]]
role = "staff"
fee_type = "per_week"
fee_amount = 700
"#,
    )
    .unwrap();

    ctx.command()
        .args(["calculate", "retreat.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3,500.00"))
        .stderr(predicate::str::contains("unrecognized fee type 'per_week'"));

    ctx.command()
        .args(["check", "retreat.toml"])
        .env("RETREAT_UNKNOWN_FEE_TYPE", "reject")
        .assert()
        .failure()
        .code(8)
        .stdout(predicate::str::contains("1 error(s), 0 warning(s)"));
}

#[test]
fn test_check_clean_file() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file("retreat.yaml", REFERENCE_RETREAT_YAML).unwrap();

    ctx.command()
        .args(["check", "retreat.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_missing_retreat_file() {
    let ctx = TestContext::new().unwrap();

    ctx.command()
        .args(["calculate", "absent.json"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn test_unsupported_retreat_format() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file("retreat.csv", "price,attendees\n").unwrap();

    ctx.command()
        .args(["calculate", "retreat.csv"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_fee_command() {
    let ctx = TestContext::new().unwrap();

    ctx.command()
        .args(["fee", "per_person", "50", "--attendees", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$50.00 × 20 attendees = $1,000.00"));

    ctx.command()
        .args(["fee", "percentage", "10", "--price", "1000", "--attendees", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= $2,000.00"));
}

#[test]
fn test_config_show_reflects_environment() {
    let ctx = TestContext::new().unwrap();

    ctx.command()
        .args(["config", "show"])
        .env("RETREAT_PLATFORM_FEE_RATE", "0.15")
        .assert()
        .success()
        .stdout(predicate::str::contains("platform_fee_rate = 0.15 (15%)"));
}

#[test]
fn test_invalid_config_exits_with_config_code() {
    let ctx = TestContext::new().unwrap();

    ctx.command()
        .args(["config", "show"])
        .env("RETREAT_LOG_LEVEL", "chatty")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("log_level"));
}

#[test]
fn test_explicit_config_must_exist() {
    let ctx = TestContext::new().unwrap();

    ctx.command()
        .args(["--config", "missing.toml", "config", "show"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_reversed_dates_reported_once() {
    let ctx = TestContext::new().unwrap();
    ctx.with_file(
        "retreat.json",
        r#"{
            "price_per_person": 300,
            "max_attendees": 6,
            "start_date": "2026-06-10",
            "end_date": "2026-06-08"
        }"#,
    )
    .unwrap();

    let output = ctx
        .command()
        .args(["calculate", "retreat.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("is before start date").count(), 1);
    assert!(String::from_utf8_lossy(&output.stdout).contains("0 nights"));
}

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_quote_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "quote",
        "--base-price",
        "500",
        "--area",
        "100",
        "--installments",
        "12",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("price per m2:    600.00"))
        .stdout(predicate::str::contains("gross total:     60000.00"))
        .stdout(predicate::str::contains("down payment:    15000.00"))
        .stdout(predicate::str::contains("financed:        45000.00"))
        .stdout(predicate::str::contains("monthly payment: 3750.00"));

    Ok(())
}

#[test]
fn test_quote_with_bonus() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "quote",
        "--base-price",
        "500",
        "--area",
        "100",
        "--installments",
        "12",
        "--bonus",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("net total:       45000.00"))
        .stdout(predicate::str::contains("down payment:    11250.00"))
        .stdout(predicate::str::contains("monthly payment: 2812.50"));
}

#[test]
fn test_quote_json_output() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "quote",
        "--base-price",
        "500",
        "--area",
        "100",
        "--corner",
        "--park",
        "--json",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let quote: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(quote["price_per_m2"], serde_json::json!("800"));
    assert_eq!(quote["single_payment"], serde_json::json!(false));
}

#[test]
fn test_quote_single_installment() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "quote",
        "--base-price",
        "500",
        "--area",
        "100",
        "--installments",
        "1",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("single payment:  45000.00"));
}

#[test]
fn test_quote_rejects_invalid_installments() {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "quote",
        "--base-price",
        "500",
        "--area",
        "100",
        "--installments",
        "37",
    ]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "number of installments must be between 1 and 36",
    ));
}

#[test]
fn test_report_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args([
        "report",
        "--sales",
        "tests/fixtures/sales.csv",
        "--payments",
        "tests/fixtures/payments.csv",
        "--as-of",
        "2025-04-15",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "sale,client,lot,date,total,paid,aging,days_late,schedule",
        ))
        // Sale 1: no payments, 45 days since the sale date.
        .stdout(predicate::str::contains(
            "1,1,1,2025-03-01,60000.00,0.00,delinquent,45,pending",
        ))
        // Sale 2: settled against total - bonus, but the gross total is
        // still outstanding for the aging view.
        .stdout(predicate::str::contains(
            "2,2,2,2025-01-01,60000.00,45000.00,overdue,100,paid",
        ));

    Ok(())
}

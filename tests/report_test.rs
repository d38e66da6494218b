mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::{PAYMENTS_HEADER, SALES_HEADER, write_csv};
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_report_paid_sale_has_zero_delay() {
    let dir = tempfile::tempdir().unwrap();
    let sales = dir.path().join("sales.csv");
    let payments = dir.path().join("payments.csv");

    write_csv(
        &sales,
        &SALES_HEADER,
        &[&[
            "1",
            "1",
            "1",
            "2024-01-01",
            "60000",
            "0",
            "1200",
            "1800",
            "12",
            "3750",
            "600",
        ]],
    )
    .unwrap();
    write_csv(
        &payments,
        &PAYMENTS_HEADER,
        &[
            &["1", "1", "2024-02-01", "cash", "30000", ""],
            &["2", "1", "2024-03-01", "transfer", "30000", ""],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!());
    cmd.args(["report", "--sales"])
        .arg(&sales)
        .arg("--payments")
        .arg(&payments)
        .args(["--as-of", "2026-01-01"]);

    // Fully paid stays paid no matter how much time passes.
    cmd.assert().success().stdout(predicate::str::contains(
        "1,1,1,2024-01-01,60000.00,60000.00,paid,0,paid",
    ));
}

#[test]
fn test_report_zero_total_sale_does_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    let sales = dir.path().join("sales.csv");
    let payments = dir.path().join("payments.csv");

    write_csv(
        &sales,
        &SALES_HEADER,
        &[&[
            "1",
            "1",
            "1",
            "2025-01-01",
            "0",
            "0",
            "0",
            "0",
            "1",
            "0",
            "0",
        ]],
    )
    .unwrap();
    write_csv(&payments, &PAYMENTS_HEADER, &[]).unwrap();

    let mut cmd = Command::new(cargo_bin!());
    cmd.args(["report", "--sales"])
        .arg(&sales)
        .arg("--payments")
        .arg(&payments)
        .args(["--as-of", "2025-01-10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("current"));
}

#[test]
fn test_report_skips_malformed_rows() {
    let dir = tempfile::tempdir().unwrap();
    let sales = dir.path().join("sales.csv");
    let payments = dir.path().join("payments.csv");

    write_csv(
        &sales,
        &SALES_HEADER,
        &[
            &[
                "1",
                "1",
                "1",
                "2025-03-01",
                "60000",
                "0",
                "1200",
                "1800",
                "12",
                "3750",
                "600",
            ],
            // Unparseable date; the row is skipped, the report continues.
            &[
                "2",
                "2",
                "2",
                "not-a-date",
                "50000",
                "0",
                "1000",
                "1500",
                "12",
                "3125",
                "500",
            ],
        ],
    )
    .unwrap();
    write_csv(&payments, &PAYMENTS_HEADER, &[]).unwrap();

    let mut cmd = Command::new(cargo_bin!());
    cmd.env("RUST_LOG", "warn");
    cmd.args(["report", "--sales"])
        .arg(&sales)
        .arg("--payments")
        .arg(&payments)
        .args(["--as-of", "2025-04-15"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("skipping malformed record"))
        .stdout(predicate::str::contains("1,1,1,2025-03-01"))
        .stdout(predicate::str::contains("50000").not());
}

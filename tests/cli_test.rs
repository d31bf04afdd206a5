mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn command() -> Command {
    let mut cmd = Command::new(cargo_bin!("payment-service"));
    cmd.env_remove("STRIPE_API_KEY").env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_cli_demo_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let log_path = dir.path().join("transactions.log");

    command()
        .arg("demo")
        .arg("--sandbox")
        .arg("--log-path")
        .arg(&log_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"email: {"status":"success","amount":100"#))
        .stdout(predicate::str::contains("refund: "))
        .stdout(predicate::str::contains("factory cad: "))
        .stdout(predicate::str::contains("builder: "))
        .stderr(predicate::str::contains(
            "offline refund failed: This processor does not support refunds",
        ))
        .stderr(predicate::str::contains(
            "offline recurring failed: This processor does not support recurring payments",
        ))
        .stderr(predicate::str::contains("declined failed: Payment failed"));

    let log = std::fs::read_to_string(&log_path)?;
    assert_eq!(log.lines().count(), 10);
    assert!(log.contains("Jane Doe paid 100 CAD - status: success"));
    assert_eq!(log.lines().filter(|l| l.starts_with("refund for ch_")).count(), 1);

    Ok(())
}

#[test]
fn test_cli_batch_continues_after_bad_rows() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let log_path = dir.path().join("transactions.log");

    command()
        .arg("batch")
        .arg("tests/fixtures/payments.csv")
        .arg("--sandbox")
        .arg("--log-path")
        .arg(&log_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""message":"Offline payment success""#))
        .stdout(predicate::str::contains("local-transaction-id-"))
        .stderr(predicate::str::contains("Error processing payment: Payment failed"))
        .stderr(predicate::str::contains(
            "Error reading payment: Invalid payment type: wire",
        ))
        .stderr(predicate::str::contains(
            "Error processing payment: No valid contact channel for customer 'Nobody'",
        ));

    let log = std::fs::read_to_string(&log_path)?;
    assert_eq!(
        log.lines().collect::<Vec<_>>(),
        vec![
            "John Doe paid 100 USD - status: success",
            "Jane Doe paid 250 CAD - status: success",
            "Offline Olly paid 75 USD - status: success",
        ]
    );

    Ok(())
}

#[test]
fn test_cli_batch_generated_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("generated.csv");
    let log_path = dir.path().join("transactions.log");
    common::generate_csv(
        &input,
        &[
            ["Ann", "ann@example.com", "", "", "1", "tok_visa", "EUR", "online"],
            ["Ben", "", "555", "", "2", "tok_visa", "", "offline"],
        ],
    )?;

    let output = command()
        .arg("batch")
        .arg(&input)
        .arg("--sandbox")
        .arg("--log-path")
        .arg(&log_path)
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);

    Ok(())
}

#[test]
fn test_cli_missing_input_fails() {
    command()
        .arg("batch")
        .arg("does/not/exist.csv")
        .arg("--sandbox")
        .assert()
        .failure();
}

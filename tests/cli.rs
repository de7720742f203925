use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paycheck(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("paycheck").unwrap();
    cmd.env("PAYCHECK_PLANNER_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn quick_prints_summary_table() {
    let dir = TempDir::new().unwrap();
    paycheck(&dir)
        .args(["quick", "--income", "1000", "--wants", "100", "--debt", "50", "--goals", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income"))
        .stdout(predicate::str::contains("$1,000.00"))
        .stdout(predicate::str::contains("Future Goals"))
        .stdout(predicate::str::contains("$151.00"));
}

#[test]
fn quick_rejects_over_budget_wants() {
    let dir = TempDir::new().unwrap();
    paycheck(&dir)
        .args(["quick", "--income", "1000", "--wants", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only $401.00 available"));
}

#[test]
fn quick_rejects_zero_income() {
    let dir = TempDir::new().unwrap();
    paycheck(&dir)
        .args(["quick", "--income", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid income amount"));
}

#[test]
fn quick_csv_in_final_wants_flow() {
    let dir = TempDir::new().unwrap();
    paycheck(&dir)
        .args([
            "--variant",
            "final-wants",
            "quick",
            "--income",
            "1000",
            "--wants",
            "10",
            "--wants",
            "10",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("label,category,kind,amount"))
        .stdout(predicate::str::contains("Wants,wants,expense,20.00"))
        .stdout(predicate::str::contains("Unallocated,,remaining,381.00"));
}

#[test]
fn plan_runs_from_piped_input() {
    let dir = TempDir::new().unwrap();
    paycheck(&dir)
        .arg("plan")
        .write_stdin("1000\n\n\n\n26\n100\n100\n50\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your plan"))
        .stdout(predicate::str::contains("$125.00"));
}

#[test]
fn plan_fails_when_input_ends() {
    let dir = TempDir::new().unwrap();
    paycheck(&dir)
        .arg("plan")
        .write_stdin("1000\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Planning aborted"));
}

#[test]
fn config_init_writes_file() {
    let dir = TempDir::new().unwrap();
    paycheck(&dir)
        .args(["--variant", "final-wants", "config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings"))
        .stdout(predicate::str::contains("final-wants"));

    assert!(dir.path().join("config.json").exists());

    paycheck(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("final-wants"))
        .stdout(predicate::str::contains("not created").not());
}

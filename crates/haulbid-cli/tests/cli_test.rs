//! Runs the `haul-bid` binary with an isolated config directory

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn haul_bid(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_haul-bid"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run haul-bid")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_tonnage_table_output() {
    let home = tempdir().unwrap();
    let output = haul_bid(home.path(), &["tonnage"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Hauling Services Bid Summary"));
    assert!(text.contains("--- Job Summary ---"));
    assert!(text.contains("--- Profit Analysis ---"));
    assert!(text.contains("$16,800.00"));
    assert!(text.contains("$8,200.00"));
    assert!(text.contains("32.80%"));
}

#[test]
fn test_hourly_json_output() {
    let home = tempdir().unwrap();
    let output = haul_bid(
        home.path(),
        &["hourly", "--format", "json", "--trucks", "1", "--rate", "95"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["type"], "hourly");
    assert_eq!(value["total_hours"], 40.0);
    assert_eq!(value["total_payout"], 3800.0);
}

#[test]
fn test_markup_mode_flag() {
    let home = tempdir().unwrap();
    let output = haul_bid(
        home.path(),
        &["tonnage", "--payout-mode", "markup_percent", "-f", "json"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["payout_mode"], "markup_percent");
    let markup = value["markup_amount"].as_f64().unwrap();
    assert!((markup - 3360.0).abs() < 1e-6);
    assert_eq!(value["profit"], value["markup_amount"]);
}

#[test]
fn test_zero_mpg_fails_fast() {
    let home = tempdir().unwrap();
    let output = haul_bid(home.path(), &["tonnage", "--mpg", "0"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error:"), "stderr: {}", err);
    assert!(err.contains("miles_per_gallon"), "stderr: {}", err);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_quote_file_with_export() {
    let home = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output_path = out_dir.path().join("bid.csv");
    let output = haul_bid(
        home.path(),
        &[
            "quote",
            fixture("tonnage_markup.toml").to_str().unwrap(),
            "--output",
            output_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Bid saved to"));

    let csv = std::fs::read_to_string(&output_path).unwrap();
    assert!(csv.contains("Client,County Roads Dept."));
    assert!(csv.contains("Total Payout,\"$20,160.00\""));
}

#[test]
fn test_config_persists_between_runs() {
    let home = tempdir().unwrap();
    let export_dir = home.path().join("bids");

    let output = haul_bid(
        home.path(),
        &[
            "config",
            "--set-payout-mode",
            "markup_percent",
            "--set-company",
            "DirtyBiz Hauling",
            "--set-export-format",
            "json",
            "--set-export-dir",
            export_dir.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Configuration updated"));

    let output = haul_bid(home.path(), &["tonnage", "--export"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("DirtyBiz Hauling"));
    assert!(text.contains("$20,160.00"));

    let exported = export_dir.join("hauling_services_bid_summary.json");
    let summary: serde_json::Value =
        serde_json::from_slice(&std::fs::read(exported).unwrap()).unwrap();
    assert_eq!(summary["title"], "Hauling Services Bid Summary");

    let output = haul_bid(home.path(), &["config", "--reset"]);
    assert!(output.status.success());
    let output = haul_bid(home.path(), &["config", "--show"]);
    assert!(stdout(&output).contains("Payout mode:    fixed_payout"));
}

#[test]
fn test_reset_recovers_from_corrupt_config() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join(".config").join("haul-bid");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "{not json").unwrap();

    let output = haul_bid(home.path(), &["tonnage"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Configuration error"));

    let output = haul_bid(home.path(), &["config", "--reset"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Configuration reset to defaults"));

    let output = haul_bid(home.path(), &["tonnage"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_negative_rate_reaches_validation() {
    let home = tempdir().unwrap();
    let output = haul_bid(home.path(), &["hourly", "--rate", "-5"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("Error: Invalid input for hourly_rate_per_truck"), "stderr: {}", err);
    assert!(!err.contains("unexpected argument"), "stderr: {}", err);
}

#[test]
fn test_pdf_export_from_output_extension() {
    let home = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let output_path = out_dir.path().join("bid.pdf");
    let output = haul_bid(
        home.path(),
        &["tonnage", "--output", output_path.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(std::fs::read(&output_path).unwrap().starts_with(b"%PDF"));
}

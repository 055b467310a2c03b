//! ---
//! dcc_section: "05-networking-external-interfaces"
//! dcc_subsection: "integration-tests"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Command-line checks for the dccalc binary."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use std::fs;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::tempdir;

fn dccalc() -> Command {
    let mut cmd = Command::cargo_bin("dccalc").unwrap();
    cmd.env_remove("DCC_CONFIG").env("DCC_LOG", "warn");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

fn json_of(cmd: &mut Command) -> Value {
    serde_json::from_str(&stdout_of(cmd)).unwrap()
}

#[test]
fn version_flag_prints_package_version() {
    let out = stdout_of(dccalc().arg("-V"));
    assert!(out.starts_with("dccalc "));
    assert!(out.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn ohm_solves_for_current() {
    let body = json_of(dccalc().args([
        "--format",
        "json",
        "ohm",
        "--solve-for",
        "current",
        "--voltage",
        "12",
        "--resistance",
        "4",
    ]));
    assert_eq!(body["calculator"], "ohm");
    assert_eq!(body["current"], 3.0);
}

#[test]
fn ohm_requires_the_other_two_quantities() {
    dccalc()
        .args(["ohm", "--solve-for", "voltage", "--current", "2"])
        .assert()
        .failure();
}

#[test]
fn parallel_skips_zero_resistors() {
    let out = stdout_of(dccalc().args(["parallel", "0", "10"]));
    assert!(out.contains("10.00 Ω"));
}

#[test]
fn series_rejects_a_single_resistor() {
    dccalc().args(["series", "10"]).assert().failure();
}

#[test]
fn kvl_text_output_lists_drops() {
    let out = stdout_of(dccalc().args(["kvl", "--voltage", "12", "4", "6", "2"]));
    assert!(out.contains("1.00 A"));
    assert!(out.contains("drop R3"));
}

#[test]
fn kcl_accepts_negative_currents() {
    let body = json_of(dccalc().args([
        "--format",
        "json",
        "kcl",
        "--incoming",
        "-1",
        "--outgoing",
        "2",
    ]));
    assert_eq!(body["outgoing_derived"], -3.0);
}

#[test]
fn advise_reports_voltage_overload() {
    let body = json_of(dccalc().args([
        "--format", "json", "advise", "--power", "1500", "--voltage", "250", "--current", "15",
    ]));
    assert_eq!(body["rating"], "Overload");
    assert_eq!(body["severity"], "red");
}

#[test]
fn configured_precision_is_applied() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("dccalc.toml");
    fs::write(&config, "[display]\nprecision = 4\n").unwrap();
    let out = stdout_of(dccalc().args([
        "--config",
        config.to_str().unwrap(),
        "emf",
        "--emf",
        "12",
        "--internal-resistance",
        "0.5",
        "--current",
        "2",
    ]));
    assert!(out.contains("11.0000 V"));
    assert!(out.contains("91.6667 %"));
}

#[test]
fn missing_explicit_config_fails() {
    dccalc()
        .args(["--config", "does/not/exist.toml", "kcl", "--incoming", "5", "--outgoing", "2"])
        .assert()
        .failure();
}

#[test]
fn eval_reads_yaml_and_exports_report() {
    let dir = tempdir().unwrap();
    let request = dir.path().join("power.yaml");
    fs::write(
        &request,
        "calculator: power\nvoltage: 220\ncurrent: 5\nresistance: 44\nduration_hours: 1\n",
    )
    .unwrap();
    let reports = dir.path().join("reports");

    let body = json_of(dccalc().args([
        "--format",
        "json",
        "--report-dir",
        reports.to_str().unwrap(),
        "eval",
        "--file",
        request.to_str().unwrap(),
    ]));
    assert_eq!(body["tier"], "Tinggi");
    assert!((body["cost"].as_f64().unwrap() - 1650.0).abs() < 1e-6);

    let written: Vec<_> = fs::read_dir(&reports).unwrap().collect();
    assert_eq!(written.len(), 1);
}

#[test]
fn chart_emits_characteristic_series() {
    let body = json_of(dccalc().args([
        "--format",
        "json",
        "chart",
        "emf-characteristic",
        "--emf",
        "12",
        "--internal-resistance",
        "0.5",
    ]));
    assert_eq!(body["kind"], "emf-characteristic");
    assert_eq!(body["series"][0]["points"].as_array().unwrap().len(), 100);
    assert!(body["marker"].is_object());
}

#[test]
fn chart_rejects_unknown_kind() {
    dccalc().args(["chart", "pie"]).assert().failure();
}

#[test]
fn signal_accepts_negative_dc_level() {
    let body = json_of(dccalc().args(["--format", "json", "signal", "--dc", "-5"]));
    assert_eq!(body["calculator"], "signal");
    assert_eq!(body["samples"]["dc_level"], -5.0);
    assert_eq!(body["power"]["dc_power_w"], 2.5);
}

#[test]
fn chart_accepts_negative_parameters() {
    let body = json_of(dccalc().args([
        "--format",
        "json",
        "chart",
        "voltage-current",
        "--resistance",
        "-2",
    ]));
    let points = body["series"][0]["points"].as_array().unwrap();
    assert_eq!(points.last().unwrap()["y"], -10.0);
}

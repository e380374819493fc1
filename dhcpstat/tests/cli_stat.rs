use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::{tempdir, TempDir};

const LEASES: &str = "\
lease 10.0.0.5 {
  starts 4 2006/02/23 18:34:48;
  ends 5 2006/02/24 18:34:48;
  #shared-network: poolA
  binding state active;
}
";

const STATUS: &str = "\
request-count: 42
response-count: 40
";

const CONF: &str = "\
shared-network poolA {
  range 10.0.0.0 10.0.0.255;
}
";

/// Lay out pid/leases/status/conf files plus a paths TOML pointing at them.
fn server_fixture(dir: &Path) -> PathBuf {
    fs::write(dir.join("dhcpd.pid"), "1234\n").expect("pid write");
    fs::write(dir.join("dhcpd.leases"), LEASES).expect("leases write");
    fs::write(dir.join("dhcpd.status"), STATUS).expect("status write");
    fs::write(dir.join("dhcpd.conf"), CONF).expect("conf write");
    write_paths_file(dir)
}

fn write_paths_file(dir: &Path) -> PathBuf {
    let paths_file = dir.join("paths.toml");
    let toml = format!(
        "pid_file = {:?}\nleases_file = {:?}\nstatus_file = {:?}\nconf_file = {:?}\n",
        dir.join("dhcpd.pid"),
        dir.join("dhcpd.leases"),
        dir.join("dhcpd.status"),
        dir.join("dhcpd.conf"),
    );
    fs::write(&paths_file, toml).expect("paths write");
    paths_file
}

fn dhcpstat() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dhcpstat"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn fixture_dir() -> TempDir {
    tempdir().expect("tempdir")
}

#[test]
fn text_report_correlates_all_three_sources() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());

    dhcpstat()
        .arg("--paths-file")
        .arg(&paths_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("requests=42 responses=40"))
        .stdout(predicate::str::contains(
            "- poolA: total=256 leased=1 available=255",
        ));
}

#[test]
fn xml_report_preserves_opcommand_shape() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());

    dhcpstat()
        .arg("--paths-file")
        .arg(&paths_file)
        .arg("--format")
        .arg("xml")
        .assert()
        .success()
        .stdout(predicate::str::contains("<opcommand name=\"dhcpstat\">"))
        .stdout(predicate::str::contains(
            "<num_requests>42</num_requests><num_responses>40</num_responses>",
        ))
        .stdout(predicate::str::contains(
            "<format type=\"row\"><row><pool>poolA</pool>\
             <num_total_addr>256</num_total_addr>\
             <num_lease_addr>1</num_lease_addr>\
             <num_avail_addr>255</num_avail_addr>\
             <interface></interface></row></format>",
        ));
}

#[test]
fn json_report_carries_counters_as_strings_and_counts_as_numbers() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());

    let output = dhcpstat()
        .arg("--paths-file")
        .arg(&paths_file)
        .arg("--format")
        .arg("json")
        .output()
        .expect("dhcpstat output");
    assert!(output.status.success(), "dhcpstat should succeed");

    let report: Value = serde_json::from_slice(&output.stdout).expect("json parse");
    assert_eq!(report["num_requests"].as_str(), Some("42"));
    assert_eq!(report["num_responses"].as_str(), Some("40"));

    let rows = report["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["pool"].as_str(), Some("poolA"));
    assert_eq!(rows[0]["num_total_addr"].as_u64(), Some(256));
    assert_eq!(rows[0]["num_avail_addr"].as_i64(), Some(255));
    assert_eq!(rows[0]["interface"].as_str(), Some(""));
}

#[test]
fn absent_pid_file_prints_reason_and_exits_zero() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());
    fs::remove_file(dir.path().join("dhcpd.pid")).expect("remove pid");

    dhcpstat()
        .arg("--paths-file")
        .arg(&paths_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("dhcp server is not running"))
        .stdout(predicate::str::contains("opcommand").not())
        .stdout(predicate::str::contains("requests=").not());
}

#[test]
fn absent_data_files_report_zero_counters_and_no_pools() {
    let dir = fixture_dir();
    fs::write(dir.path().join("dhcpd.pid"), "1234\n").expect("pid write");
    let paths_file = write_paths_file(dir.path());

    dhcpstat()
        .arg("--paths-file")
        .arg(&paths_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("requests=0 responses=0"))
        .stdout(predicate::str::contains("- ").not());
}

#[test]
fn pool_filter_selects_one_pool() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());
    fs::write(
        dir.path().join("dhcpd.leases"),
        format!("{LEASES}lease 10.1.0.9 {{\n  #shared-network: poolB\n}}\n"),
    )
    .expect("leases write");

    dhcpstat()
        .arg("poolB")
        .arg("--paths-file")
        .arg(&paths_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("- poolB:"))
        .stdout(predicate::str::contains("- poolA:").not());
}

#[test]
fn unknown_pool_filter_keeps_counters_only() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());

    dhcpstat()
        .arg("poolZ")
        .arg("--paths-file")
        .arg(&paths_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("requests=42 responses=40"))
        .stdout(predicate::str::contains("- pool").not());
}

#[test]
fn debug_flag_echoes_paths_and_raw_xml() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());

    dhcpstat()
        .arg("--debug")
        .arg("--paths-file")
        .arg(&paths_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("paths: pid="))
        .stdout(predicate::str::contains("output xml: <opcommand"))
        .stdout(predicate::str::contains("requests=42"));
}

#[test]
fn output_flag_writes_the_xml_document() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());
    let out_path = dir.path().join("report.xml");

    dhcpstat()
        .arg("--paths-file")
        .arg(&paths_file)
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    let written = fs::read_to_string(&out_path).expect("output file");
    assert!(written.starts_with("<opcommand name=\"dhcpstat\">"));
    assert!(written.contains("<pool>poolA</pool>"));
}

#[test]
fn title_param_overrides_the_heading() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());

    dhcpstat()
        .arg("--paths-file")
        .arg(&paths_file)
        .arg("--pname")
        .arg("title")
        .arg("--pval")
        .arg("DHCP usage for lab router")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("DHCP usage for lab router"));
}

#[test]
fn individual_path_flags_override_the_paths_file() {
    let dir = fixture_dir();
    let paths_file = server_fixture(dir.path());
    let other_status = dir.path().join("other.status");
    fs::write(&other_status, "request-count: 7\nresponse-count: 6\n").expect("status write");

    dhcpstat()
        .arg("--paths-file")
        .arg(&paths_file)
        .arg("--status-file")
        .arg(&other_status)
        .assert()
        .success()
        .stdout(predicate::str::contains("requests=7 responses=6"));
}

#[test]
fn unreadable_paths_file_is_a_hard_failure() {
    let dir = fixture_dir();
    let missing = dir.path().join("nope.toml");

    dhcpstat()
        .arg("--paths-file")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load paths file"));
}

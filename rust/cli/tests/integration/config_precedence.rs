use crate::helpers::{EnvGuard, run_cli};
use serial_test::serial;
use std::io::Write as _;

#[test]
#[serial]
fn cfg_shows_defaults() {
    let _env = EnvGuard::apply(&[]);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 0);
    let json = res.json();
    assert_eq!(json["template"]["value"], "custom");
    assert_eq!(json["template"]["source"], "default");
    assert_eq!(json["format"]["value"], "text");
    assert_eq!(json["precision"]["value"], 2);
    assert_eq!(json["max_groups"]["value"], 3);
}

#[test]
#[serial]
fn precedence_flag_over_env_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "template = \"mtg\"\nprecision = 3\nformat = \"json\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let _env = EnvGuard::apply(&[("DRAWCALC_CONFIG", &path), ("DRAWCALC_PRECISION", "0")]);

    let cfg = run_cli(&["cfg"]).json();
    assert_eq!(cfg["template"]["value"], "mtg");
    assert_eq!(cfg["template"]["source"], "file");
    assert_eq!(cfg["precision"]["value"], 0);
    assert_eq!(cfg["precision"]["source"], "env");

    // file picks JSON and the MTG template
    let res = run_cli(&["calc", "-t", "4:1"]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    let json = res.json();
    assert_eq!(json["template"], "mtg");
    assert_eq!(json["deck_size"], 60);
    assert_eq!(json["hand_size"], 7);

    // flags beat both
    let res = run_cli(&["calc", "-t", "4:1", "--format", "text", "--precision", "1"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Magic: The Gathering"));
    assert!(res.stdout.contains("Exactly:  "));
    assert!(res.stdout.lines().any(|l| l.starts_with("At least:") && l.ends_with('%')));
}

#[test]
#[serial]
fn env_precision_applies_to_calc() {
    let _env = EnvGuard::apply(&[("DRAWCALC_PRECISION", "4")]);
    let res = run_cli(&["calc", "--deck", "10", "--hand", "3", "-t", "2:1", "-t", "1:1"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Exactly:  11.6667%"));
    assert!(res.stdout.contains("At least: 12.5000%"));
}

#[test]
#[serial]
fn env_max_groups_limits_targets() {
    let _env = EnvGuard::apply(&[("DRAWCALC_MAX_GROUPS", "1")]);
    let res = run_cli(&["calc", "-t", "3:1", "-t", "3:1"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Too many target cards"));
}

#[test]
#[serial]
fn invalid_config_fails_calc_and_cfg() {
    let _env = EnvGuard::apply(&[("DRAWCALC_TEMPLATE", "chess")]);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Configuration error"));
    assert!(res.stdout.is_empty());

    let res = run_cli(&["calc", "-t", "3:1"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("chess"));
}

#[test]
#[serial]
fn missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let missing = missing.to_str().unwrap().to_string();
    let _env = EnvGuard::apply(&[("DRAWCALC_CONFIG", &missing)]);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"));
}

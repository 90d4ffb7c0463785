use aimforge::config::{Config, RatioTables, Tuning};
use clap::{Command, CommandFactory, FromArgMatches};
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(clap::Parser)]
struct Harness {
    #[command(flatten)]
    config: Config,
}

fn matches_for(argv: &[&str]) -> clap::ArgMatches {
    let cmd: Command = Harness::command();
    cmd.get_matches_from(argv)
}

fn default_tuning() -> Tuning {
    Tuning::default()
}

#[test]
fn test_shipped_defaults() {
    let tuning = Tuning::default();
    assert_eq!(tuning.nominal_base, 165.0);
    assert_eq!(tuning.base_floor, 150.0);
    assert_eq!(tuning.base_ceiling, 185.0);
    assert_eq!(tuning.apple_base_pro, 175.0);
    assert_eq!(tuning.get_perf_step_cutoffs(), [60.0, 70.0, 85.0, 95.0]);
    assert_eq!(tuning.get_perf_step_factors(), [0.95, 0.98, 1.05, 1.08]);

    let ratios = RatioTables::default();
    assert_eq!(ratios.get_default_ratios(), [0.65, 0.55, 0.40, 0.30, 0.50]);
    assert_eq!(ratios.get_high_end_ratios(), [0.62, 0.52, 0.38, 0.28, 0.48]);
    assert_eq!(ratios.get_apple_ratios(), [0.68, 0.58, 0.42, 0.32, 0.52]);
    assert_eq!(ratios.get_sight_floors(), [30.0, 25.0, 20.0, 15.0, 25.0]);
}

#[test]
fn test_array_parsing_custom() {
    let mut tuning = default_tuning();
    tuning.perf_step_cutoffs = "50, 60, 80, 90".to_string();
    assert_eq!(tuning.get_perf_step_cutoffs(), [50.0, 60.0, 80.0, 90.0]);
}

#[test]
#[should_panic(expected = "requires 4 values")]
fn test_array_parsing_partial_panics() {
    let mut tuning = default_tuning();
    tuning.perf_step_cutoffs = "60,70".to_string();
    tuning.get_perf_step_cutoffs();
}

#[test]
#[should_panic(expected = "Invalid number")]
fn test_array_parsing_garbage_panics() {
    let mut tuning = default_tuning();
    tuning.perf_step_factors = "0.95,fast,1.05,1.08".to_string();
    tuning.get_perf_step_factors();
}

#[test]
#[should_panic(expected = "requires 5 values")]
fn test_sight_floor_parsing_partial_panics() {
    let mut ratios = RatioTables::default();
    ratios.sight_floors = "30,25".to_string();
    ratios.get_sight_floors();
}

#[test]
fn test_weights_file_round_trip() {
    let mut tuning = default_tuning();
    tuning.nominal_base = 170.0;
    tuning.brand_asus = 1.10;

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string_pretty(&tuning).unwrap()).unwrap();

    let loaded = Tuning::load_from_file(file.path());
    assert_eq!(loaded.nominal_base, 170.0);
    assert_eq!(loaded.brand_asus, 1.10);
    // untouched fields keep their defaults
    assert_eq!(loaded.base_ceiling, 185.0);
}

#[test]
fn test_partial_weights_file_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"nominal_base\": 160.0}}").unwrap();

    let loaded = Tuning::load_from_file(file.path());
    assert_eq!(loaded.nominal_base, 160.0);
    assert_eq!(loaded.apple_base_standard, 171.0);
}

#[test]
#[should_panic(expected = "Failed to parse weights JSON")]
fn test_malformed_weights_file_panics() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();
    Tuning::load_from_file(file.path());
}

#[test]
#[should_panic(expected = "Failed to read weights file")]
fn test_missing_weights_file_panics() {
    Tuning::load_from_file("/definitely/not/a/real/path.json");
}

// --- THREE-LAYER MERGE: defaults < file < explicit CLI flags ---
#[test]
fn test_cli_overrides_only_what_was_passed() {
    let matches = matches_for(&["test", "--nominal-base", "180"]);
    let cli = Harness::from_arg_matches(&matches).unwrap();

    // the "file" layer disagrees with both the CLI and the defaults
    let mut file_tuning = default_tuning();
    file_tuning.nominal_base = 160.0;
    file_tuning.brand_asus = 1.10;

    file_tuning.merge_from_cli(&cli.config.tuning, &matches);

    // explicitly passed flag wins
    assert_eq!(file_tuning.nominal_base, 180.0);
    // file value survives: the CLI default (1.05) must not clobber it
    assert_eq!(file_tuning.brand_asus, 1.10);
}

#[test]
fn test_merge_without_flags_keeps_file_values() {
    let matches = matches_for(&["test"]);
    let cli = Harness::from_arg_matches(&matches).unwrap();

    let mut file_tuning = default_tuning();
    file_tuning.style_aggressive = 1.25;
    file_tuning.exp_beginner = 0.85;

    file_tuning.merge_from_cli(&cli.config.tuning, &matches);

    assert_eq!(file_tuning.style_aggressive, 1.25);
    assert_eq!(file_tuning.exp_beginner, 0.85);
}

#[test]
fn test_string_table_flags_merge() {
    let matches = matches_for(&["test", "--perf-step-factors", "0.9,0.95,1.1,1.2"]);
    let cli = Harness::from_arg_matches(&matches).unwrap();

    let mut file_tuning = default_tuning();
    file_tuning.merge_from_cli(&cli.config.tuning, &matches);

    assert_eq!(file_tuning.get_perf_step_factors(), [0.9, 0.95, 1.1, 1.2]);
    // cutoffs were not passed, so the defaults stay
    assert_eq!(file_tuning.get_perf_step_cutoffs(), [60.0, 70.0, 85.0, 95.0]);
}

//! Tests for command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use domain_dedup::Config;

#[test]
fn test_parse_minimal_args() {
    let config = Config::try_parse_from(["domain_dedup", "hostnames.txt"])
        .expect("positional input file should be enough");

    assert_eq!(config.file, PathBuf::from("hostnames.txt"));
    assert_eq!(config.output, PathBuf::from("./unique_domains.txt"));
    assert!(!config.validate_special_chars);
}

#[test]
fn test_parse_requires_input_file() {
    let result = Config::try_parse_from(["domain_dedup"]);
    assert!(result.is_err(), "input file argument should be required");
}

#[test]
fn test_parse_stdin_indicator() {
    let config = Config::try_parse_from(["domain_dedup", "-"])
        .expect("dash should be accepted as stdin indicator");
    assert_eq!(config.file.as_os_str(), "-");
}

#[test]
fn test_parse_output_flag() {
    let config = Config::try_parse_from(["domain_dedup", "in.txt", "--output", "out.txt"])
        .expect("output flag should parse");
    assert_eq!(config.output, PathBuf::from("out.txt"));

    let short = Config::try_parse_from(["domain_dedup", "in.txt", "-o", "out2.txt"])
        .expect("short output flag should parse");
    assert_eq!(short.output, PathBuf::from("out2.txt"));
}

#[test]
fn test_parse_validate_special_chars_flag() {
    let config =
        Config::try_parse_from(["domain_dedup", "in.txt", "--validate-special-chars"])
            .expect("strict flag should parse");
    assert!(config.validate_special_chars);
}

#[test]
fn test_parse_log_options() {
    let config = Config::try_parse_from([
        "domain_dedup",
        "in.txt",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("log options should parse");

    assert!(matches!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    ));
    assert!(format!("{:?}", config.log_format).contains("Json"));
}

#[test]
fn test_parse_rejects_unknown_log_level() {
    let result = Config::try_parse_from(["domain_dedup", "in.txt", "--log-level", "loud"]);
    assert!(result.is_err());
}

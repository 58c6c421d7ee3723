//! # codecount
//!
//! A CLI tool for heuristic source line counting over a project tree.
//!
//! ## Overview
//!
//! codecount is built on top of codecountlib. It walks a directory tree,
//! skipping configured directory names, classifies every line of every
//! file whose extension matches, and prints a flat report: total and
//! adjusted line counts, the six heuristic counters, and the included
//! and excluded path listings.
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory with the default extensions (c,cpp,h,make)
//! codecount .
//!
//! # Scan a project with custom extensions and skip dirs
//! codecount ~/src/proj --ext rs --ext toml --skip target
//!
//! # Machine-readable output
//! codecount . --output json
//!
//! # Opt in to the corrected block-comment handling
//! codecount . --corrected
//! ```
//!
//! Unreadable directories and files, the root included, are reported on
//! stderr but never change the exit status; a root that cannot be
//! opened simply yields an all-zero report. Only usage errors fail the
//! run.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use codecountlib::{render, scan, ClassifyMode, ScanConfig};
use console::style;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("codecount")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic source line counter: comments, blanks, brackets, classes, functions")
        .arg(
            Arg::new("path")
                .help("Directory to scan (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("ext")
                .short('x')
                .long("ext")
                .action(ArgAction::Append)
                .help("File extension to include (repeatable; defaults to c,cpp,h,make)"),
        )
        .arg(
            Arg::new("skip")
                .short('s')
                .long("skip")
                .action(ArgAction::Append)
                .help("Directory name to skip (repeatable; replaces the default skip list)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("corrected")
                .long("corrected")
                .action(ArgAction::SetTrue)
                .help("Close one-line block comments and count each comment line once"),
        )
}

/// Build a ScanConfig from parsed arguments
fn build_config(matches: &ArgMatches) -> ScanConfig {
    let mut config = ScanConfig::new();

    if let Some(extensions) = matches.get_many::<String>("ext") {
        config = config.extensions(extensions);
    }

    if let Some(dirs) = matches.get_many::<String>("skip") {
        config = config.skip_dirs(dirs);
    }

    if matches.get_flag("corrected") {
        config = config.mode(ClassifyMode::Corrected);
    }

    config
}

fn run(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let config = build_config(matches);

    let stats = scan(path, &config);

    for warning in &stats.warnings {
        eprintln!("{} {}", style("warning:").yellow().bold(), warning);
    }

    match matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("text")
    {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => print!("{}", render(&stats)),
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_for(args: &[&str]) -> ArgMatches {
        build_command().get_matches_from(args)
    }

    #[test]
    fn test_default_config() {
        let matches = matches_for(&["codecount"]);
        let config = build_config(&matches);

        assert!(config.matches_extension("main.c"));
        assert!(config.is_skipped_dir(".svn"));
        assert_eq!(config.classify_mode(), ClassifyMode::Legacy);
    }

    #[test]
    fn test_ext_flag_replaces_defaults() {
        let matches = matches_for(&["codecount", ".", "--ext", "rs", "--ext", "toml"]);
        let config = build_config(&matches);

        assert!(config.matches_extension("lib.rs"));
        assert!(config.matches_extension("Cargo.toml"));
        assert!(!config.matches_extension("main.c"));
    }

    #[test]
    fn test_skip_flag_replaces_defaults() {
        let matches = matches_for(&["codecount", ".", "--skip", "target"]);
        let config = build_config(&matches);

        assert!(config.is_skipped_dir("target"));
        assert!(!config.is_skipped_dir(".svn"));
    }

    #[test]
    fn test_corrected_flag() {
        let matches = matches_for(&["codecount", ".", "--corrected"]);
        let config = build_config(&matches);

        assert_eq!(config.classify_mode(), ClassifyMode::Corrected);
    }
}

//! # loc
//!
//! Count the lines of code in files and directories.
//!
//! ## Usage
//!
//! ```bash
//! # Count non-blank lines in a directory
//! loc src/
//!
//! # Several paths; anything reachable twice is counted once
//! loc src/ tests/ src/main.rs
//!
//! # Count blank lines too, skipping a vendored directory
//! loc -b -x src/vendor src/
//!
//! # Break the total down by file extension
//! loc --by-ext .
//! ```
//!
//! The counting itself lives in loclib; this binary parses arguments,
//! installs logging and prints the report.

mod logging;
mod render;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use loclib::{count_paths, CountOptions, LinePolicy};
use tracing::{debug, error};

/// License text shown by `--license`
const LICENSE: &str = include_str!("../../LICENSE");

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("loc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count the lines of code in files and directories.")
        .long_about(
            "Count the lines of code in files and directories.\n\n\
             The targeted files and directories are specified by passing\n\
             one or more PATH arguments.",
        )
        .override_usage("loc [OPTIONS] PATH...")
        .arg(
            Arg::new("path")
                .value_name("PATH")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("Files and directories to count"),
        )
        .arg(
            Arg::new("exclude")
                .short('x')
                .long("exclude")
                .value_name("PATH")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("Exclude PATH from being counted (can be specified multiple times)"),
        )
        .arg(
            Arg::new("count-blank")
                .short('b')
                .long("count-blank")
                .action(ArgAction::SetTrue)
                .help("Count blank lines (blank lines are NOT counted by default)"),
        )
        .arg(
            Arg::new("by-ext")
                .short('e')
                .long("by-ext")
                .action(ArgAction::SetTrue)
                .help("Display the number of lines for each file extension"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Display debug log messages"),
        )
        .arg(
            Arg::new("license")
                .long("license")
                .action(ArgAction::SetTrue)
                .help("Display this software's license"),
        )
}

/// Whether any of `flags` appears verbatim among the arguments.
///
/// Help and license are honored before parsing so that they win over
/// anything else on the command line.
fn has_flag(args: &[OsString], flags: &[&str]) -> bool {
    args.iter().skip(1).any(|arg| flags.iter().any(|f| arg == f))
}

/// Build count options from matches
fn build_options(matches: &ArgMatches) -> loclib::Result<CountOptions> {
    let excludes: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("exclude")
        .map(|v| v.collect())
        .unwrap_or_default();

    CountOptions::new()
        .count_blank(matches.get_flag("count-blank"))
        .by_extension(matches.get_flag("by-ext"))
        .exclude_many(&excludes)
}

/// Log the effective configuration
fn log_options(options: &CountOptions) {
    debug!("Debug mode enabled.");
    match options.policy {
        LinePolicy::IgnoreBlank => debug!("Ignoring blank lines."),
        LinePolicy::CountBlank => debug!("Counting blank lines."),
    }
    if options.by_extension {
        debug!("Counting lines by file extension.");
    }
    for path in &options.excluded {
        debug!("Excluding path '{}'", path.display());
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let options = build_options(matches)?;
    log_options(&options);

    let paths: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("path")
        .map(|v| v.collect())
        .unwrap_or_default();

    let result = count_paths(&paths, options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(render::report(&result).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    let mut cmd = build_command();

    if has_flag(&args, &["-h", "--help"]) {
        return match cmd.print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }
    if has_flag(&args, &["--license"]) {
        print!("{LICENSE}");
        return ExitCode::SUCCESS;
    }

    let matches = cmd.get_matches_from(args);
    logging::init(matches.get_flag("debug"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_has_flag_skips_program_name() {
        assert!(!has_flag(&args(&["--help"]), &["--help"]));
        assert!(has_flag(&args(&["loc", "src", "-h"]), &["-h", "--help"]));
        assert!(!has_flag(&args(&["loc", "--helpful"]), &["-h", "--help"]));
    }

    #[test]
    fn test_build_options() {
        let matches = build_command().get_matches_from(["loc", "-b", "--by-ext", "."]);
        let options = build_options(&matches).unwrap();

        assert_eq!(options.policy, LinePolicy::CountBlank);
        assert!(options.by_extension);
        assert!(options.excluded.is_empty());
    }

    #[test]
    fn test_build_options_defaults() {
        let matches = build_command().get_matches_from(["loc", "."]);
        let options = build_options(&matches).unwrap();

        assert_eq!(options, CountOptions::new());
    }

    #[test]
    fn test_repeated_excludes() {
        let matches =
            build_command().get_matches_from(["loc", "-x", "a", "--exclude", "b", "-x", "c", "."]);
        let options = build_options(&matches).unwrap();

        assert_eq!(options.excluded.len(), 3);
        let paths: Vec<&PathBuf> = matches.get_many::<PathBuf>("path").unwrap().collect();
        assert_eq!(paths, vec![&PathBuf::from(".")]);
    }
}

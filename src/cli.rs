//! Command-line argument handling for the `ipam-ip` binary.

use crate::output::{print_json, print_report, Report};
use crate::processing::log_overlapping_cidrs;
use std::error::Error;

pub const USAGE: &str = "usage: ipam-ip [--json] <4|6> <cidr>...";

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Print [`USAGE`] and exit successfully.
    Help,
    /// Summarize the given CIDRs.
    Summary(CliArgs),
}

/// Parsed summary arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub json: bool,
    pub version: u8,
    pub cidrs: Vec<String>,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut json = false;
    let mut positional = Vec::new();
    for arg in args {
        if arg == "--json" {
            json = true;
        } else if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg.starts_with("--") {
            return Err(format!("Unknown option {arg}\n{USAGE}").into());
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let version = positional
        .next()
        .ok_or(USAGE)?
        .parse::<u8>()
        .map_err(|e| format!("Invalid IP version: {e}\n{USAGE}"))?;
    let cidrs: Vec<String> = positional.collect();
    if cidrs.is_empty() {
        return Err(format!("No CIDR given\n{USAGE}").into());
    }

    Ok(Command::Summary(CliArgs {
        json,
        version,
        cidrs,
    }))
}

/// Run a parsed command.
pub fn execute(command: &Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Summary(args) => run(args),
    }
}

/// Build the report for `args` and print it.
pub fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    log::debug!("run({args:?})");
    let cidrs: Vec<&str> = args.cidrs.iter().map(String::as_str).collect();
    let report = Report::build(args.version, &cidrs)?;
    log_overlapping_cidrs(&report.conflicts);

    if args.json {
        print_json(&report)
    } else {
        print_report(&report);
        Ok(())
    }
}

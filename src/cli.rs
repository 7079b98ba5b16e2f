// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help and parsing flags.
use std::path::PathBuf;

/// Flags understood by the demo driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub help: bool,
    pub config_path: Option<PathBuf>,
}

/// Parses arguments after the binary name. Unknown flags are an error.
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => parsed.help = true,
            "-c" | "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| format!("Missing value for {}", arg))?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("Unknown argument '{}'", other)),
        }
    }
    Ok(parsed)
}

pub fn print_help(binary_name: &str) {
    println!(
        "Calstore v{} - in-memory calendar event store (demo driver)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--config <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <path>   Read store options from a TOML file.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("CONFIG KEYS:");
    println!("    enforce_time_order = false        Reject events with start >= end");
    println!("    strict_recurrence = false         Validate recurrence rules as RFC 5545");
    println!("    allow_overlap_by_default = false  Overlap policy for default helpers");
    println!("    log_level = \"info\"                off, error, warn, info, debug, trace");
}

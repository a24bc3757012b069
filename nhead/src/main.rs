//! # nhead
//!
//! A head-like CLI that prints a window of leading lines from a file or
//! standard input.
//!
//! ## Overview
//!
//! nhead is built on top of nheadlib. It parses the command line into a
//! `Config`, runs it against standard output and turns failures into exit
//! codes.
//!
//! ## Usage
//!
//! ```bash
//! # First 10 lines
//! nhead notes.txt
//!
//! # First 3 lines
//! nhead -n 3 notes.txt
//!
//! # All but the last 2 lines (regular files only)
//! nhead -n -2 notes.txt
//!
//! # Odd lines among the first 20, read from a pipe
//! cat notes.txt | nhead -n 20 -o
//! ```
//!
//! ## Exit status
//!
//! 0 on success (and for `-h`/`-V`), 2 on usage errors, 1 when the file
//! cannot be opened, read or written.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use log::{debug, LevelFilter};
use nheadlib::{
    parse_count, Config, ErrorKind, HeadError, LineCount, Parity, PrintSummary, Source,
};

/// Exit status for bad or conflicting options
const USAGE_EXIT: u8 = 2;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("nhead")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Print the first lines of a file, all but the last lines, or only odd/even lines")
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new("lines")
                .short('n')
                .value_name("K")
                .allow_negative_numbers(true)
                .value_parser(parse_count)
                .help("Output the first K lines; a negative K outputs all but the last |K| lines"),
        )
        .arg(
            Arg::new("even")
                .short('e')
                .long("even")
                .action(ArgAction::SetTrue)
                .help("Print only even lines"),
        )
        .arg(
            Arg::new("odd")
                .short('o')
                .long("odd")
                .action(ArgAction::SetTrue)
                .help("Print only odd lines"),
        )
        .arg(
            Arg::new("show-version")
                .short('V')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print version information"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log progress to standard error (repeat for more detail)"),
        )
        .arg(
            Arg::new("file")
                .value_parser(value_parser!(PathBuf))
                .help("File to read (defaults to standard input)"),
        )
}

/// Name, version and author lines shown by `-V`.
fn version_text() -> String {
    let mut text = format!(
        "Program:\t{}\nVersion:\t{}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    for (i, author) in env!("CARGO_PKG_AUTHORS").split(':').enumerate() {
        let label = if i == 0 { "Author:" } else { "" };
        text.push_str(&format!("{label}\t\t{author}\n"));
    }
    text
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Build the print configuration from matches
fn build_config(matches: &ArgMatches) -> Result<Config, HeadError> {
    let mut config = Config::new();

    if let Some(count) = matches.get_one::<LineCount>("lines") {
        config = config.count(*count);
    }
    if matches.get_flag("odd") {
        config = config.select(Parity::Odd)?;
    }
    if matches.get_flag("even") {
        config = config.select(Parity::Even)?;
    }
    if let Some(path) = matches.get_one::<PathBuf>("file") {
        config = config.path(path);
    }

    Ok(config)
}

/// Handler for the print command
fn print_handler(matches: &ArgMatches) -> anyhow::Result<PrintSummary> {
    let config = build_config(matches)?;
    debug!("Configuration: {:?}", config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match nheadlib::run(&config, &mut out) {
        Ok(summary) => Ok(summary),
        Err(e) if e.kind() == ErrorKind::Read => {
            let target = match &config.source {
                Source::Stdin => "standard input".to_string(),
                Source::Path(path) => format!("file '{}'", path.display()),
            };
            Err(e).with_context(|| {
                format!("Failed to print first {} lines of {}", config.count, target)
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Print a diagnostic and pick the exit status for a failed run.
fn report(err: anyhow::Error) -> ExitCode {
    let head_error = err.downcast_ref::<HeadError>();

    if head_error.is_some_and(HeadError::is_broken_pipe) {
        debug!("Output closed early");
        return ExitCode::SUCCESS;
    }

    eprintln!("{} {:#}", style("Error:").red().bold().for_stderr(), err);

    match head_error.map(HeadError::kind) {
        Some(ErrorKind::Usage) => {
            eprintln!("{}", build_command().render_usage());
            ExitCode::from(USAGE_EXIT)
        }
        _ => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // Help goes to stdout with status 0, real errors to stderr.
            let _ = e.print();
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    init_logging(matches.get_count("verbose"));

    if matches.get_flag("show-version") {
        print!("{}", version_text());
        return ExitCode::SUCCESS;
    }

    match print_handler(&matches) {
        Ok(summary) => {
            debug!(
                "Done: {} of {} lines printed",
                summary.lines_emitted, summary.target
            );
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

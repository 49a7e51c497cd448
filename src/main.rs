//! gregorian-easter - print the Gregorian Easter Sunday of a year
//!
//! Usage: gregorian-easter [OPTIONS] <YEAR>

use std::io::{self, BufWriter, Write};
use std::num::IntErrorKind;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use gregorian_easter::{EasterDate, EasterRange, MAX_EASTER_YEAR, MIN_EASTER_YEAR, easter_date};
use serde::{Serialize, Serializer};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Compute Gregorian Easter Sunday date given a year, using the Lilius/Clavius algorithm.
#[derive(Parser, Debug)]
#[command(name = "gregorian-easter", version, long_about = None)]
struct Cli {
    /// The year for which the Easter date is computed
    #[arg(value_parser = parse_year, allow_negative_numbers = true)]
    year: i32,

    /// Also print every following year up to and including this one
    #[arg(long, value_name = "YEAR", value_parser = parse_year, allow_negative_numbers = true)]
    through: Option<i32>,

    /// Output JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// JSON shape of one computed date
#[derive(Debug, Serialize)]
struct Record {
    year:  i32,
    month: u8,
    day:   u8,
    date:  EasterDate,
}

impl From<EasterDate> for Record {
    fn from(date: EasterDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            date,
        }
    }
}

/// Streams a range as a JSON array without collecting it
struct Records(EasterRange);

impl Serialize for Records {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter().map(Record::from))
    }
}

/// Parses a base-10 year, saturating anything outside `i32`.
fn parse_year(s: &str) -> Result<i32, String> {
    match s.trim().parse::<i64>() {
        Ok(value) => Ok(i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i32::MAX),
            IntErrorKind::NegOverflow => Ok(i32::MIN),
            _ => Err(format!("'{s}' is not an integer year")),
        },
    }
}

fn command() -> clap::Command {
    Cli::command().after_help(format!(
        "The year should be between {MIN_EASTER_YEAR} and {MAX_EASTER_YEAR} inclusive."
    ))
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 2)
        .init();

    debug!("gregorian-easter started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match cli.through {
        None => {
            let date = easter_date(cli.year).context("cannot compute Easter Sunday")?;
            debug!(year = cli.year, %date, "computed");
            if cli.json {
                serde_json::to_writer(&mut *out, &Record::from(date)).map_err(io::Error::from)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{date}")?;
            }
        }
        Some(through) => {
            let range = EasterRange::from_years(cli.year, through).context("cannot compute Easter Sundays")?;
            debug!(%range, years = range.year_count(), "computing span");
            if cli.json {
                serde_json::to_writer(&mut *out, &Records(range)).map_err(io::Error::from)?;
                writeln!(out)?;
            } else {
                for date in range {
                    writeln!(out, "{date}")?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

fn main() -> ExitCode {
    let mut command = command();
    let matches = command.get_matches_mut();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => err.format(&mut command).exit(),
    };

    init_logging(cli.verbose);

    let mut out = BufWriter::new(io::stdout().lock());
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("run failed: {err:?}");
            eprintln!("Error: {err:#}\n");
            eprintln!("{}", command.render_help());
            ExitCode::FAILURE
        }
    }
}

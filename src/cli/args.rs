use std::env;
use std::path::PathBuf;

use crate::error::{RosterMailError, RosterMailResult};
use crate::output::{OutputMode, DEFAULT_SEPARATOR};

pub const USAGE: &str = "\
Usage: rostermail [OPTIONS] data.yaml [users.udm]

Options:
  -m, --mail               Only output the preferred mail address per member
  -o, --outfile <PATH>     Write output to PATH instead of stdout
  -p, --pat <PATH>         Read a GitHub token from PATH and fetch public mails
  -s, --separator <SEP>    Field separator (default: $ROSTERMAIL_SEPARATOR or ',')
  -h, --help               Show this help";

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub roster_path: PathBuf,
    pub directory_path: Option<PathBuf>,
    pub outfile: Option<PathBuf>,
    pub pat_path: Option<PathBuf>,
    pub mode: OutputMode,
    pub separator: Option<String>,
}

impl Options {
    pub fn new(roster_path: impl Into<PathBuf>) -> Self {
        Self {
            roster_path: roster_path.into(),
            directory_path: None,
            outfile: None,
            pat_path: None,
            mode: OutputMode::Full,
            separator: None,
        }
    }

    /// The explicit separator, else `$ROSTERMAIL_SEPARATOR`, else ",".
    pub fn separator(&self) -> String {
        self.separator.clone().unwrap_or_else(|| {
            env::var("ROSTERMAIL_SEPARATOR").unwrap_or_else(|_| DEFAULT_SEPARATOR.to_string())
        })
    }
}

/// Parses arguments (without the program name). Options and positional
/// arguments may be mixed; extra positionals are rejected.
pub fn parse_args<I>(args: I) -> RosterMailResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut positional: Vec<PathBuf> = Vec::new();
    let mut outfile = None;
    let mut pat_path = None;
    let mut separator = None;
    let mut mode = OutputMode::Full;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--mail" | "-m" => mode = OutputMode::MailOnly,
            "--outfile" | "-o" => outfile = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "--pat" | "-p" => pat_path = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "--separator" | "-s" => separator = Some(value_for(&arg, args.next())?),
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(RosterMailError::UnknownArgument(other.to_string()));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let roster_path = positional.next().ok_or(RosterMailError::MissingRoster)?;
    let directory_path = positional.next();
    if let Some(extra) = positional.next() {
        return Err(RosterMailError::UnknownArgument(extra.display().to_string()));
    }

    Ok(Command::Run(Options {
        roster_path,
        directory_path,
        outfile,
        pat_path,
        mode,
        separator,
    }))
}

fn value_for(flag: &str, value: Option<String>) -> RosterMailResult<String> {
    value.ok_or_else(|| RosterMailError::MissingArgument {
        flag: flag.to_string(),
    })
}

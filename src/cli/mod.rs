pub mod args;

use std::fs::File;
use std::io::{self, BufWriter};

use tracing::info;

use crate::directory::read_directory;
use crate::error::RosterMailResult;
use crate::lookup::{GithubLookup, NoLookup, ProfileLookup};
use crate::model::MergedPerson;
use crate::ops::reconcile_ops;
use crate::output::write_people;
use crate::roster::load_roster;

pub use args::{parse_args, Command, Options, USAGE};

/// Loads all inputs, reconciles them and writes the result.
///
/// Every input is read before any output is opened, so an unreadable source
/// fails the run without writing anything.
pub fn run(options: &Options) -> RosterMailResult<()> {
    let people = reconcile_inputs(options)?;
    let separator = options.separator();

    match &options.outfile {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_people(&mut out, &people, options.mode, &separator)?;
        }
        None => {
            let mut out = io::stdout().lock();
            write_people(&mut out, &people, options.mode, &separator)?;
        }
    }
    Ok(())
}

/// The reading and matching half of [`run`].
pub fn reconcile_inputs(options: &Options) -> RosterMailResult<Vec<MergedPerson>> {
    let roster = load_roster(&options.roster_path)?;
    info!(entries = roster.len(), path = %options.roster_path.display(), "loaded roster");

    let records = match &options.directory_path {
        Some(path) => read_directory(path)?,
        None => Vec::new(),
    };

    let lookup: Box<dyn ProfileLookup> = match &options.pat_path {
        Some(path) => Box::new(GithubLookup::from_token_file(path)?),
        None => Box::new(NoLookup),
    };

    Ok(reconcile_ops::reconcile(&roster, &records, lookup.as_ref()))
}

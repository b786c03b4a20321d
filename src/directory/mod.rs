//! Parser for the line-oriented directory user dump.
//!
//! ```text
//! DN: uid=<id>,<rest-of-dn>
//!   displayName: <value>
//!   gecos: <value>
//!   mailForwardAddress: <value>
//!   e-mail: <value>
//! ```

pub mod line;

use std::path::Path;

use tracing::{debug, warn};

use crate::error::RosterMailResult;
use crate::model::DirectoryRecord;

pub use line::{classify_line, DirectoryLine};

/// Parses dump lines into records, in encounter order.
///
/// Malformed `DN:` lines are logged and close the current record; field lines
/// seen while no record is open are ignored. Parsing never fails.
pub fn parse_directory<I>(lines: I) -> Vec<DirectoryRecord>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut records = Vec::new();
    let mut current: Option<DirectoryRecord> = None;

    for (index, raw) in lines.into_iter().enumerate() {
        let line = raw.as_ref().trim_matches(|c: char| c == '\r' || c == '\n');

        match classify_line(line) {
            DirectoryLine::NewRecord(uid) => {
                records.extend(current.take());
                current = Some(DirectoryRecord::new(uid));
            }
            DirectoryLine::MalformedNewRecord => {
                records.extend(current.take());
                warn!(line = index + 1, "DN line without uid= match: {}", line);
            }
            field => {
                if let Some(record) = current.as_mut() {
                    apply_field(record, field);
                }
            }
        }
    }
    records.extend(current);

    debug!(records = records.len(), "parsed directory dump");
    records
}

/// Parses a complete dump held in memory.
pub fn parse_directory_str(text: &str) -> Vec<DirectoryRecord> {
    parse_directory(text.lines())
}

/// Reads and parses a dump file. A missing or unreadable file is an error.
pub fn read_directory(path: &Path) -> RosterMailResult<Vec<DirectoryRecord>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_directory_str(&text))
}

fn apply_field(record: &mut DirectoryRecord, field: DirectoryLine<'_>) {
    match field {
        DirectoryLine::DisplayName(name) => record.display_name = Some(name.to_string()),
        DirectoryLine::Gecos(name) => record.fallback_name = Some(name.to_string()),
        DirectoryLine::ForwardMail(mail) => record.emails.push_front(mail),
        DirectoryLine::Email(mail) => {
            record.emails.push_back(mail);
        }
        _ => {}
    }
}

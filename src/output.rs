//! Emission of reconciled people as separator-joined lines.

use std::io::{self, Write};

use crate::model::MergedPerson;

pub const DEFAULT_SEPARATOR: &str = ",";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// handle, name, directory id, then every address.
    #[default]
    Full,
    /// Only the first address; people without one are left out.
    MailOnly,
}

/// Formats the full record line. The separator before the address list is
/// always written, even when there are no addresses.
pub fn format_person(person: &MergedPerson, separator: &str) -> String {
    let mails: Vec<&str> = person.emails.iter().collect();
    format!(
        "{handle}{sep}{name}{sep}{id}{sep}{mails}",
        handle = person.handle,
        name = person.name,
        id = person.directory_id.as_deref().unwrap_or(""),
        mails = mails.join(separator),
        sep = separator,
    )
}

/// Writes one line per emitted person.
pub fn write_people<W: Write>(
    out: &mut W,
    people: &[MergedPerson],
    mode: OutputMode,
    separator: &str,
) -> io::Result<()> {
    for person in people {
        match mode {
            OutputMode::Full => writeln!(out, "{}", format_person(person, separator))?,
            OutputMode::MailOnly => {
                if let Some(mail) = person.primary_email() {
                    writeln!(out, "{}", mail)?;
                }
            }
        }
    }
    out.flush()
}

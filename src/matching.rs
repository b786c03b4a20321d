use tracing::debug;

use crate::model::{DirectoryRecord, MergedPerson, RosterEntry};
use crate::normalize::{normalize, normalize_caps};

/// Are these names the same, at least after normalization?
///
/// Besides the plain normal form, the all-caps spelling of expanded letters is
/// compared too, so "Ä. Müller" matches both "Ae. Mueller" and "AE. Mueller".
pub fn name_match(a: &str, b: &str) -> bool {
    a == b || normalize(a) == normalize(b) || normalize_caps(a) == normalize_caps(b)
}

/// A record matches on its display name or on its `gecos:` name.
/// Names the record never carried are not compared.
pub fn record_matches(entry: &RosterEntry, record: &DirectoryRecord) -> bool {
    let display = record.display_name.as_deref().or(record.fallback_name.as_deref());
    [display, record.fallback_name.as_deref()]
        .into_iter()
        .flatten()
        .any(|name| name_match(&entry.name, name))
}

/// Builds the merged view of `entry` from every matching record.
///
/// Records are visited in order: the last match supplies the directory id and
/// each match appends its addresses, in the record's own order, skipping
/// addresses already collected.
pub fn match_entry(entry: &RosterEntry, records: &[DirectoryRecord]) -> MergedPerson {
    let mut person = MergedPerson::from_entry(entry);
    merge_records(&mut person, entry, records);
    person
}

/// Merges matching records into an existing person, keeping what it already holds.
pub fn merge_records(person: &mut MergedPerson, entry: &RosterEntry, records: &[DirectoryRecord]) {
    for record in records.iter().filter(|r| record_matches(entry, r)) {
        debug!(handle = %entry.handle, uid = %record.id, "roster entry matched directory record");
        person.directory_id = Some(record.id.clone());
        person.emails.extend_back(record.emails.iter());
    }
}

/// Appends an externally fetched address after everything else.
/// Returns true if the address was new.
pub fn apply_profile_email(person: &mut MergedPerson, email: Option<&str>) -> bool {
    match email {
        Some(mail) if !mail.is_empty() => person.emails.push_back(mail),
        _ => false,
    }
}

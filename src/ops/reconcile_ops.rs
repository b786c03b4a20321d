use tracing::{info, warn};

use crate::lookup::ProfileLookup;
use crate::matching::{apply_profile_email, match_entry};
use crate::model::{DirectoryRecord, MergedPerson, RosterEntry};

/// Reconciles every roster entry against the directory, then asks `lookup`
/// once per entry for a public address. Output keeps roster order.
pub fn reconcile<L>(
    roster: &[RosterEntry],
    records: &[DirectoryRecord],
    lookup: &L,
) -> Vec<MergedPerson>
where
    L: ProfileLookup + ?Sized,
{
    let people: Vec<MergedPerson> = roster
        .iter()
        .map(|entry| reconcile_entry(entry, records, lookup))
        .collect();

    let matched = people.iter().filter(|p| p.is_matched()).count();
    info!(
        entries = people.len(),
        matched,
        unmatched = people.len() - matched,
        "reconciled roster"
    );
    people
}

/// Reconciles a single entry. A failed lookup contributes nothing.
pub fn reconcile_entry<L>(
    entry: &RosterEntry,
    records: &[DirectoryRecord],
    lookup: &L,
) -> MergedPerson
where
    L: ProfileLookup + ?Sized,
{
    let mut person = match_entry(entry, records);
    match lookup.lookup(&entry.handle) {
        Ok(email) => {
            apply_profile_email(&mut person, email.as_deref());
        }
        Err(e) => warn!(handle = %entry.handle, "{}", e),
    }
    person
}

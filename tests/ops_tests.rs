use std::cell::RefCell;
use std::collections::HashMap;

use rostermail::directory::parse_directory_str;
use rostermail::error::{RosterMailError, RosterMailResult};
use rostermail::lookup::{NoLookup, ProfileLookup};
use rostermail::matching::*;
use rostermail::model::*;
use rostermail::ops::reconcile_ops;

/// Canned lookup results that also records which handles were asked for.
#[derive(Default)]
struct FakeLookup {
    emails: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeLookup {
    fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            emails: pairs.iter().map(|(h, m)| (h.to_string(), m.to_string())).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ProfileLookup for FakeLookup {
    fn lookup(&self, handle: &str) -> RosterMailResult<Option<String>> {
        self.calls.borrow_mut().push(handle.to_string());
        Ok(self.emails.get(handle).cloned())
    }
}

fn emails(person: &MergedPerson) -> Vec<&str> {
    person.emails.iter().collect()
}

fn record(id: &str, display: Option<&str>, gecos: Option<&str>, mails: &[&str]) -> DirectoryRecord {
    let mut record = DirectoryRecord::new(id);
    record.display_name = display.map(String::from);
    record.fallback_name = gecos.map(String::from);
    record.emails = mails.iter().copied().collect();
    record
}

// ==========================================================================
// NAME MATCH TESTS
// ==========================================================================

#[test]
fn name_match_exact() {
    assert!(name_match("Jane Doe", "Jane Doe"));
}

#[test]
fn name_match_via_normalization() {
    assert!(name_match("Ä. Müller", "AE. Mueller"));
    assert!(name_match("Dr. Jürgen Groß-Mann", "Juergen Gross Mann"));
}

#[test]
fn name_match_follows_the_table_spelling() {
    assert!(name_match("Ä. Müller", "Ae. Mueller"));
    assert!(name_match("Ä Müller", "Ae Müller"));
    assert!(name_match("MÜLLER", "MUeLLER"));
}

#[test]
fn name_match_accepts_all_caps_expansion() {
    assert!(name_match("ÖZDEMIR", "OEZDEMIR"));
    assert!(!name_match("Özdemir", "OEzdemir"));
}

#[test]
fn name_match_strips_only_one_leading_honorific() {
    assert!(!name_match("Dr.-Ing. Björn", "Ing. Björn"));
    assert!(!name_match("Dr. Dr. Hans", "Hans"));
    assert!(!name_match(" Dr. Alice", "Alice"));
}

#[test]
fn name_match_is_case_sensitive() {
    assert!(!name_match("jane doe", "Jane Doe"));
}

#[test]
fn name_match_rejects_different_names() {
    assert!(!name_match("Jane Doe", "John Doe"));
}

// ==========================================================================
// MATCH ENGINE TESTS
// ==========================================================================

#[test]
fn match_on_fallback_name_attaches_id_and_mails() {
    let records = vec![record("amueller", None, Some("AE. Mueller"), &["fwd@x", "a@x"])];
    let entry = RosterEntry::new("amue", "Ä. Müller");

    let person = match_entry(&entry, &records);
    assert_eq!(person.directory_id.as_deref(), Some("amueller"));
    assert_eq!(emails(&person), ["fwd@x", "a@x"]);
}

#[test]
fn match_on_gecos_when_display_name_differs() {
    let records = vec![record("kg", Some("K. G."), Some("Kurt Garloff"), &["k@x"])];
    let person = match_entry(&RosterEntry::new("garloff", "Kurt Garloff"), &records);
    assert!(person.is_matched());
}

#[test]
fn unmatched_entry_has_no_id_or_mails() {
    let records = vec![record("a", Some("Alice"), None, &["a@x"])];
    let person = match_entry(&RosterEntry::new("bob", "Bob"), &records);
    assert_eq!(person.directory_id, None);
    assert!(person.emails.is_empty());
}

#[test]
fn record_without_names_never_matches_empty_roster_name() {
    let records = vec![record("anon", None, None, &["anon@x"])];
    let person = match_entry(&RosterEntry::new("ghost", ""), &records);
    assert!(!person.is_matched());
}

#[test]
fn multiple_matches_merge_in_record_order_and_last_id_wins() {
    let records = vec![
        record("first", Some("Jane Doe"), None, &["fwd1@x", "shared@x"]),
        record("other", Some("John Roe"), None, &["john@x"]),
        record("second", None, Some("Jane Doe"), &["shared@x", "second@x"]),
    ];
    let person = match_entry(&RosterEntry::new("jane", "Jane Doe"), &records);
    assert_eq!(person.directory_id.as_deref(), Some("second"));
    assert_eq!(emails(&person), ["fwd1@x", "shared@x", "second@x"]);
}

#[test]
fn merge_records_keeps_existing_mails_first() {
    let entry = RosterEntry::new("jane", "Jane Doe");
    let mut person = MergedPerson::from_entry(&entry);
    person.emails.push_back("roster@x");
    merge_records(&mut person, &entry, &[record("j", Some("Jane Doe"), None, &["j@x", "roster@x"])]);
    assert_eq!(emails(&person), ["roster@x", "j@x"]);
}

#[test]
fn profile_email_is_appended_last_and_deduplicated() {
    let records = vec![record("j", Some("Jane"), None, &["j@x"])];
    let mut person = match_entry(&RosterEntry::new("jane", "Jane"), &records);

    assert!(apply_profile_email(&mut person, Some("gh@x")));
    assert!(!apply_profile_email(&mut person, Some("j@x")));
    assert!(!apply_profile_email(&mut person, None));
    assert_eq!(emails(&person), ["j@x", "gh@x"]);
}

#[test]
fn parsed_dump_feeds_match_engine() {
    let dump = "\
DN: uid=amueller,cn=users,dc=x
  gecos: AE. Mueller
  mailForwardAddress: a@x
  e-mail: b@x
  mailForwardAddress: c@x
";
    let records = parse_directory_str(dump);
    let person = match_entry(&RosterEntry::new("amue", "Ä. Müller"), &records);
    assert_eq!(person.directory_id.as_deref(), Some("amueller"));
    assert_eq!(emails(&person), ["c@x", "a@x", "b@x"]);
}

// ==========================================================================
// RECONCILE OPS TESTS
// ==========================================================================

#[test]
fn reconcile_keeps_roster_order_and_calls_lookup_once_each() {
    let roster = vec![
        RosterEntry::new("zed", "Zed"),
        RosterEntry::new("amy", "Amy"),
    ];
    let records = vec![record("amy-uid", Some("Amy"), None, &["amy@x"])];
    let lookup = FakeLookup::with(&[("zed", "zed@gh")]);

    let people = reconcile_ops::reconcile(&roster, &records, &lookup);
    let handles: Vec<&str> = people.iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles, ["zed", "amy"]);
    assert_eq!(*lookup.calls.borrow(), ["zed", "amy"]);

    assert_eq!(people[0].directory_id, None);
    assert_eq!(emails(&people[0]), ["zed@gh"]);
    assert_eq!(people[1].directory_id.as_deref(), Some("amy-uid"));
    assert_eq!(emails(&people[1]), ["amy@x"]);
}

#[test]
fn unmatched_entry_without_lookup_result_is_empty() {
    let roster = vec![RosterEntry::new("nobody", "No Body")];
    let people = reconcile_ops::reconcile(&roster, &[], &NoLookup);
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].directory_id, None);
    assert!(people[0].emails.is_empty());
}

#[test]
fn lookup_email_already_in_directory_is_not_repeated() {
    let roster = vec![RosterEntry::new("amy", "Amy")];
    let records = vec![record("amy-uid", Some("Amy"), None, &["amy@x"])];
    let lookup = FakeLookup::with(&[("amy", "amy@x")]);

    let people = reconcile_ops::reconcile(&roster, &records, &lookup);
    assert_eq!(emails(&people[0]), ["amy@x"]);
}

#[test]
fn failed_lookup_contributes_nothing() {
    let roster = vec![RosterEntry::new("amy", "Amy")];
    let records = vec![record("amy-uid", Some("Amy"), None, &["amy@x"])];
    let failing = |_: &str| -> RosterMailResult<Option<String>> {
        Err(RosterMailError::Lookup("HTTP 502".into()))
    };

    let people = reconcile_ops::reconcile(&roster, &records, &failing);
    assert_eq!(people[0].directory_id.as_deref(), Some("amy-uid"));
    assert_eq!(emails(&people[0]), ["amy@x"]);
}

#[test]
fn reconcile_accepts_trait_objects() {
    let roster = vec![RosterEntry::new("amy", "Amy")];
    let lookup: Box<dyn ProfileLookup> = Box::new(FakeLookup::with(&[("amy", "amy@gh")]));
    let people = reconcile_ops::reconcile(&roster, &[], lookup.as_ref());
    assert_eq!(emails(&people[0]), ["amy@gh"]);
}

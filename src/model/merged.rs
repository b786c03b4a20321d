use serde::Serialize;

use super::mail_list::MailList;
use super::roster::RosterEntry;

/// The reconciled view of one roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedPerson {
    pub handle: String,
    pub name: String,
    /// Id of the last matching directory record, if any matched.
    pub directory_id: Option<String>,
    pub emails: MailList,
}

impl MergedPerson {
    pub fn from_entry(entry: &RosterEntry) -> Self {
        Self {
            handle: entry.handle.clone(),
            name: entry.name.clone(),
            directory_id: None,
            emails: MailList::new(),
        }
    }

    pub fn is_matched(&self) -> bool {
        self.directory_id.is_some()
    }

    /// The preferred address: the first one in merge order.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first()
    }
}

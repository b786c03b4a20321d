use serde::Serialize;

use super::mail_list::MailList;

/// One person from the directory dump, opened by a `DN:` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryRecord {
    pub id: String,
    pub display_name: Option<String>,
    /// Taken from the `gecos:` field.
    pub fallback_name: Option<String>,
    pub emails: MailList,
}

impl DirectoryRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            fallback_name: None,
            emails: MailList::new(),
        }
    }

    /// The display name, or the fallback name when no `displayName:` was seen.
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.fallback_name.as_deref())
            .unwrap_or("")
    }
}

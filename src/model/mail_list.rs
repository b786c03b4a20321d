use serde::Serialize;

/// An ordered list of email addresses without duplicates.
///
/// Equality is exact and case-sensitive. Insertion order is meaningful: it is
/// the order in which addresses are emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MailList {
    entries: Vec<String>,
}

impl MailList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `mail` unless it is already present.
    /// Returns true if the list changed.
    pub fn push_back(&mut self, mail: impl Into<String>) -> bool {
        let mail = mail.into();
        if self.contains(&mail) {
            return false;
        }
        self.entries.push(mail);
        true
    }

    /// Moves `mail` to position 0, inserting it if it was absent.
    pub fn push_front(&mut self, mail: impl Into<String>) {
        let mail = mail.into();
        self.entries.retain(|m| *m != mail);
        self.entries.insert(0, mail);
    }

    /// Appends every address of `mails` in order, skipping those already present.
    pub fn extend_back<'a, I>(&mut self, mails: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for mail in mails {
            self.push_back(mail);
        }
    }

    pub fn contains(&self, mail: &str) -> bool {
        self.entries.iter().any(|m| m == mail)
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }
}

impl<'a> FromIterator<&'a str> for MailList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = MailList::new();
        list.extend_back(iter);
        list
    }
}

use serde::{Deserialize, Serialize};

/// A member of the roster: a unique handle plus the name to match on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub handle: String,
    pub name: String,
}

impl RosterEntry {
    pub fn new(handle: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            name: name.into(),
        }
    }
}

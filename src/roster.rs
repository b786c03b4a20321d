//! Loader for the organization roster (github-manager `data.yaml`).

use std::path::Path;

use serde::Deserialize;

use crate::error::RosterMailResult;
use crate::model::RosterEntry;
use crate::validation;

#[derive(Debug, Deserialize)]
struct OrgData {
    #[serde(default)]
    members: Vec<Member>,
}

#[derive(Debug, Deserialize)]
struct Member {
    login: String,
    #[serde(default)]
    name: Option<String>,
}

/// Reads roster entries from a YAML file, in file order.
pub fn load_roster(path: &Path) -> RosterMailResult<Vec<RosterEntry>> {
    let yaml = std::fs::read_to_string(path)?;
    parse_roster(&yaml)
}

/// Parses roster YAML. Each member needs a non-blank `login`. The `name` is
/// kept as written; a missing one becomes empty and only a lookup can fill
/// in an address for it.
pub fn parse_roster(yaml: &str) -> RosterMailResult<Vec<RosterEntry>> {
    let data: OrgData = serde_yaml::from_str(yaml)?;
    data.members
        .into_iter()
        .map(|member| {
            let handle = validation::non_blank(&member.login, "login")?;
            Ok(RosterEntry::new(handle, member.name.unwrap_or_default()))
        })
        .collect()
}

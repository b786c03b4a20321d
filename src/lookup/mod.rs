pub mod github_lookup;

use crate::error::RosterMailResult;

pub use github_lookup::GithubLookup;

/// Fetches the public profile email for a roster handle.
///
/// `Ok(None)` means the profile has no public address. Errors are reported
/// to the caller, which treats them as "no address" as well.
pub trait ProfileLookup {
    fn lookup(&self, handle: &str) -> RosterMailResult<Option<String>>;
}

/// Used when no lookup service is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLookup;

impl ProfileLookup for NoLookup {
    fn lookup(&self, _handle: &str) -> RosterMailResult<Option<String>> {
        Ok(None)
    }
}

impl<F> ProfileLookup for F
where
    F: Fn(&str) -> RosterMailResult<Option<String>>,
{
    fn lookup(&self, handle: &str) -> RosterMailResult<Option<String>> {
        self(handle)
    }
}

use std::env;
use std::path::Path;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::ProfileLookup;
use crate::error::{RosterMailError, RosterMailResult};
use crate::validation;

const DEFAULT_API_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("rostermail/", env!("CARGO_PKG_VERSION"));

fn api_url() -> String {
    env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Looks up the public email of a GitHub account through the REST API.
pub struct GithubLookup {
    agent: ureq::Agent,
    api_url: String,
    token: String,
}

impl GithubLookup {
    pub fn new(token: &str) -> RosterMailResult<Self> {
        Self::with_api_url(token, &api_url())
    }

    pub fn with_api_url(token: &str, api_url: &str) -> RosterMailResult<Self> {
        let token = validation::non_blank(token, "GitHub token")?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build();
        Ok(Self {
            agent,
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Reads the personal access token from a file, ignoring line endings.
    pub fn from_token_file(path: &Path) -> RosterMailResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::new(contents.trim_matches(|c: char| c == '\r' || c == '\n'))
    }

    fn user_url(&self, handle: &str) -> String {
        format!("{}/users/{}", self.api_url, handle)
    }
}

impl ProfileLookup for GithubLookup {
    fn lookup(&self, handle: &str) -> RosterMailResult<Option<String>> {
        let response = self
            .agent
            .get(&self.user_url(handle))
            .set("Accept", "application/vnd.github+json")
            .set("Authorization", &format!("Bearer {}", self.token))
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => {
                    let body = resp.into_string().unwrap_or_default();
                    RosterMailError::Lookup(format!(
                        "GitHub request for {} failed (HTTP {}): {}",
                        handle,
                        code,
                        body.chars().take(200).collect::<String>()
                    ))
                }
                ureq::Error::Transport(t) => {
                    RosterMailError::Lookup(format!("Could not reach GitHub: {}", t))
                }
            })?;

        let json: Value = response
            .into_json()
            .map_err(|e| RosterMailError::Lookup(format!("Failed to parse GitHub response: {}", e)))?;

        let email = profile_email(&json);
        debug!(handle, found = email.is_some(), "GitHub profile lookup");
        Ok(email)
    }
}

/// Extracts the public address from a GitHub user object.
pub fn profile_email(user: &Value) -> Option<String> {
    user.get("email")
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

use crate::{LibraryError, Result};
use std::env;

/// Environment variable holding the developer token (a signed JWT).
pub const DEVELOPER_TOKEN_VAR: &str = "AM_DEVELOPER_TOKEN";
/// Environment variable holding the Music User Token for the account being exported.
pub const USER_TOKEN_VAR: &str = "AM_USER_TOKEN";
/// Optional override for the API host, mostly useful against a local stub server.
pub const BASE_URL_VAR: &str = "AM_API_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.music.apple.com";

/// Credentials and endpoint settings for one export run.
///
/// Built once at startup and handed to the client; nothing below the binary
/// reads the environment on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub developer_token: String,
    pub user_token: String,
    pub base_url: String,
}

impl Config {
    pub fn new(developer_token: String, user_token: String) -> Self {
        Self {
            developer_token,
            user_token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Use a different API host (e.g. "http://127.0.0.1:8080").
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| LibraryError::MissingCredential(name.to_string()))
        };

        let developer_token = required(DEVELOPER_TOKEN_VAR)?;
        let user_token = required(USER_TOKEN_VAR)?;

        let config = Self::new(developer_token, user_token);
        Ok(match lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(base_url) => config.with_base_url(base_url),
            None => config,
        })
    }
}

// Client configuration.
// Holds the API endpoint and the credentials used to authorize requests.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Url;

use crate::error::{Error, Result};

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Credentials attached to outgoing requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Auth {
    #[default]
    None,
    /// Token credentials, conventionally `username:token`.
    Token(String),
    Basic { username: String, password: String },
}

impl Auth {
    /// Value for the `Authorization` header, if any.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Auth::None => None,
            Auth::Token(token) => Some(format!("Basic {}", STANDARD.encode(token))),
            Auth::Basic { username, password } => Some(format!(
                "Basic {}",
                STANDARD.encode(format!("{}:{}", username, password))
            )),
        }
    }
}

/// Endpoint and auth for an [`Octokit`](crate::Octokit) instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub api_endpoint: Url,
    pub auth: Auth,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            api_endpoint: default_endpoint(),
            auth: Auth::None,
        }
    }
}

impl Configuration {
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            auth: Auth::Token(token.into()),
            ..Self::default()
        }
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            auth: Auth::Basic {
                username: username.into(),
                password: password.into(),
            },
            ..Self::default()
        }
    }

    /// Point the configuration at another API host (e.g. GitHub Enterprise).
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| Error::InvalidEndpoint(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidEndpoint(endpoint.to_string()));
        }
        self.api_endpoint = url;
        Ok(self)
    }

    /// Build a configuration from `GITHUB_TOKEN` and optional `GITHUB_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("GITHUB_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingToken)?;
        let config = Self::token(token);
        match lookup("GITHUB_API_URL") {
            Some(endpoint) if !endpoint.is_empty() => config.with_endpoint(&endpoint),
            _ => Ok(config),
        }
    }
}

fn default_endpoint() -> Url {
    Url::parse(GITHUB_API_BASE).expect("GITHUB_API_BASE is a valid URL")
}

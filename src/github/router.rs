// Request descriptors.
// Each router variant maps one API operation to method, path, params, and encoding.

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::{Map, Value};

use crate::config::Configuration;
use crate::error::{Error, Result};

use super::session::HttpRequest;

const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT_VALUE: &str = "octokit-rs";

/// How params are attached to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Query string, no body.
    Url,
    /// JSON object body.
    Json,
}

/// A value describing one API operation. Resolving it never performs I/O.
pub trait Router {
    fn method(&self) -> Method;
    fn encoding(&self) -> Encoding;
    fn configuration(&self) -> &Configuration;
    /// Unescaped path segments relative to the API endpoint.
    fn path(&self) -> Vec<&str>;
    fn params(&self) -> Vec<(&'static str, String)>;

    /// Resolve into a transport request: URL, headers, and body.
    fn request(&self) -> Result<HttpRequest> {
        let config = self.configuration();
        let path = self.path();
        // Dot segments are normalized away by URL parsing, even percent-encoded.
        if let Some(segment) = path
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(Error::InvalidPathSegment(segment.to_string()));
        }

        let mut url = config.api_endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidEndpoint(config.api_endpoint.to_string()))?
            .pop_if_empty()
            .extend(path);

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        if let Some(auth) = config.auth.header_value() {
            let mut value =
                HeaderValue::from_str(&auth).map_err(|e| Error::InvalidHeader(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let params = self.params();
        let body = match self.encoding() {
            Encoding::Url => {
                if !params.is_empty() {
                    url.query_pairs_mut().extend_pairs(params);
                }
                None
            }
            Encoding::Json => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                let object: Map<String, Value> = params
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), Value::String(v)))
                    .collect();
                Some(serde_json::to_vec(&object)?)
            }
        };

        Ok(HttpRequest {
            method: self.method(),
            url,
            headers,
            body,
        })
    }
}

/// Follower and following listings.
#[derive(Debug, Clone, Copy)]
pub enum FollowRouter<'a> {
    ReadAuthenticatedFollowers(&'a Configuration),
    ReadFollowers(&'a str, &'a Configuration),
    ReadAuthenticatedFollowing(&'a Configuration),
    ReadFollowing(&'a str, &'a Configuration),
}

impl Router for FollowRouter<'_> {
    fn method(&self) -> Method {
        Method::GET
    }

    fn encoding(&self) -> Encoding {
        Encoding::Url
    }

    fn configuration(&self) -> &Configuration {
        match *self {
            FollowRouter::ReadAuthenticatedFollowers(config)
            | FollowRouter::ReadFollowers(_, config)
            | FollowRouter::ReadAuthenticatedFollowing(config)
            | FollowRouter::ReadFollowing(_, config) => config,
        }
    }

    fn path(&self) -> Vec<&str> {
        match *self {
            FollowRouter::ReadAuthenticatedFollowers(_) => vec!["user", "followers"],
            FollowRouter::ReadFollowers(username, _) => vec!["users", username, "followers"],
            FollowRouter::ReadAuthenticatedFollowing(_) => vec!["user", "following"],
            FollowRouter::ReadFollowing(username, _) => vec!["users", username, "following"],
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// SSH public key registration.
#[derive(Debug, Clone, Copy)]
pub enum PublicKeyRouter<'a> {
    PostPublicKey {
        key: &'a str,
        title: &'a str,
        config: &'a Configuration,
    },
}

impl Router for PublicKeyRouter<'_> {
    fn method(&self) -> Method {
        match self {
            PublicKeyRouter::PostPublicKey { .. } => Method::POST,
        }
    }

    fn encoding(&self) -> Encoding {
        match self {
            PublicKeyRouter::PostPublicKey { .. } => Encoding::Json,
        }
    }

    fn configuration(&self) -> &Configuration {
        match *self {
            PublicKeyRouter::PostPublicKey { config, .. } => config,
        }
    }

    fn path(&self) -> Vec<&str> {
        match self {
            PublicKeyRouter::PostPublicKey { .. } => vec!["user", "keys"],
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match *self {
            PublicKeyRouter::PostPublicKey { key, title, .. } => {
                vec![("title", title.to_string()), ("key", key.to_string())]
            }
        }
    }
}

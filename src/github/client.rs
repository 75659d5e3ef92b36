// GitHub API client.
// Resolves routers into requests, runs them through a session, and maps status and body to results.

use serde::de::DeserializeOwned;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::config::Configuration;
use crate::error::{Error, Result};

use super::router::Router;
use super::session::{HttpRequest, HttpResponse, Session};
use super::task::TaskHandle;

/// Entry point for the typed endpoint methods.
///
/// Every endpoint comes in two shapes: an `async fn` returning the decoded
/// value, and a `*_with` variant that spawns the same request on the current
/// tokio runtime and reports the outcome to a completion callback.
#[derive(Debug, Clone, Default)]
pub struct Octokit {
    configuration: Configuration,
}

impl Octokit {
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    /// Create a client authenticated from the environment.
    pub fn from_env() -> Result<Self> {
        Configuration::from_env().map(Self::new)
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }
}

/// Resolve the router and perform the request, decoding the body as `T`.
pub(crate) async fn load<S, T>(session: &S, router: &impl Router) -> Result<T>
where
    S: Session + ?Sized,
    T: DeserializeOwned,
{
    let request = router.request()?;
    execute(session, request).await
}

/// Callback counterpart of [`load`].
///
/// The completion runs exactly once: with the outcome, with
/// [`Error::Cancelled`] if the returned handle is cancelled first, or
/// synchronously with the error when the request cannot be built or no
/// runtime is available (in which case `None` is returned).
pub(crate) fn load_with<S, T, F>(session: &S, router: &impl Router, completion: F) -> Option<TaskHandle>
where
    S: Session + Clone + 'static,
    T: DeserializeOwned + Send + 'static,
    F: FnOnce(Result<T>) + Send + 'static,
{
    let request = match router.request() {
        Ok(request) => request,
        Err(e) => {
            completion(Err(e));
            return None;
        }
    };
    let runtime = match Handle::try_current() {
        Ok(runtime) => runtime,
        Err(_) => {
            completion(Err(Error::NoRuntime));
            return None;
        }
    };

    let session = session.clone();
    let cancel = CancellationToken::new();
    let cancelled = cancel.clone();
    let handle = runtime.spawn(async move {
        let result = tokio::select! {
            biased;
            _ = cancelled.cancelled() => {
                tracing::debug!("GitHub API request cancelled");
                Err(Error::Cancelled)
            }
            result = execute(&session, request) => result,
        };
        completion(result);
    });
    Some(TaskHandle::new(handle, cancel))
}

async fn execute<S, T>(session: &S, request: HttpRequest) -> Result<T>
where
    S: Session + ?Sized,
    T: DeserializeOwned,
{
    let method = request.method.clone();
    let url = request.url.clone();
    tracing::debug!(%method, %url, "sending GitHub API request");

    let response = session.send(request).await.inspect_err(|e| {
        tracing::debug!(%method, %url, error = %e, "GitHub API request failed");
    })?;
    tracing::debug!(%method, %url, status = response.status, "GitHub API response received");

    decode(check_response(response)?).inspect_err(|e| {
        if let Error::Decode(_) = e {
            tracing::debug!(%method, %url, error = %e, "could not decode GitHub API response");
        }
    })
}

/// Reject non-2xx responses, keeping the status code.
fn check_response(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }
    tracing::warn!(status = response.status, "GitHub API returned an error status");
    Err(Error::Status {
        status: response.status,
        body: response.text(),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    Ok(serde_json::from_slice(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::User;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_check_response_keeps_success() {
        let ok = check_response(response(201, "{}")).unwrap();
        assert_eq!(ok.status, 201);
    }

    #[test]
    fn test_check_response_maps_status() {
        let err = check_response(response(404, r#"{"message":"Not Found"}"#)).unwrap_err();
        match err {
            Error::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("Not Found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_failure_is_distinct_from_status() {
        let err = decode::<Vec<User>>(response(200, r#"{"not": "a list"}"#)).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_octokit_default_is_unauthenticated() {
        let octokit = Octokit::default();
        assert_eq!(octokit.configuration(), &Configuration::default());
    }
}

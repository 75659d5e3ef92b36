// HTTP session abstraction.
// Requests are plain data; a session performs them and hands back status and body.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Url};

use crate::error::Result;

/// A fully resolved request, ready to hand to a [`Session`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Raw response as seen by the client before status mapping and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Transport used to perform requests. Substitute a test double to stub GitHub.
#[async_trait]
pub trait Session: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Default session backed by a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestSession {
    client: Client,
}

impl ReqwestSession {
    /// Wrap a preconfigured client (timeouts, proxies, TLS).
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Session for ReqwestSession {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl<S: Session + ?Sized> Session for std::sync::Arc<S> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request).await
    }
}

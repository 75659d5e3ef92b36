#![allow(dead_code)]

use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use octokit::{HttpRequest, HttpResponse, Result, Session, TaskHandle};
use tokio::sync::oneshot;

pub const USERS_JSON: &str = include_str!("../fixtures/users.json");
pub const PUBLIC_KEY_JSON: &str = include_str!("../fixtures/public_key.json");

/// Basic header for `Configuration::token("user:12345")`.
pub const USER_12345_AUTH: &str = "Basic dXNlcjoxMjM0NQ==";

static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Session double that records requests and answers with a canned response.
#[derive(Clone)]
pub struct TestSession {
    status: u16,
    body: Vec<u8>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl TestSession {
    pub fn new(status: u16, body: Option<&str>) -> Self {
        Self {
            status,
            body: body.map(|b| b.as_bytes().to_vec()).unwrap_or_default(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn was_called(&self) -> bool {
        !self.requests.lock().unwrap().is_empty()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("session was not called")
    }
}

#[async_trait]
impl Session for TestSession {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

/// Drive a callback-style endpoint and hand back what its completion received.
pub async fn via_callback<T, F>(start: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(Box<dyn FnOnce(Result<T>) + Send>) -> Option<TaskHandle>,
{
    let (tx, rx) = oneshot::channel();
    let task = start(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    assert!(task.is_some(), "expected an in-flight task");
    rx.await.expect("completion was not called")
}

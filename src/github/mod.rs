// GitHub API module.
// Provides the client, request descriptors, transport, and types for the GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod router;
pub mod session;
pub mod task;
pub mod types;

pub use client::Octokit;
pub use router::{Encoding, FollowRouter, PublicKeyRouter, Router};
pub use session::{HttpRequest, HttpResponse, ReqwestSession, Session};
pub use task::TaskHandle;
pub use types::*;

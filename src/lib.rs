// Typed GitHub REST API client.
// Follower and following listings plus public key registration, each available
// as an awaitable method and as a callback-style method returning a task handle.

pub mod config;
pub mod error;
pub mod github;

pub use config::{Auth, Configuration};
pub use error::{ERROR_DOMAIN, Error, Result};
pub use github::{
    Encoding, FollowRouter, HttpRequest, HttpResponse, JsonObject, Octokit, PublicKeyRouter,
    ReqwestSession, Router, Session, TaskHandle, User, UserType,
};

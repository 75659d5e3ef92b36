// GitHub API endpoint functions.
// Typed methods for follower listings and public key registration.

use crate::error::Result;

use super::client::{Octokit, load, load_with};
use super::router::{FollowRouter, PublicKeyRouter};
use super::session::Session;
use super::task::TaskHandle;
use super::types::{JsonObject, User};

impl Octokit {
    /// Get the followers of the authenticated user.
    pub async fn my_followers<S>(&self, session: &S) -> Result<Vec<User>>
    where
        S: Session + ?Sized,
    {
        let router = FollowRouter::ReadAuthenticatedFollowers(self.configuration());
        load(session, &router).await
    }

    /// Callback form of [`Octokit::my_followers`].
    pub fn my_followers_with<S, F>(&self, session: &S, completion: F) -> Option<TaskHandle>
    where
        S: Session + Clone + 'static,
        F: FnOnce(Result<Vec<User>>) + Send + 'static,
    {
        let router = FollowRouter::ReadAuthenticatedFollowers(self.configuration());
        load_with(session, &router, completion)
    }

    /// Get the followers of `name`.
    pub async fn followers<S>(&self, session: &S, name: &str) -> Result<Vec<User>>
    where
        S: Session + ?Sized,
    {
        let router = FollowRouter::ReadFollowers(name, self.configuration());
        load(session, &router).await
    }

    /// Callback form of [`Octokit::followers`].
    pub fn followers_with<S, F>(&self, session: &S, name: &str, completion: F) -> Option<TaskHandle>
    where
        S: Session + Clone + 'static,
        F: FnOnce(Result<Vec<User>>) + Send + 'static,
    {
        let router = FollowRouter::ReadFollowers(name, self.configuration());
        load_with(session, &router, completion)
    }

    /// Get the users the authenticated user follows.
    pub async fn my_following<S>(&self, session: &S) -> Result<Vec<User>>
    where
        S: Session + ?Sized,
    {
        let router = FollowRouter::ReadAuthenticatedFollowing(self.configuration());
        load(session, &router).await
    }

    /// Callback form of [`Octokit::my_following`].
    pub fn my_following_with<S, F>(&self, session: &S, completion: F) -> Option<TaskHandle>
    where
        S: Session + Clone + 'static,
        F: FnOnce(Result<Vec<User>>) + Send + 'static,
    {
        let router = FollowRouter::ReadAuthenticatedFollowing(self.configuration());
        load_with(session, &router, completion)
    }

    /// Get the users `name` follows.
    pub async fn following<S>(&self, session: &S, name: &str) -> Result<Vec<User>>
    where
        S: Session + ?Sized,
    {
        let router = FollowRouter::ReadFollowing(name, self.configuration());
        load(session, &router).await
    }

    /// Callback form of [`Octokit::following`].
    pub fn following_with<S, F>(&self, session: &S, name: &str, completion: F) -> Option<TaskHandle>
    where
        S: Session + Clone + 'static,
        F: FnOnce(Result<Vec<User>>) + Send + 'static,
    {
        let router = FollowRouter::ReadFollowing(name, self.configuration());
        load_with(session, &router, completion)
    }

    /// Register an SSH public key for the authenticated user.
    ///
    /// The response only has to be a JSON object; on success the submitted
    /// key is returned as-is rather than anything read back from GitHub.
    pub async fn post_public_key<S>(&self, session: &S, key: &str, title: &str) -> Result<String>
    where
        S: Session + ?Sized,
    {
        let router = PublicKeyRouter::PostPublicKey {
            key,
            title,
            config: self.configuration(),
        };
        let _: JsonObject = load(session, &router).await?;
        Ok(key.to_string())
    }

    /// Callback form of [`Octokit::post_public_key`].
    pub fn post_public_key_with<S, F>(
        &self,
        session: &S,
        key: &str,
        title: &str,
        completion: F,
    ) -> Option<TaskHandle>
    where
        S: Session + Clone + 'static,
        F: FnOnce(Result<String>) + Send + 'static,
    {
        let router = PublicKeyRouter::PostPublicKey {
            key,
            title,
            config: self.configuration(),
        };
        let key = key.to_string();
        load_with(session, &router, move |result: Result<JsonObject>| {
            completion(result.map(|_| key))
        })
    }
}

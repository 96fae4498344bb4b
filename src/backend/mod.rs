//! Roster Backend
//!
//! The three calls the client makes. [`HttpBackend`] speaks to the real
//! service; tests plug in their own implementation.

mod http;

pub use http::{BackendConfig, HttpBackend};

use async_trait::async_trait;

use crate::catalog::ActivityCatalog;
use crate::endpoints::Mutation;
use crate::error::ClientResult;

/// Common trait for anything that can serve the roster endpoints
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /activities`
    async fn list_activities(&self) -> ClientResult<ActivityCatalog>;

    /// `POST /activities/{activity}/signup?email=`; returns the server's message
    async fn signup(&self, activity: &str, email: &str) -> ClientResult<String>;

    /// `POST /activities/{activity}/unregister?email=`; returns the server's message
    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<String>;

    /// Dispatch a mutation by kind
    async fn mutate(&self, mutation: Mutation, activity: &str, email: &str) -> ClientResult<String> {
        match mutation {
            Mutation::Signup => self.signup(activity, email).await,
            Mutation::Unregister => self.unregister(activity, email).await,
        }
    }
}

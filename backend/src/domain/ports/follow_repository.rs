//! Port for the `followers` associative table.

use async_trait::async_trait;

use crate::domain::{FollowEdge, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by follow repository adapters.
    pub enum FollowPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "follow repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "follow repository query failed: {message}",
    }
}

/// Port for directional follow edges.
///
/// Adapters must keep at most one row per ordered pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Whether the edge is stored.
    async fn exists(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError>;

    /// Store the edge. Returns `false` when it was already present.
    async fn insert(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError>;

    /// Remove the edge. Returns `false` when it was absent.
    async fn delete(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError>;

    /// Users that `follower` follows.
    async fn list_followed(&self, follower: UserId) -> Result<Vec<User>, FollowPersistenceError>;

    /// Users following `followed`.
    async fn list_followers(&self, followed: UserId) -> Result<Vec<User>, FollowPersistenceError>;
}

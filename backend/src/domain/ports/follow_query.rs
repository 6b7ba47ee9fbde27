//! Driving port for reading the follow graph.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowQuery: Send + Sync {
    /// Users that `user` follows.
    async fn following(&self, user: UserId) -> Result<Vec<User>, Error>;

    /// Users that follow `user`.
    async fn followers(&self, user: UserId) -> Result<Vec<User>, Error>;

    /// True iff the edge `user -> other` exists.
    async fn is_following(&self, user: UserId, other: UserId) -> Result<bool, Error>;

    /// True iff the edge `other -> user` exists.
    async fn is_followed_by(&self, user: UserId, other: UserId) -> Result<bool, Error>;
}

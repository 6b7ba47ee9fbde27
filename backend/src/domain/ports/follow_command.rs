//! Driving port for follow/unfollow.
//!
//! Both operations are guarded idempotent toggles: repeating them is a no-op.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowCommand: Send + Sync {
    /// Make `follower` follow `followed` unless it already does.
    async fn follow(&self, follower: UserId, followed: UserId) -> Result<(), Error>;

    /// Remove the `follower -> followed` edge if it exists.
    async fn unfollow(&self, follower: UserId, followed: UserId) -> Result<(), Error>;
}

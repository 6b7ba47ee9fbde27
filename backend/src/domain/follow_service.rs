//! Follow graph service.
//!
//! `follow` and `unfollow` are guarded toggles: the edge is inserted only when
//! absent and removed only when present, so repeating either call is a no-op.
//! Both ends must name existing users.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{
    FollowCommand, FollowPersistenceError, FollowQuery, FollowRepository, UserRepository,
};
use crate::domain::user_service::find_user_or_fail;
use crate::domain::{FollowEdge, User, UserId};

fn map_follow_persistence_error(error: FollowPersistenceError) -> Error {
    match error {
        FollowPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("follow repository unavailable: {message}"))
        }
        FollowPersistenceError::Query { message } => {
            Error::internal(format!("follow repository error: {message}"))
        }
    }
}

/// Follow service backed by user and follow repositories.
#[derive(Clone)]
pub struct FollowService<U, F> {
    user_repo: Arc<U>,
    follow_repo: Arc<F>,
}

impl<U, F> FollowService<U, F> {
    pub fn new(user_repo: Arc<U>, follow_repo: Arc<F>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }
}

impl<U, F> FollowService<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    /// Resolve both ends of the edge, failing with not-found for either.
    async fn resolve_edge(&self, follower: UserId, followed: UserId) -> Result<FollowEdge, Error> {
        find_user_or_fail(self.user_repo.as_ref(), follower).await?;
        find_user_or_fail(self.user_repo.as_ref(), followed).await?;
        Ok(FollowEdge::new(follower, followed))
    }

    async fn edge_exists(&self, edge: FollowEdge) -> Result<bool, Error> {
        self.follow_repo
            .exists(edge)
            .await
            .map_err(map_follow_persistence_error)
    }
}

#[async_trait]
impl<U, F> FollowCommand for FollowService<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    async fn follow(&self, follower: UserId, followed: UserId) -> Result<(), Error> {
        let edge = self.resolve_edge(follower, followed).await?;
        if self.edge_exists(edge).await? {
            return Ok(());
        }
        let inserted = self
            .follow_repo
            .insert(edge)
            .await
            .map_err(map_follow_persistence_error)?;
        if inserted {
            info!(%follower, %followed, "follow edge created");
        }
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followed: UserId) -> Result<(), Error> {
        let edge = self.resolve_edge(follower, followed).await?;
        if !self.edge_exists(edge).await? {
            return Ok(());
        }
        let removed = self
            .follow_repo
            .delete(edge)
            .await
            .map_err(map_follow_persistence_error)?;
        if removed {
            info!(%follower, %followed, "follow edge removed");
        }
        Ok(())
    }
}

#[async_trait]
impl<U, F> FollowQuery for FollowService<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    async fn following(&self, user: UserId) -> Result<Vec<User>, Error> {
        find_user_or_fail(self.user_repo.as_ref(), user).await?;
        self.follow_repo
            .list_followed(user)
            .await
            .map_err(map_follow_persistence_error)
    }

    async fn followers(&self, user: UserId) -> Result<Vec<User>, Error> {
        find_user_or_fail(self.user_repo.as_ref(), user).await?;
        self.follow_repo
            .list_followers(user)
            .await
            .map_err(map_follow_persistence_error)
    }

    async fn is_following(&self, user: UserId, other: UserId) -> Result<bool, Error> {
        self.edge_exists(FollowEdge::new(user, other)).await
    }

    async fn is_followed_by(&self, user: UserId, other: UserId) -> Result<bool, Error> {
        self.edge_exists(FollowEdge::new(user, other).reversed()).await
    }
}

#[cfg(test)]
#[path = "follow_service_tests.rs"]
mod tests;

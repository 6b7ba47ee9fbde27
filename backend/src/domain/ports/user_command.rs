//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Create a user from the create allow-list.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Apply a partial update, failing with not-found for unknown ids.
    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, Error>;
}

//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// List all users. There is no pagination.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Fetch a user or fail with not-found.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}

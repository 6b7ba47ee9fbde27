//! Driving port for message reads.

use async_trait::async_trait;

use crate::domain::{Error, Message, MessageId, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageQuery: Send + Sync {
    /// Fetch a message or fail with not-found.
    async fn get_message(&self, id: MessageId) -> Result<Message, Error>;

    /// List a user's messages; fails with not-found when the user is missing.
    async fn list_user_messages(&self, owner: UserId) -> Result<Vec<Message>, Error>;
}

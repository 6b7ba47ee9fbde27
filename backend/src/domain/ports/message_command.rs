//! Driving port for message mutations.

use async_trait::async_trait;

use crate::domain::{Error, Message, MessageChanges, MessageId, NewMessage, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageCommand: Send + Sync {
    /// Post a message owned by `owner`; the owner must exist.
    async fn create_message(&self, owner: UserId, message: NewMessage) -> Result<Message, Error>;

    /// Apply a partial update, failing with not-found for unknown ids.
    async fn update_message(
        &self,
        id: MessageId,
        changes: MessageChanges,
    ) -> Result<Message, Error>;

    /// Delete a message, failing with not-found for unknown ids.
    async fn delete_message(&self, id: MessageId) -> Result<(), Error>;
}

//! Port for message persistence.

use async_trait::async_trait;

use crate::domain::{Message, MessageChanges, MessageId, NewMessage, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by message repository adapters.
    pub enum MessagePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "message repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "message repository query failed: {message}",
    }
}

/// Port for reading and writing user-owned messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a message owned by `owner`.
    async fn insert(
        &self,
        owner: UserId,
        message: &NewMessage,
    ) -> Result<Message, MessagePersistenceError>;

    /// Fetch a message by identifier.
    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, MessagePersistenceError>;

    /// List the messages owned by a user in identifier order.
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Message>, MessagePersistenceError>;

    /// Apply a partial update. Returns `None` when the message does not exist.
    async fn update(
        &self,
        id: MessageId,
        changes: &MessageChanges,
    ) -> Result<Option<Message>, MessagePersistenceError>;

    /// Delete a message. Returns `false` when nothing was deleted.
    async fn delete(&self, id: MessageId) -> Result<bool, MessagePersistenceError>;
}

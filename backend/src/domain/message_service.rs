//! Message domain service implementing the message driving ports.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::{
    MessageCommand, MessagePersistenceError, MessageQuery, MessageRepository, UserRepository,
};
use crate::domain::user_service::find_user_or_fail;
use crate::domain::{Message, MessageChanges, MessageId, NewMessage, UserId};

fn map_message_persistence_error(error: MessagePersistenceError) -> Error {
    match error {
        MessagePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("message repository unavailable: {message}"))
        }
        MessagePersistenceError::Query { message } => {
            Error::internal(format!("message repository error: {message}"))
        }
    }
}

fn message_not_found(id: MessageId) -> Error {
    Error::not_found(format!("message {id} not found"))
}

/// Message service backed by user and message repositories.
///
/// The user repository is consulted so operations scoped to a user fail with
/// not-found before touching messages.
#[derive(Clone)]
pub struct MessageService<U, M> {
    user_repo: Arc<U>,
    message_repo: Arc<M>,
}

impl<U, M> MessageService<U, M> {
    pub fn new(user_repo: Arc<U>, message_repo: Arc<M>) -> Self {
        Self {
            user_repo,
            message_repo,
        }
    }
}

#[async_trait]
impl<U, M> MessageCommand for MessageService<U, M>
where
    U: UserRepository,
    M: MessageRepository,
{
    async fn create_message(&self, owner: UserId, message: NewMessage) -> Result<Message, Error> {
        find_user_or_fail(self.user_repo.as_ref(), owner).await?;
        self.message_repo
            .insert(owner, &message)
            .await
            .map_err(map_message_persistence_error)
    }

    async fn update_message(
        &self,
        id: MessageId,
        changes: MessageChanges,
    ) -> Result<Message, Error> {
        if changes.is_empty() {
            return self.get_message(id).await;
        }
        self.message_repo
            .update(id, &changes)
            .await
            .map_err(map_message_persistence_error)?
            .ok_or_else(|| message_not_found(id))
    }

    async fn delete_message(&self, id: MessageId) -> Result<(), Error> {
        let deleted = self
            .message_repo
            .delete(id)
            .await
            .map_err(map_message_persistence_error)?;
        if deleted {
            Ok(())
        } else {
            Err(message_not_found(id))
        }
    }
}

#[async_trait]
impl<U, M> MessageQuery for MessageService<U, M>
where
    U: UserRepository,
    M: MessageRepository,
{
    async fn get_message(&self, id: MessageId) -> Result<Message, Error> {
        self.message_repo
            .find_by_id(id)
            .await
            .map_err(map_message_persistence_error)?
            .ok_or_else(|| message_not_found(id))
    }

    async fn list_user_messages(&self, owner: UserId) -> Result<Vec<Message>, Error> {
        find_user_or_fail(self.user_repo.as_ref(), owner).await?;
        self.message_repo
            .list_for_user(owner)
            .await
            .map_err(map_message_persistence_error)
    }
}

#[cfg(test)]
#[path = "message_service_tests.rs"]
mod tests;

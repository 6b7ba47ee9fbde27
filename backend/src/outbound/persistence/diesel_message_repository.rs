//! PostgreSQL-backed `MessageRepository` using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MessagePersistenceError, MessageRepository};
use crate::domain::{Message, MessageChanges, MessageDraft, MessageId, NewMessage, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{MessageRow, MessageUpdate, NewMessageRow};
use super::pool::{DbPool, PoolError};
use super::schema::messages;

/// Diesel-backed implementation of the message repository port.
#[derive(Clone)]
pub struct DieselMessageRepository {
    pool: DbPool,
}

impl DieselMessageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MessagePersistenceError {
    map_basic_pool_error(error, MessagePersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> MessagePersistenceError {
    map_basic_diesel_error(
        error,
        MessagePersistenceError::query,
        MessagePersistenceError::connection,
    )
}

fn row_to_message(row: MessageRow) -> Result<Message, MessagePersistenceError> {
    let MessageRow {
        id,
        user_id,
        content,
        created_at,
        updated_at,
    } = row;
    let id = MessageId::new(id).map_err(|err| MessagePersistenceError::query(err.to_string()))?;
    let user_id =
        UserId::new(user_id).map_err(|err| MessagePersistenceError::query(err.to_string()))?;
    Ok(Message::new(MessageDraft {
        id,
        user_id,
        content,
        created_at,
        updated_at,
    }))
}

#[async_trait]
impl MessageRepository for DieselMessageRepository {
    async fn insert(
        &self,
        owner: UserId,
        message: &NewMessage,
    ) -> Result<Message, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewMessageRow {
            user_id: owner.get(),
            content: message.content(),
        };

        let stored: MessageRow = diesel::insert_into(messages::table)
            .values(&row)
            .returning(MessageRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_message(stored)
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = messages::table
            .find(id.get())
            .select(MessageRow::as_select())
            .first::<MessageRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_message).transpose()
    }

    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Message>, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MessageRow> = messages::table
            .filter(messages::user_id.eq(owner.get()))
            .order(messages::id.asc())
            .select(MessageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_message).collect()
    }

    async fn update(
        &self,
        id: MessageId,
        changes: &MessageChanges,
    ) -> Result<Option<Message>, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let update = MessageUpdate {
            content: changes.content(),
            updated_at: Utc::now(),
        };

        let row = diesel::update(messages::table.find(id.get()))
            .set(&update)
            .returning(MessageRow::as_returning())
            .get_result::<MessageRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_message).transpose()
    }

    async fn delete(&self, id: MessageId) -> Result<bool, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(messages::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

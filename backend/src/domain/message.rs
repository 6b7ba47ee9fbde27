//! Message data model.
//!
//! A message is a short piece of text owned by exactly one user.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Validation errors returned by the message constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageValidationError {
    #[error("message id must be a positive integer")]
    InvalidId,
}

/// Store-assigned message identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MessageId(i64);

impl MessageId {
    /// Validate and construct a [`MessageId`].
    pub fn new(id: i64) -> Result<Self, MessageValidationError> {
        if id <= 0 {
            return Err(MessageValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Access the raw integer key.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MessageId {
    type Err = MessageValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| MessageValidationError::InvalidId)?;
        Self::new(raw)
    }
}

impl TryFrom<i64> for MessageId {
    type Error = MessageValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageId> for i64 {
    fn from(value: MessageId) -> Self {
        value.0
    }
}

/// Field bundle used to materialise a [`Message`] from storage.
#[derive(Debug, Clone)]
pub struct MessageDraft {
    pub id: MessageId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A message posted by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    user_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Message {
    pub fn new(draft: MessageDraft) -> Self {
        let MessageDraft {
            id,
            user_id,
            content,
            created_at,
            updated_at,
        } = draft;
        Self {
            id,
            user_id,
            content,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Owner of the message.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Fields accepted when posting a message. The owner comes from the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    content: String,
}

impl NewMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        self.content.as_str()
    }
}

/// Partial update for a message. Only `content` is writable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageChanges {
    content: Option<String>,
}

impl MessageChanges {
    pub fn new(content: Option<String>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Produce the updated message, stamping `updated_at` when anything changed.
    pub fn apply(&self, message: &Message, now: DateTime<Utc>) -> Message {
        match &self.content {
            None => message.clone(),
            Some(content) => Message {
                content: content.clone(),
                updated_at: now,
                ..message.clone()
            },
        }
    }
}

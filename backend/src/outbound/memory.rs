//! In-memory adapter for the repository ports.
//!
//! Used when no `database_url` is configured and by the HTTP tests. One
//! [`InMemoryStore`] implements all three repositories over shared state so
//! follow lists and message ownership resolve against the same users.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    FollowPersistenceError, FollowRepository, MessagePersistenceError, MessageRepository,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    FollowEdge, Message, MessageChanges, MessageDraft, MessageId, NewMessage, NewUser, User,
    UserChanges, UserDraft, UserId,
};

#[derive(Debug, Default)]
struct MemoryState {
    users: BTreeMap<UserId, User>,
    messages: BTreeMap<MessageId, Message>,
    edges: BTreeSet<FollowEdge>,
    last_user_id: i64,
    last_message_id: i64,
}

impl MemoryState {
    fn followed_users(&self, follower: UserId) -> Vec<User> {
        self.edges
            .iter()
            .filter(|edge| edge.follower() == follower)
            .filter_map(|edge| self.users.get(&edge.followed()).cloned())
            .collect()
    }

    fn follower_users(&self, followed: UserId) -> Vec<User> {
        let mut users: Vec<User> = self
            .edges
            .iter()
            .filter(|edge| edge.followed() == followed)
            .filter_map(|edge| self.users.get(&edge.follower()).cloned())
            .collect();
        users.sort_by_key(User::id);
        users
    }
}

/// Shared, cloneable in-memory store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, String> {
        self.state
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }
}

fn next_id(last: &mut i64) -> Result<i64, String> {
    *last = last
        .checked_add(1)
        .ok_or_else(|| "identifier space exhausted".to_owned())?;
    Ok(*last)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self.lock().map_err(UserPersistenceError::connection)?;
        let raw = next_id(&mut state.last_user_id).map_err(UserPersistenceError::query)?;
        let id = UserId::new(raw).map_err(|err| UserPersistenceError::query(err.to_string()))?;
        let now = Utc::now();
        let stored = User::new(UserDraft {
            id,
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            created_at: now,
            updated_at: now,
        });
        state.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::connection)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.lock().map_err(UserPersistenceError::connection)?;
        Ok(state.users.values().cloned().collect())
    }

    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.lock().map_err(UserPersistenceError::connection)?;
        let Some(current) = state.users.get_mut(&id) else {
            return Ok(None);
        };
        *current = changes.apply(current, Utc::now());
        Ok(Some(current.clone()))
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn insert(
        &self,
        owner: UserId,
        message: &NewMessage,
    ) -> Result<Message, MessagePersistenceError> {
        let mut state = self.lock().map_err(MessagePersistenceError::connection)?;
        if !state.users.contains_key(&owner) {
            return Err(MessagePersistenceError::query(
                "referenced record does not exist",
            ));
        }
        let raw = next_id(&mut state.last_message_id).map_err(MessagePersistenceError::query)?;
        let id =
            MessageId::new(raw).map_err(|err| MessagePersistenceError::query(err.to_string()))?;
        let now = Utc::now();
        let stored = Message::new(MessageDraft {
            id,
            user_id: owner,
            content: message.content().to_owned(),
            created_at: now,
            updated_at: now,
        });
        state.messages.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, MessagePersistenceError> {
        let state = self.lock().map_err(MessagePersistenceError::connection)?;
        Ok(state.messages.get(&id).cloned())
    }

    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Message>, MessagePersistenceError> {
        let state = self.lock().map_err(MessagePersistenceError::connection)?;
        Ok(state
            .messages
            .values()
            .filter(|message| message.user_id() == owner)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: MessageId,
        changes: &MessageChanges,
    ) -> Result<Option<Message>, MessagePersistenceError> {
        let mut state = self.lock().map_err(MessagePersistenceError::connection)?;
        let Some(current) = state.messages.get_mut(&id) else {
            return Ok(None);
        };
        *current = changes.apply(current, Utc::now());
        Ok(Some(current.clone()))
    }

    async fn delete(&self, id: MessageId) -> Result<bool, MessagePersistenceError> {
        let mut state = self.lock().map_err(MessagePersistenceError::connection)?;
        Ok(state.messages.remove(&id).is_some())
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn exists(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        let state = self.lock().map_err(FollowPersistenceError::connection)?;
        Ok(state.edges.contains(&edge))
    }

    async fn insert(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut state = self.lock().map_err(FollowPersistenceError::connection)?;
        if !state.users.contains_key(&edge.follower()) || !state.users.contains_key(&edge.followed())
        {
            return Err(FollowPersistenceError::query(
                "referenced record does not exist",
            ));
        }
        Ok(state.edges.insert(edge))
    }

    async fn delete(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut state = self.lock().map_err(FollowPersistenceError::connection)?;
        Ok(state.edges.remove(&edge))
    }

    async fn list_followed(&self, follower: UserId) -> Result<Vec<User>, FollowPersistenceError> {
        let state = self.lock().map_err(FollowPersistenceError::connection)?;
        Ok(state.followed_users(follower))
    }

    async fn list_followers(&self, followed: UserId) -> Result<Vec<User>, FollowPersistenceError> {
        let state = self.lock().map_err(FollowPersistenceError::connection)?;
        Ok(state.follower_users(followed))
    }
}

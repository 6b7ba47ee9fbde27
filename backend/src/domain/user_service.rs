//! User domain service implementing the user driving ports.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::{UserCommand, UserPersistenceError, UserQuery, UserRepository};
use crate::domain::{NewUser, User, UserChanges, UserId};

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

pub(crate) fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

/// Fetch a user or fail with not-found.
pub(crate) async fn find_user_or_fail<U>(users: &U, id: UserId) -> Result<User, Error>
where
    U: UserRepository + ?Sized,
{
    users
        .find_by_id(id)
        .await
        .map_err(map_user_persistence_error)?
        .ok_or_else(|| user_not_found(id))
}

/// User service backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service with the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        self.user_repo
            .insert(&user)
            .await
            .map_err(map_user_persistence_error)
    }

    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, Error> {
        if changes.is_empty() {
            return find_user_or_fail(self.user_repo.as_ref(), id).await;
        }
        self.user_repo
            .update(id, &changes)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl<R> UserQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo
            .list()
            .await
            .map_err(map_user_persistence_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        find_user_or_fail(self.user_repo.as_ref(), id).await
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;

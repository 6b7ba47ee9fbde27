//! PostgreSQL-backed `UserRepository` using Diesel ORM.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserChanges, UserDraft, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Convert a database row into a domain user.
pub(super) fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        name,
        email,
        created_at,
        updated_at,
    } = row;
    let id = UserId::new(id).map_err(|err| UserPersistenceError::query(err.to_string()))?;
    Ok(User::new(UserDraft {
        id,
        name,
        email,
        created_at,
        updated_at,
    }))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            name: user.name(),
            email: user.email(),
        };

        let stored: UserRow = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_user(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let update = UserUpdate {
            name: changes.name(),
            email: changes.email(),
            updated_at: Utc::now(),
        };

        let row = diesel::update(users::table.find(id.get()))
            .set(&update)
            .returning(UserRow::as_returning())
            .get_result::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion tests; query behaviour is covered by the PostgreSQL
    //! integration suite.

    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn row(id: i64) -> UserRow {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).single().expect("timestamp");
        UserRow {
            id,
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            created_at: at,
            updated_at: at,
        }
    }

    #[rstest]
    fn valid_rows_become_users() {
        let user = row_to_user(row(7)).expect("valid row");
        assert_eq!(user.id().get(), 7);
        assert_eq!(user.name(), "Ada");
        assert_eq!(user.email(), "ada@example.com");
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn non_positive_ids_are_query_errors(#[case] id: i64) {
        let err = row_to_user(row(id)).expect_err("invalid id");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn checkout_failures_are_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, UserPersistenceError::connection("timed out"));
    }
}

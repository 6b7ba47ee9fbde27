//! PostgreSQL-backed `FollowRepository` over the `followers` table.
//!
//! Inserts rely on the composite primary key with `ON CONFLICT DO NOTHING`,
//! so racing follow calls still leave a single edge.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FollowPersistenceError, FollowRepository};
use crate::domain::{FollowEdge, User, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::diesel_user_repository::row_to_user;
use super::models::{NewFollowerRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{followers, users};

/// Diesel-backed implementation of the follow repository port.
#[derive(Clone)]
pub struct DieselFollowRepository {
    pool: DbPool,
}

impl DieselFollowRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FollowPersistenceError {
    map_basic_pool_error(error, FollowPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> FollowPersistenceError {
    map_basic_diesel_error(
        error,
        FollowPersistenceError::query,
        FollowPersistenceError::connection,
    )
}

fn rows_to_users(rows: Vec<UserRow>) -> Result<Vec<User>, FollowPersistenceError> {
    rows.into_iter()
        .map(|row| row_to_user(row).map_err(|err| FollowPersistenceError::query(err.to_string())))
        .collect()
}

fn key(edge: FollowEdge) -> (i64, i64) {
    (edge.follower().get(), edge.followed().get())
}

#[async_trait]
impl FollowRepository for DieselFollowRepository {
    async fn exists(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(followers::table.find(key(edge))))
            .get_result::<bool>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn insert(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (follower_id, followed_id) = key(edge);
        let row = NewFollowerRow {
            follower_id,
            followed_id,
        };

        let inserted = diesel::insert_into(followers::table)
            .values(&row)
            .on_conflict_do_nothing()
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(inserted > 0)
    }

    async fn delete(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(followers::table.find(key(edge)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn list_followed(&self, follower: UserId) -> Result<Vec<User>, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = followers::table
            .inner_join(users::table.on(users::id.eq(followers::followed_id)))
            .filter(followers::follower_id.eq(follower.get()))
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_users(rows)
    }

    async fn list_followers(&self, followed: UserId) -> Result<Vec<User>, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = followers::table
            .inner_join(users::table.on(users::id.eq(followers::follower_id)))
            .filter(followers::followed_id.eq(followed.get()))
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_users(rows)
    }
}

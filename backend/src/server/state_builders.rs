//! Selects repository adapters for the HTTP state.

use std::sync::Arc;

use tracing::{info, warn};

use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryStore;
use backend::outbound::persistence::{
    DbPool, DieselFollowRepository, DieselMessageRepository, DieselUserRepository,
};

use super::ServerConfig;

fn diesel_state(pool: &DbPool) -> HttpState {
    HttpState::from_repositories(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselMessageRepository::new(pool.clone())),
        Arc::new(DieselFollowRepository::new(pool.clone())),
    )
}

fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    HttpState::from_repositories(store.clone(), store.clone(), store)
}

/// Use the Diesel repositories when a pool is configured, otherwise one
/// shared in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL repositories");
            diesel_state(pool)
        }
        None => {
            warn!("no database configured; data is kept in memory and lost on exit");
            memory_state()
        }
    }
}

//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FollowCommand, FollowQuery, FollowRepository, MessageCommand, MessageQuery,
    MessageRepository, UserCommand, UserQuery, UserRepository,
};
use crate::domain::{FollowService, MessageService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
    pub messages: Arc<dyn MessageCommand>,
    pub messages_query: Arc<dyn MessageQuery>,
    pub follows: Arc<dyn FollowCommand>,
    pub follows_query: Arc<dyn FollowQuery>,
}

impl HttpState {
    /// Wire the domain services over a set of repository adapters.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new());
    /// let state = HttpState::from_repositories(store.clone(), store.clone(), store);
    /// let _users = state.users_query.clone();
    /// ```
    pub fn from_repositories<U, M, F>(users: Arc<U>, messages: Arc<M>, follows: Arc<F>) -> Self
    where
        U: UserRepository + 'static,
        M: MessageRepository + 'static,
        F: FollowRepository + 'static,
    {
        let user_service = Arc::new(UserService::new(Arc::clone(&users)));
        let message_service = Arc::new(MessageService::new(Arc::clone(&users), messages));
        let follow_service = Arc::new(FollowService::new(users, follows));
        Self {
            users: user_service.clone(),
            users_query: user_service,
            messages: message_service.clone(),
            messages_query: message_service,
            follows: follow_service.clone(),
            follows_query: follow_service,
        }
    }
}

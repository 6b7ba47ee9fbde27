//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Command`, `*Query`) are implemented by domain services and called
//! by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod follow_command;
mod follow_query;
mod follow_repository;
mod message_command;
mod message_query;
mod message_repository;
mod user_command;
mod user_query;
mod user_repository;

pub use follow_command::FollowCommand;
#[cfg(test)]
pub use follow_command::MockFollowCommand;
pub use follow_query::FollowQuery;
#[cfg(test)]
pub use follow_query::MockFollowQuery;
#[cfg(test)]
pub use follow_repository::MockFollowRepository;
pub use follow_repository::{FollowPersistenceError, FollowRepository};
pub use message_command::MessageCommand;
#[cfg(test)]
pub use message_command::MockMessageCommand;
#[cfg(test)]
pub use message_query::MockMessageQuery;
pub use message_query::MessageQuery;
#[cfg(test)]
pub use message_repository::MockMessageRepository;
pub use message_repository::{MessagePersistenceError, MessageRepository};
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::UserCommand;
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};

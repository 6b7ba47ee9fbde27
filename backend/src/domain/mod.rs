//! Domain primitives, services and ports.
//!
//! Purpose: define the user, message and follow-edge model plus the services
//! that implement the driving ports. Nothing in here knows about HTTP or
//! Diesel; adapters live under `inbound` and `outbound`.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - User, Message, FollowEdge — the persisted entities.
//! - UserService, MessageService, FollowService — driving port implementations.

pub mod error;
pub mod follow;
mod follow_service;
pub mod message;
mod message_service;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::follow::FollowEdge;
pub use self::follow_service::FollowService;
pub use self::message::{
    Message, MessageChanges, MessageDraft, MessageId, MessageValidationError, NewMessage,
};
pub use self::message_service::MessageService;
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserChanges, UserDraft, UserId, UserValidationError};
pub use self::user_service::UserService;

/// HTTP header name used to expose trace identifiers to clients.
pub const TRACE_ID_HEADER: &str = "trace-id";

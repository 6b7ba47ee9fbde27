//! Twittor backend library: users, messages and follow edges behind a REST API.
//!
//! Layout follows ports and adapters: `domain` holds the model, services and
//! port traits; `inbound::http` exposes them over actix-web; `outbound`
//! implements the repositories on PostgreSQL or in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

//! Outbound adapters implementing the repository ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel ORM
//! - **memory**: process-local store used without a database and in tests

pub mod memory;
pub mod persistence;

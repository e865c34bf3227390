//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL catalogue repository using Diesel ORM
//! - **memory**: mutex-guarded catalogue repository for tests and
//!   database-less local runs
//!
//! Adapters translate between domain types and store representations. They
//! contain no business logic.

pub mod memory;
pub mod persistence;

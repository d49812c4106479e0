//! Outbound adapters implementing the store ports.
//!
//! - **memory**: a process-local store used when no database is configured
//!   and as the fixture store in tests.
//! - **persistence**: PostgreSQL-backed repositories using Diesel.
//!
//! Adapters translate between domain records and their storage
//! representation. They contain no request handling logic.

pub mod memory;
pub mod persistence;

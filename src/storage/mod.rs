//! Storage layer for the planner
//!
//! Provides the in-memory account store and its on-disk JSON gateway with
//! atomic writes.

pub mod file_io;
pub mod gateway;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use gateway::PersistenceGateway;
pub use store::AccountStore;

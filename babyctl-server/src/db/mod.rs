//! Database layer - connection pool and the name store
//!
//! Handlers never see a pool directly; they talk to a [`NameStore`],
//! which is injected into router state at startup.

pub mod pool;
pub mod repos;

pub use pool::{create_pool, ping};
pub use repos::*;

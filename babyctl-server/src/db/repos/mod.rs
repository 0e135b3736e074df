//! Name store implementations
//!
//! - `names`: the `NameStore` trait and its PostgreSQL implementation
//! - `memory`: an in-process store with the same semantics

pub mod memory;
pub mod names;

pub use memory::MemoryNameStore;
pub use names::{DbError, NameStore, PgNameStore};

//! Domain models
//!
//! Request bodies decode into `NewName`; rows come back as `NameRecord`.

pub mod name;
pub mod validation;

pub use name::{NameRecord, NewName};
pub use validation::{parse_id, ValidationError};

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs carrying their payload rules

pub mod author;
pub mod book;
pub mod category;
pub mod pagination;
